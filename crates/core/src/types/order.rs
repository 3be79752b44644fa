//! Order documents as stored in the remote content store.

use serde::{Deserialize, Serialize};

/// A single cart line item on an order.
///
/// Line items are read-only in the admin panel; they are rendered on the
/// order detail view and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display name of the purchased product.
    pub name: String,
    /// Image reference for the product.
    pub image: String,
}

/// A customer purchase record held in the remote order store.
///
/// Every field except `status` is immutable from the admin panel's
/// perspective; the store assigns `_id` and owns the full lifecycle.
/// `status` is an open-ended set of strings compared case-insensitively;
/// an absent status is distinct from an empty one and is displayed as
/// "No status".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Opaque unique identifier assigned by the store.
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Stored as a JSON number in the source documents.
    #[serde(default)]
    pub phone: Option<i64>,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub total: f64,
    #[serde(default)]
    pub discount: f64,
    /// Opaque order timestamp string, read-only.
    #[serde(default)]
    pub order_data: Option<String>,
    /// Fulfillment status; `None` means "unset", which never matches a
    /// named filter.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
}

impl Order {
    /// Customer full name, first and last space-joined.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "_id": "order-abc123",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": 15551234567,
            "email": "ada@example.com",
            "address": "12 Analytical Way",
            "city": "London",
            "zipCode": "E1 6AN",
            "total": 129.5,
            "discount": 10,
            "orderData": "2026-08-01T10:00:00Z",
            "status": "pending",
            "cartItems": [
                { "name": "Engine Kit", "image": "https://cdn.example.com/kit.png" }
            ]
        }"#
    }

    #[test]
    fn test_order_deserializes_store_document() {
        let order: Order = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(order.id, "order-abc123");
        assert_eq!(order.status.as_deref(), Some("pending"));
        assert_eq!(order.cart_items.len(), 1);
        assert_eq!(order.cart_items[0].name, "Engine Kit");
        assert!((order.total - 129.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_and_missing_status_are_unset() {
        let with_null = sample_json().replace("\"pending\"", "null");
        let order: Order = serde_json::from_str(&with_null).unwrap();
        assert_eq!(order.status, None);

        let without = sample_json().replace("\"status\": \"pending\",", "");
        let order: Order = serde_json::from_str(&without).unwrap();
        assert_eq!(order.status, None);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "_id": "order-min",
            "firstName": "Min",
            "lastName": "Imal",
            "email": "min@example.com",
            "address": "1 Short St",
            "city": "Nowhere",
            "zipCode": "00000",
            "total": 5.0
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.phone, None);
        assert!(order.discount.abs() < f64::EPSILON);
        assert_eq!(order.order_data, None);
        assert!(order.cart_items.is_empty());
    }

    #[test]
    fn test_full_name_is_space_joined() {
        let order: Order = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(order.full_name(), "Ada Lovelace");
    }
}
