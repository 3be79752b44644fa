//! Order dashboard route handlers.
//!
//! Listing with status filter, order detail, and the status update action.
//! Every page load reads a fresh snapshot from the remote store; a
//! successful update redirects back here, so the re-read doubles as
//! read-after-write reconciliation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use orderdesk_core::{CartItem, Order, OrderStatus, StatusFilter};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Dashboard query parameters: active filter plus flash messages.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub status: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Detail page query parameters (carries the active filter for the back
/// link).
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub status: Option<String>,
}

/// Status update form input.
#[derive(Debug, Deserialize)]
pub struct StatusFormInput {
    pub status: String,
    /// Active dashboard filter, round-tripped through a hidden field.
    pub filter: Option<String>,
}

// =============================================================================
// View Models
// =============================================================================

/// Order row for the dashboard table.
#[derive(Debug, Clone)]
pub struct OrderRowView {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub total: String,
    pub status_label: String,
    pub status_class: String,
    /// Value preselected in the row's status selector. Never an unset
    /// state: an order with no status shows the first enumerated status.
    pub status_value: String,
}

/// Format a store amount as a display price string.
fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Map a raw status to display text and badge class.
///
/// The raw status string is displayed as-is; only the badge color is
/// derived from the case-normalized value. Unset status gets a fixed
/// placeholder.
fn status_display(status: Option<&str>) -> (String, String) {
    status.map_or_else(
        || ("No status".to_string(), "badge-gray".to_string()),
        |s| {
            let class = match s.to_lowercase().as_str() {
                "pending" => "badge-yellow",
                "shipped" => "badge-red",
                "delivered" => "badge-green",
                _ => "badge-gray",
            };
            (s.to_string(), class.to_string())
        },
    )
}

/// Selector value for an order: its own status when it is one of the
/// enumerated values, otherwise the first enumerated status.
fn selector_value(status: Option<&str>) -> OrderStatus {
    status
        .and_then(|s| s.parse::<OrderStatus>().ok())
        .unwrap_or_default()
}

impl From<&Order> for OrderRowView {
    fn from(order: &Order) -> Self {
        let (status_label, status_class) = status_display(order.status.as_deref());

        Self {
            id: order.id.clone(),
            customer_name: order.full_name(),
            email: order.email.clone(),
            total: format_price(order.total),
            status_label,
            status_class,
            status_value: selector_value(order.status.as_deref()).to_string(),
        }
    }
}

/// Order detail view for the detail page.
#[derive(Debug, Clone)]
pub struct OrderDetailView {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
    pub total: String,
    pub discount: String,
    pub order_data: Option<String>,
    pub status_label: String,
    pub status_class: String,
    pub cart_items: Vec<CartItem>,
}

impl From<&Order> for OrderDetailView {
    fn from(order: &Order) -> Self {
        let (status_label, status_class) = status_display(order.status.as_deref());

        Self {
            id: order.id.clone(),
            customer_name: order.full_name(),
            email: order.email.clone(),
            phone: order.phone.map(|p| p.to_string()),
            address: format!("{}, {}, {}", order.address, order.city, order.zip_code),
            total: format_price(order.total),
            discount: format_price(order.discount),
            order_data: order.order_data.clone(),
            status_label,
            status_class,
            cart_items: order.cart_items.clone(),
        }
    }
}

/// Derive the displayed subset for a filter.
///
/// `All` passes everything through; a named filter keeps exactly the
/// orders whose status matches case-insensitively. Order is preserved.
fn apply_filter(orders: &[Order], filter: &StatusFilter) -> Vec<OrderRowView> {
    orders
        .iter()
        .filter(|o| filter.matches(o.status.as_deref()))
        .map(OrderRowView::from)
        .collect()
}

/// Build a dashboard URL carrying the active filter and an outcome flash.
fn dashboard_url(filter: &StatusFilter, outcome: Option<(&str, &str)>) -> String {
    let mut url = format!(
        "/admin/dashboard?status={}",
        urlencoding::encode(filter.as_query_value())
    );
    if let Some((kind, value)) = outcome {
        url.push('&');
        url.push_str(kind);
        url.push('=');
        url.push_str(value);
    }
    url
}

// =============================================================================
// Templates
// =============================================================================

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub admin_email: String,
    /// Active filter value for the selector (`All` or a lowercase status).
    pub filter_value: String,
    pub orders: Vec<OrderRowView>,
    /// True when the order fetch failed; the page then shows a retryable
    /// error banner instead of pretending the store is empty.
    pub load_failed: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Order detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/show.html")]
pub struct OrderShowTemplate {
    pub admin_email: String,
    pub filter_value: String,
    pub order: OrderDetailView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Dashboard page handler.
///
/// GET /admin/dashboard
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> DashboardTemplate {
    let filter = StatusFilter::parse(query.status.as_deref());

    let (orders, load_failed) = match state.sanity().fetch_orders().await {
        Ok(all) => (apply_filter(&all, &filter), false),
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            (vec![], true)
        }
    };

    DashboardTemplate {
        admin_email: admin.email,
        filter_value: filter.as_query_value().to_string(),
        orders,
        load_failed,
        error: query.error,
        success: query.success,
    }
}

/// Order detail page handler.
///
/// GET /admin/orders/{id}
pub async fn show(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<OrderShowTemplate, AppError> {
    let filter = StatusFilter::parse(query.status.as_deref());

    let order = state
        .sanity()
        .fetch_order(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(OrderShowTemplate {
        admin_email: admin.email,
        filter_value: filter.as_query_value().to_string(),
        order: OrderDetailView::from(&order),
    })
}

/// Status update handler.
///
/// POST /admin/orders/{id}/status
///
/// Writes only the status field. Success redirects back to the dashboard
/// (same filter) where the fresh read reflects the committed value;
/// failure redirects with a failure flash and changes nothing.
pub async fn update_status(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<StatusFormInput>,
) -> Response {
    let filter = StatusFilter::parse(input.filter.as_deref());

    // Only the enumerated selector values are accepted for writes.
    let Ok(status) = input.status.parse::<OrderStatus>() else {
        tracing::warn!(status = %input.status, "Rejected unknown status value");
        return Redirect::to(&dashboard_url(&filter, Some(("error", "invalid_status"))))
            .into_response();
    };

    match state.sanity().update_order_status(&id, status.as_str()).await {
        Ok(()) => {
            tracing::info!(order_id = %id, status = %status, "Order status updated");
            Redirect::to(&dashboard_url(&filter, Some(("success", "status_updated"))))
                .into_response()
        }
        Err(e) => {
            tracing::error!(order_id = %id, error = %e, "Failed to update order status");
            Redirect::to(&dashboard_url(&filter, Some(("error", "status_update_failed"))))
                .into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn order(id: &str, status: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some(15551234567),
            address: "12 Analytical Way".to_string(),
            city: "London".to_string(),
            zip_code: "E1 6AN".to_string(),
            total: 129.5,
            discount: 10.0,
            order_data: Some("2026-08-01T10:00:00Z".to_string()),
            status: status.map(String::from),
            cart_items: vec![CartItem {
                name: "Engine Kit".to_string(),
                image: "https://cdn.example.com/kit.png".to_string(),
            }],
        }
    }

    #[test]
    fn test_format_price_prefixes_currency() {
        assert_eq!(format_price(129.5), "$129.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_row_view_formatting() {
        let row = OrderRowView::from(&order("o1", Some("pending")));
        assert_eq!(row.customer_name, "Ada Lovelace");
        assert_eq!(row.email, "ada@example.com");
        assert_eq!(row.total, "$129.50");
        assert_eq!(row.status_label, "pending");
        assert_eq!(row.status_class, "badge-yellow");
        assert_eq!(row.status_value, "pending");
    }

    #[test]
    fn test_unset_status_shows_placeholder_but_selects_first_status() {
        let row = OrderRowView::from(&order("o1", None));
        assert_eq!(row.status_label, "No status");
        assert_eq!(row.status_class, "badge-gray");
        // The selector never displays an unset state as selectable
        assert_eq!(row.status_value, "pending");
    }

    #[test]
    fn test_unknown_status_displays_raw_text() {
        let row = OrderRowView::from(&order("o1", Some("Backordered")));
        assert_eq!(row.status_label, "Backordered");
        assert_eq!(row.status_class, "badge-gray");
        assert_eq!(row.status_value, "pending");
    }

    #[test]
    fn test_status_badge_classes_are_case_insensitive() {
        assert_eq!(status_display(Some("Shipped")).1, "badge-red");
        assert_eq!(status_display(Some("DELIVERED")).1, "badge-green");
    }

    #[test]
    fn test_apply_filter_named_excludes_unset_and_mismatched() {
        let orders = vec![
            order("o1", Some("pending")),
            order("o2", Some("Shipped")),
            order("o3", None),
            order("o4", Some("shipped")),
        ];

        let filter = StatusFilter::parse(Some("shipped"));
        let rows = apply_filter(&orders, &filter);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["o2", "o4"]);
    }

    #[test]
    fn test_apply_filter_all_keeps_everything_in_order() {
        let orders = vec![
            order("o1", Some("pending")),
            order("o2", None),
            order("o3", Some("delivered")),
        ];

        let rows = apply_filter(&orders, &StatusFilter::All);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o2", "o3"]);
    }

    #[test]
    fn test_apply_filter_does_not_mutate_source() {
        let orders = vec![order("o1", Some("pending")), order("o2", None)];
        let before = orders.clone();
        let _ = apply_filter(&orders, &StatusFilter::parse(Some("pending")));
        let _ = apply_filter(&orders, &StatusFilter::All);
        assert_eq!(orders, before);
    }

    #[test]
    fn test_detail_view_joins_address() {
        let detail = OrderDetailView::from(&order("o1", Some("delivered")));
        assert_eq!(detail.address, "12 Analytical Way, London, E1 6AN");
        assert_eq!(detail.phone.as_deref(), Some("15551234567"));
        assert_eq!(detail.discount, "$10.00");
        assert_eq!(detail.cart_items.len(), 1);
    }

    #[test]
    fn test_dashboard_url_round_trips_filter_and_flash() {
        let filter = StatusFilter::parse(Some("shipped"));
        assert_eq!(
            dashboard_url(&filter, Some(("success", "status_updated"))),
            "/admin/dashboard?status=shipped&success=status_updated"
        );
        assert_eq!(
            dashboard_url(&StatusFilter::All, None),
            "/admin/dashboard?status=All"
        );
    }
}
