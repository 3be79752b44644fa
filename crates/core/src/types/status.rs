//! Order status values and status filtering.

use serde::{Deserialize, Serialize};

/// The enumerated fulfillment statuses offered by the status selector.
///
/// The store itself treats status as an open-ended string; this enum only
/// drives the selector options and the default shown for an order with no
/// status (the first value, never an "unset" choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// All selectable statuses, in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Shipped, Self::Delivered];

    /// Lowercase wire value stored in the remote document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }

    /// Capitalized label for selector options.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

/// Dashboard status filter: everything, or one named status.
///
/// Named filters match case-insensitively against the order's status;
/// orders with no status only appear under [`StatusFilter::All`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(String),
}

impl StatusFilter {
    /// Parse a filter from its query-string value. `None`, empty, and
    /// "All" (any case) all mean no filtering.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => Self::All,
            Some(s) if s.is_empty() || s.eq_ignore_ascii_case("all") => Self::All,
            Some(s) => Self::Status(s.to_lowercase()),
        }
    }

    /// Whether an order with the given status passes this filter.
    #[must_use]
    pub fn matches(&self, status: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Status(wanted) => {
                status.is_some_and(|s| s.to_lowercase() == wanted.to_lowercase())
            }
        }
    }

    /// Query-string value for round-tripping the active filter.
    #[must_use]
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Status(s) => s,
        }
    }

    /// Whether this filter is the given selectable status.
    #[must_use]
    pub fn is_status(&self, status: OrderStatus) -> bool {
        matches!(self, Self::Status(s) if s.eq_ignore_ascii_case(status.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_includes_unset_status() {
        assert!(StatusFilter::All.matches(None));
        assert!(StatusFilter::All.matches(Some("pending")));
        assert!(StatusFilter::All.matches(Some("anything-else")));
    }

    #[test]
    fn test_named_filter_excludes_unset_status() {
        for name in ["pending", "shipped", "delivered"] {
            assert!(!StatusFilter::parse(Some(name)).matches(None));
        }
    }

    #[test]
    fn test_named_filter_matches_case_insensitively() {
        let filter = StatusFilter::parse(Some("Shipped"));
        assert!(filter.matches(Some("shipped")));
        assert!(filter.matches(Some("SHIPPED")));
        assert!(filter.matches(Some("Shipped")));
        assert!(!filter.matches(Some("pending")));
    }

    #[test]
    fn test_named_filter_does_not_match_empty_string_status() {
        // An empty status is distinct from an unset one, but still matches
        // no named filter.
        assert!(!StatusFilter::parse(Some("pending")).matches(Some("")));
        assert!(StatusFilter::All.matches(Some("")));
    }

    #[test]
    fn test_parse_all_variants() {
        assert_eq!(StatusFilter::parse(None), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("")), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("All")), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("ALL")), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse(Some("Pending")),
            StatusFilter::Status("pending".to_string())
        );
    }

    #[test]
    fn test_filter_round_trips_query_value() {
        let filter = StatusFilter::parse(Some("delivered"));
        assert_eq!(
            StatusFilter::parse(Some(filter.as_query_value())),
            filter
        );
        assert_eq!(StatusFilter::All.as_query_value(), "All");
    }

    #[test]
    fn test_order_status_from_str() {
        assert_eq!("PENDING".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
        assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!("Delivered".parse::<OrderStatus>().unwrap(), OrderStatus::Delivered);
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_selector_default_is_first_enumerated_status() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(OrderStatus::ALL[0], OrderStatus::Pending);
    }

    #[test]
    fn test_display_matches_wire_value() {
        assert_eq!(OrderStatus::Shipped.to_string(), "shipped");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"delivered\""
        );
    }
}
