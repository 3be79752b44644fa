//! Remote order store client (Sanity-style content API).
//!
//! The store exposes two HTTP endpoints this panel uses:
//! - a GROQ query endpoint for reads (order snapshots)
//! - a mutation endpoint for writes (patch/set commits)
//!
//! Both speak plain JSON over HTTPS with a bearer token. There is no retry,
//! timeout, or caching layer here; the store is the sole arbiter of
//! consistency and a failed call is surfaced to the caller as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use orderdesk_admin::sanity::SanityClient;
//!
//! let client = SanityClient::new(&config.sanity);
//!
//! let orders = client.fetch_orders().await?;
//! client.update_order_status("order-abc123", "shipped").await?;
//! ```

mod client;

pub use client::SanityClient;

use thiserror::Error;

/// Errors that can occur when interacting with the remote order store.
#[derive(Debug, Error)]
pub enum SanityError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The store reported an error for the request.
    #[error("Store error: {0}")]
    Api(String),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limited by the store.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanity_error_display() {
        let err = SanityError::Api("query malformed".to_string());
        assert_eq!(err.to_string(), "Store error: query malformed");
    }

    #[test]
    fn test_rate_limited_error() {
        let err = SanityError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_unauthorized_error() {
        let err = SanityError::Unauthorized("Invalid token".to_string());
        assert_eq!(err.to_string(), "Unauthorized: Invalid token");
    }
}
