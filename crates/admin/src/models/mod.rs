//! Domain models for the admin panel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session keys used for storing data in tower-sessions.
pub mod session_keys {
    /// Key for the currently logged-in operator.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// The currently logged-in operator, as stored in the session.
///
/// Created on successful login, cleared on logout, expired by the session
/// layer after 24h of inactivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Operator email (the configured operator).
    pub email: String,
    /// When this session was established.
    pub logged_in_at: DateTime<Utc>,
}

impl CurrentAdmin {
    /// Create a session record for the operator, stamped with the current
    /// time.
    #[must_use]
    pub fn new(email: String) -> Self {
        Self {
            email,
            logged_in_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_admin_round_trips_through_session_json() {
        let admin = CurrentAdmin::new("op@example.com".to_string());
        let json = serde_json::to_string(&admin).expect("serialize");
        let back: CurrentAdmin = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, admin);
    }
}
