//! User models for the Zendesk API.
//!
//! Users are vendor-side records correlated with stores through an
//! external identifier (the calling system's own store ID). They are
//! created lazily on first ticket interaction and never updated or
//! deleted by this client.

use serde::{Deserialize, Serialize};

/// A Zendesk user record.
///
/// Only the fields the integration reads are modeled; everything else
/// in the response is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID assigned by Zendesk.
    pub id: u64,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Email address, if the user has one.
    #[serde(default)]
    pub email: Option<String>,

    /// The calling system's own key for the store this user represents.
    #[serde(default)]
    pub external_id: Option<String>,

    /// Whether the user's identity has been verified.
    #[serde(default)]
    pub verified: Option<bool>,

    /// Role name (e.g., "end-user").
    #[serde(default)]
    pub role: Option<String>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Returns the name if present, otherwise a placeholder.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Response wrapper for `GET /users/search.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUsersResponse {
    /// Number of users matching the query.
    #[serde(default)]
    pub count: u64,

    /// The matching users.
    #[serde(default)]
    pub users: Vec<User>,
}

/// Response wrapper for single-user operations.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    /// The user record.
    pub user: User,
}
