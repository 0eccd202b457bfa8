use serde::{Deserialize, Serialize};

// ============================================================================
// Session API Types
// ============================================================================

/// Profile projection the backend exposes for the current session.
///
/// Returned by `GET /api/user` when the session cookie maps to a live
/// OAuth2/OIDC session. The backend answers non-2xx instead of returning a
/// partial profile, so all three fields are always present together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub picture: String,
}
