use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestCredentials;

use shared::api::SessionUser;

use crate::config::AppConfig;

/// Failure to obtain the current session's profile.
///
/// The view treats every variant the same (no session to show); the
/// variants exist for tests and diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("malformed session payload: {0}")]
    Decode(String),
}

pub struct SessionApi;

impl SessionApi {
    /// Fetch the profile of the currently logged-in user.
    ///
    /// Credentials are included so the browser attaches the session cookie
    /// on the cross-origin call. A 401 from the backend and an unreachable
    /// backend both surface as errors here.
    pub async fn current_user(config: &AppConfig) -> Result<SessionUser, SessionError> {
        let response = Request::get(&config.user_url())
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SessionError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        decode_session_user(&body)
    }
}

/// Decode the `GET /api/user` response body.
fn decode_session_user(body: &str) -> Result<SessionUser, SessionError> {
    serde_json::from_str(body).map_err(|e| SessionError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_profile() {
        let user = decode_session_user(
            r#"{"name":"Ada Lovelace","email":"ada@example.com","picture":"https://x/a.png"}"#,
        )
        .unwrap();
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.picture, "https://x/a.png");
    }

    #[test]
    fn rejects_empty_body() {
        assert!(matches!(
            decode_session_user(""),
            Err(SessionError::Decode(_))
        ));
    }

    #[test]
    fn rejects_html_error_page() {
        // Some proxies answer 2xx with an HTML login page instead of JSON.
        assert!(matches!(
            decode_session_user("<html>Sign in</html>"),
            Err(SessionError::Decode(_))
        ));
    }

    #[test]
    fn rejects_profile_missing_fields() {
        assert!(matches!(
            decode_session_user(r#"{"name":"Ada"}"#),
            Err(SessionError::Decode(_))
        ));
    }

    #[test]
    fn error_display_names_the_failure() {
        assert_eq!(
            SessionError::Status(401).to_string(),
            "unexpected status: 401"
        );
        assert!(SessionError::Network("connection refused".into())
            .to_string()
            .contains("connection refused"));
    }
}
