/// Backend origin used when no explicit configuration is provided.
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:8080";

/// Deployment configuration for the frontend.
///
/// Built once by the app shell and handed down through a
/// `ContextProvider<AppConfig>`, so the same UI can target a different
/// backend per deployment without touching component code.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    backend_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_ORIGIN)
    }
}

impl AppConfig {
    /// Create a config for the given backend origin. A trailing slash on
    /// the origin is stripped so URL building stays uniform.
    pub fn new(backend_origin: impl Into<String>) -> Self {
        let origin = backend_origin.into();
        Self {
            backend_origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint returning the current session's profile.
    pub fn user_url(&self) -> String {
        format!("{}/api/user", self.backend_origin)
    }

    /// Entry point of the backend-driven OAuth2 redirect chain.
    pub fn login_url(&self) -> String {
        format!("{}/oauth2/authorization/google", self.backend_origin)
    }

    /// Backend route that terminates the session (full-page navigation).
    pub fn logout_url(&self) -> String {
        format!("{}/logout", self.backend_origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.user_url(), "http://localhost:8080/api/user");
        assert_eq!(
            config.login_url(),
            "http://localhost:8080/oauth2/authorization/google"
        );
        assert_eq!(config.logout_url(), "http://localhost:8080/logout");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = AppConfig::new("https://example.com/");
        assert_eq!(config.user_url(), "https://example.com/api/user");
    }

    #[test]
    fn custom_origin_flows_into_every_url() {
        let config = AppConfig::new("https://auth.example.com");
        assert_eq!(config.user_url(), "https://auth.example.com/api/user");
        assert_eq!(
            config.login_url(),
            "https://auth.example.com/oauth2/authorization/google"
        );
        assert_eq!(config.logout_url(), "https://auth.example.com/logout");
    }
}
