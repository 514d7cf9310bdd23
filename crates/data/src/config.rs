//! Backend connection settings.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Where and how to reach the simulation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Service root, without trailing slash.
    pub base_url: String,
    /// Upload endpoint path.
    pub upload_path: String,
    /// Simulation endpoint path.
    pub train_path: String,
    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            upload_path: "/api/upload".to_string(),
            train_path: "/api/train".to_string(),
            timeout: None,
            user_agent: format!("simdash/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl BackendConfig {
    /// Creates a configuration for the given service root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the endpoint paths.
    #[must_use]
    pub fn with_paths(mut self, upload: impl Into<String>, train: impl Into<String>) -> Self {
        self.upload_path = upload.into();
        self.train_path = train.into();
        self
    }

    /// Full upload URL.
    #[must_use]
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, self.upload_path)
    }

    /// Full simulation URL.
    #[must_use]
    pub fn train_url(&self) -> String {
        format!("{}{}", self.base_url, self.train_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_base_and_paths() {
        let config = BackendConfig::new("http://localhost:8080/");
        assert_eq!(config.upload_url(), "http://localhost:8080/api/upload");
        assert_eq!(config.train_url(), "http://localhost:8080/api/train");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = BackendConfig::new("http://svc")
            .with_paths("/up", "/run")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.upload_url(), "http://svc/up");
        assert_eq!(config.train_url(), "http://svc/run");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
