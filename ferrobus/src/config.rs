//! Client configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::executor::{TaskExecutor, TokioExecutor};

/// Configuration for client behavior and request defaults.
#[derive(Clone)]
pub struct ClientConfig {
    /// Endpoint the transport connects to.
    pub endpoint_url: String,

    /// Application name reported to the server.
    pub application_name: String,

    /// Default timeout hint stamped into request headers.
    pub request_timeout: Duration,

    /// Default diagnostics mask stamped into request headers.
    pub return_diagnostics: u32,

    /// Session idle timeout requested at activation.
    pub session_timeout: Duration,

    /// Namespace URIs seeded into the namespace table at construction,
    /// after the standard namespace.
    pub namespace_uris: Vec<String>,

    /// Executor the fault-notification queue worker runs on.
    ///
    /// Distinct from the transport's I/O threads so listener callbacks can
    /// never block request processing.
    pub executor: Arc<dyn TaskExecutor>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "tcp://localhost:4850".to_string(),
            application_name: "ferrobus client".to_string(),
            request_timeout: Duration::from_secs(60),
            return_diagnostics: 0,
            session_timeout: Duration::from_secs(120),
            namespace_uris: Vec::new(),
            executor: Arc::new(TokioExecutor),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given endpoint with default settings.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Self::default()
        }
    }

    /// Set the application name.
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = name.into();
        self
    }

    /// Set the default request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the default diagnostics mask.
    pub fn with_return_diagnostics(mut self, mask: u32) -> Self {
        self.return_diagnostics = mask;
        self
    }

    /// Set the session idle timeout requested at activation.
    pub fn with_session_timeout(mut self, timeout: Duration) -> Self {
        self.session_timeout = timeout;
        self
    }

    /// Seed namespace URIs into the namespace table.
    pub fn with_namespace_uris(mut self, uris: Vec<String>) -> Self {
        self.namespace_uris = uris;
        self
    }

    /// Set the executor for background notification work.
    pub fn with_executor(mut self, executor: Arc<dyn TaskExecutor>) -> Self {
        self.executor = executor;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("application_name", &self.application_name)
            .field("request_timeout", &self.request_timeout)
            .field("return_diagnostics", &self.return_diagnostics)
            .field("session_timeout", &self.session_timeout)
            .field("namespace_uris", &self.namespace_uris)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.return_diagnostics, 0);
        assert!(config.namespace_uris.is_empty());
    }

    #[test]
    fn test_builder_helpers() {
        let config = ClientConfig::new("tcp://plant-gateway:4850")
            .with_application_name("line-hmi")
            .with_request_timeout(Duration::from_secs(5))
            .with_namespace_uris(vec!["urn:plant:line-1".to_string()]);

        assert_eq!(config.endpoint_url, "tcp://plant-gateway:4850");
        assert_eq!(config.application_name, "line-hmi");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.namespace_uris.len(), 1);
    }
}
