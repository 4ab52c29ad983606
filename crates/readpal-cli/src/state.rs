//! Shared application state for CLI commands.

use std::sync::Arc;
use std::time::Duration;

use readpal_core::persona::PersonaRegistry;
use readpal_infra::config::{default_data_dir, load_config};
use readpal_infra::http::HttpBackend;
use readpal_types::config::AppConfig;

use crate::catalog;

/// Configuration, backend client, and persona registry shared by all
/// commands.
pub struct AppState {
    pub config: AppConfig,
    pub backend: Arc<HttpBackend>,
    pub registry: PersonaRegistry,
}

impl AppState {
    /// Load config from the data directory and build the backend client.
    ///
    /// `backend_url_override` (the `--backend-url` flag) takes priority
    /// over the config file.
    pub async fn init(backend_url_override: Option<String>) -> Self {
        let data_dir = default_data_dir();
        let mut config = load_config(&data_dir).await;
        if let Some(url) = backend_url_override {
            config.backend_url = url;
        }

        let backend = Arc::new(HttpBackend::new(
            config.backend_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        ));
        let registry = PersonaRegistry::new(catalog::builtin_catalog());

        Self {
            config,
            backend,
            registry,
        }
    }
}
