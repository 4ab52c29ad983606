//! Configuration loader for readpal.
//!
//! Reads `config.toml` from the data directory (`~/.readpal/` in
//! production) and deserializes it into [`AppConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use readpal_types::config::AppConfig;

/// Directory name under the user's home for readpal data.
const DATA_DIR_NAME: &str = ".readpal";

/// Resolve the default data directory (`~/.readpal`).
///
/// Falls back to the current directory when no home directory can be
/// determined.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.history_window, 8);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
backend_url = "https://coach.example.org"
history_window = 4
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.backend_url, "https://coach.example.org");
        assert_eq!(config.history_window, 4);
        // Unspecified fields keep their defaults.
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.backend_url, "http://localhost:8000");
    }

    #[test]
    fn default_data_dir_is_under_home() {
        let dir = default_data_dir();
        assert!(dir.ends_with(".readpal"));
    }
}
