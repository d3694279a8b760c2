use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chatbot_engine::{BackendError, BackendSettings, EngineConfig, DEFAULT_BASE_URL};
use chatbot_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "chatbot_client.ron";

/// Client settings read from `chatbot_client.ron` in the working directory.
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_id: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: None,
            connect_timeout_secs: None,
            request_timeout_secs: None,
            log_destination: LogDestination::Terminal,
            log_file: PathBuf::from("./chatbot_client.log"),
            debug: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl ClientConfig {
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn engine_config(&self) -> Result<EngineConfig, BackendError> {
        let mut backend = BackendSettings::new(&self.base_url)?;
        backend.connect_timeout = self.connect_timeout_secs.map(Duration::from_secs);
        backend.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        Ok(EngineConfig {
            backend,
            user_id: self
                .user_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(ToOwned::to_owned),
        })
    }
}

/// Loads the config file. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ClientConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use chatbot_engine::{Endpoint, FailureKind};
    use chatbot_logging::LogDestination;
    use tempfile::TempDir;

    use super::{load, ClientConfig, ConfigError, CONFIG_FILENAME};

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(base_url: "https://rag.internal:8443", user_id: Some("u-1"), request_timeout_secs: Some(30), log_destination: Both)"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.base_url, "https://rag.internal:8443");
        assert_eq!(config.user_id.as_deref(), Some("u-1"));
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.connect_timeout_secs, None);
        assert!(!config.debug);

        let engine = config.engine_config().unwrap();
        assert_eq!(engine.backend.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(engine.backend.connect_timeout, None);
        assert_eq!(engine.user_id.as_deref(), Some("u-1"));
        assert_eq!(
            engine.backend.endpoint(Endpoint::StartCrawl).unwrap().as_str(),
            "https://rag.internal:8443/start-crawl"
        );
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(base_url: ").unwrap();

        assert!(matches!(load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = ClientConfig {
            base_url: "localhost".to_string(),
            ..ClientConfig::default()
        };
        let err = config.engine_config().unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }

    #[test]
    fn blank_user_id_is_dropped() {
        let config = ClientConfig {
            user_id: Some("   ".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(config.engine_config().unwrap().user_id, None);
    }

    #[test]
    fn debug_raises_log_level() {
        let config = ClientConfig {
            debug: true,
            ..ClientConfig::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        assert_eq!(ClientConfig::default().log_level(), log::LevelFilter::Info);
    }
}
