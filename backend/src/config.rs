use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub upload_dir: PathBuf,
    /// URL path under which stored logos are served back.
    pub public_prefix: String,
    pub frontend_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub require_square: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let frontend_dir = match std::env::var("CARGO_MANIFEST_DIR") {
            Ok(manifest_dir) => PathBuf::from(format!("{}/../frontend/dist", manifest_dir)),
            Err(_) => PathBuf::from("/usr/src/app/frontend/dist"),
        };

        Self {
            port: 8081,
            upload_dir: PathBuf::from("public").join("uploads"),
            public_prefix: "/api/image".to_string(),
            frontend_dir,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            require_square: true,
        }
    }
}

impl AppConfig {
    /// Defaults, then the YAML file named by `SIGNATURE_CONFIG`, then the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("SIGNATURE_CONFIG") {
            Ok(path) => Self::from_yaml(&std::fs::read_to_string(path)?)?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port,
            })?;
        }

        // A mounted volume wins over a plain upload directory.
        if let Some(mount) = lookup("VOLUME_MOUNT_PATH") {
            self.upload_dir = PathBuf::from(mount).join("uploads");
        } else if let Some(dir) = lookup("UPLOAD_DIR") {
            self.upload_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup("FRONTEND_DIR") {
            self.frontend_dir = PathBuf::from(dir);
        }

        if let Some(max) = lookup("MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = max.parse().map_err(|_| ConfigError::InvalidValue {
                key: "MAX_UPLOAD_BYTES",
                value: max,
            })?;
        }

        if let Some(flag) = lookup("REQUIRE_SQUARE") {
            self.require_square = match flag.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "REQUIRE_SQUARE",
                        value: flag,
                    });
                }
            };
        }

        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
