//! Course configuration, loaded from an optional TOML file.
//!
//! Every section falls back to its defaults, so an empty file (or no file at
//! all) yields a runnable course.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::prototype::Enemy;

/// Looked up in the working directory when no path is passed on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "patterns.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CourseConfig {
    pub logging: LoggingConfig,
    pub singleton: SingletonConfig,
    pub deployment: DeploymentConfig,
    pub notification: NotificationConfig,
    pub prototype: PrototypeConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SingletonConfig {
    /// Threads released at once in the first-access race.
    pub threads: usize,
}

impl Default for SingletonConfig {
    fn default() -> Self {
        Self { threads: 8 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeploymentConfig {
    pub known_servers: Vec<String>,
    pub run_integration_tests: bool,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            known_servers: vec!["prod.server".to_string(), "staging.server".to_string()],
            run_integration_tests: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    pub sms_max_len: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { sms_max_len: 160 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrototypeConfig {
    pub templates: Vec<TemplateConfig>,
}

impl Default for PrototypeConfig {
    fn default() -> Self {
        Self {
            templates: vec![
                TemplateConfig {
                    key: "flying".to_string(),
                    kind: "FlyingEnemy".to_string(),
                    health: 100,
                    speed: 10.0,
                    armored: false,
                    weapon: "Cannon".to_string(),
                },
                TemplateConfig {
                    key: "basic".to_string(),
                    kind: "BasicEnemy".to_string(),
                    health: 50,
                    speed: 5.0,
                    armored: false,
                    weapon: "Machine Gun".to_string(),
                },
            ],
        }
    }
}

/// One `[[prototype.templates]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    pub key: String,
    pub kind: String,
    pub health: u32,
    pub speed: f64,
    #[serde(default)]
    pub armored: bool,
    pub weapon: String,
}

impl TemplateConfig {
    pub fn to_enemy(&self) -> Enemy {
        Enemy::new(
            self.kind.clone(),
            self.health,
            self.speed,
            self.armored,
            self.weapon.clone(),
        )
    }
}

impl CourseConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CourseConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded course config");
        Self::from_toml(&content)
    }

    /// Resolves the config for a demo binary: an explicit path wins, then
    /// `patterns.toml` in the working directory, then the defaults.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(&path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Same as [`CourseConfig::load`], taking the path from the first CLI argument.
    pub fn from_args() -> Result<Self, ConfigError> {
        Self::load(std::env::args_os().nth(1).map(PathBuf::from))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.singleton.threads == 0 {
            return Err(ConfigError::invalid(
                "singleton.threads",
                "at least one thread is required",
            ));
        }
        if self.deployment.known_servers.is_empty() {
            return Err(ConfigError::invalid(
                "deployment.known_servers",
                "list at least one server",
            ));
        }
        if self.notification.sms_max_len == 0 {
            return Err(ConfigError::invalid(
                "notification.sms_max_len",
                "must be greater than zero",
            ));
        }
        for template in &self.prototype.templates {
            if template.key.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "prototype.templates.key",
                    "template keys cannot be blank",
                ));
            }
        }
        Ok(())
    }
}
