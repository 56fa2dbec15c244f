use std::path::{Path, PathBuf};

use serde::Deserialize;
use taqvim_rs::{CalendarId, Weekday};

/// File read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "taqvim.toml";

const MAX_PRECISION: usize = 15;

/// Errors from loading the TOML configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value for `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// On-disk layout of `taqvim.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    /// Default for `--calendar`.
    #[serde(default = "default_calendar")]
    pub calendar: String,
    /// `english` or `persian`.
    #[serde(default = "default_weekday_names")]
    pub weekday_names: String,
    /// Decimals printed for JD values.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for ConfigToml {
    fn default() -> Self {
        Self {
            calendar: default_calendar(),
            weekday_names: default_weekday_names(),
            precision: default_precision(),
        }
    }
}

fn default_calendar() -> String {
    "persian".to_string()
}
fn default_weekday_names() -> String {
    "english".to_string()
}
fn default_precision() -> usize {
    6
}

/// Language used when printing weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayNames {
    English,
    Persian,
}

impl WeekdayNames {
    pub fn render(self, weekday: Weekday) -> &'static str {
        match self {
            Self::English => weekday.name(),
            Self::Persian => weekday.persian_name(),
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub calendar: CalendarId,
    pub weekday_names: WeekdayNames,
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            calendar: CalendarId::Persian,
            weekday_names: WeekdayNames::English,
            precision: default_precision(),
        }
    }
}

impl ConfigToml {
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        let calendar = self
            .calendar
            .parse::<CalendarId>()
            .map_err(|e| ConfigError::Invalid {
                field: "calendar",
                message: e.to_string(),
            })?;
        let weekday_names = match self.weekday_names.trim().to_lowercase().as_str() {
            "english" => WeekdayNames::English,
            "persian" => WeekdayNames::Persian,
            other => {
                return Err(ConfigError::Invalid {
                    field: "weekday_names",
                    message: format!("expected `english` or `persian`, got `{other}`"),
                });
            }
        };
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid {
                field: "precision",
                message: format!("{} exceeds {MAX_PRECISION}", self.precision),
            });
        }
        Ok(Settings {
            calendar,
            weekday_names,
            precision: self.precision,
        })
    }
}

/// Parse and validate TOML text.
pub fn parse(text: &str, path: &Path) -> Result<Settings, ConfigError> {
    let raw: ConfigToml = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    raw.validate()
}

/// Load settings from `path`, or from [`DEFAULT_CONFIG_FILE`] when present,
/// or fall back to defaults.
pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                tracing::debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                return Ok(Settings::default());
            }
            default
        }
    };
    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loaded config");
    parse(&text, &path)
}
