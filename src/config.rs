use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, EUC_KR, UTF_8};

use crate::core::mode::Mode;

#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, String),
    InvalidValue { key: String, value: String },
    HomeDirNotFound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read(path, msg) => {
                write!(f, "Failed to read {}: {}", path.display(), msg)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for '{}': {}", key, value)
            }
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Shell settings, read once at startup from the rc file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_mode: Mode,
    pub compiler: String,
    pub editor: String,
    pub judge_id: String,
    pub line_limit: usize,
    pub encodings: Vec<&'static Encoding>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_mode: Mode::Codeforces,
            compiler: "g++".to_string(),
            editor: "code".to_string(),
            judge_id: "minleey1".to_string(),
            line_limit: 500,
            encodings: vec![UTF_8, EUC_KR],
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from `~/.cforcesrc` when none is
    /// given. A missing rc file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let rc_path = match path {
            Some(p) => p.to_path_buf(),
            None => dirs::home_dir()
                .ok_or(ConfigError::HomeDirNotFound)?
                .join(".cforcesrc"),
        };

        let mut settings = Settings::default();
        if rc_path.exists() {
            let content = fs::read_to_string(&rc_path)
                .map_err(|e| ConfigError::Read(rc_path.clone(), e.to_string()))?;
            for line in content.lines() {
                settings.process_line(line)?;
            }
        }
        Ok(settings)
    }

    fn process_line(&mut self, line: &str) -> Result<(), ConfigError> {
        // Skip empty lines and comments
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            return Ok(());
        }

        let Some((key, value)) = line.split_once('=') else {
            return Ok(());
        };
        let key = key.trim();
        let value = strip_quotes(value.trim());

        match key {
            "mode" => {
                self.default_mode = Mode::parse(value).ok_or_else(|| invalid(key, value))?;
            }
            "compiler" => self.compiler = value.to_string(),
            "editor" => self.editor = value.to_string(),
            "judge_id" => self.judge_id = value.to_string(),
            "line_limit" => {
                self.line_limit = value.parse().map_err(|_| invalid(key, value))?;
            }
            "encodings" => {
                let mut encodings = Vec::new();
                for label in value.split(',') {
                    let label = label.trim();
                    let encoding = Encoding::for_label(label.as_bytes())
                        .ok_or_else(|| invalid(key, label))?;
                    encodings.push(encoding);
                }
                if encodings.is_empty() {
                    return Err(invalid(key, value));
                }
                self.encodings = encodings;
            }
            // Unrecognized keys are left for future versions
            _ => {}
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
