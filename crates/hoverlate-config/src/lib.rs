use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::ocr::OcrConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod ocr;
pub mod translator;
pub mod ui;

pub use self::ocr::ImageSource;
pub use self::translator::RequestMethod;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

fn default_hotkey() -> String {
    "F1".to_string()
}

fn default_poll_interval_ms() -> u64 {
    100
}

/// What happens to the clipboard after a successful translation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CopyMode {
    /// Leave the source text on the clipboard
    #[default]
    LeaveSource,
    /// Replace the clipboard with the translation
    OverwriteWithResult,
}

impl From<String> for CopyMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "dst" => CopyMode::OverwriteWithResult,
            _ => CopyMode::LeaveSource,
        }
    }
}

impl From<CopyMode> for String {
    fn from(mode: CopyMode) -> Self {
        match mode {
            CopyMode::LeaveSource => "src".to_string(),
            CopyMode::OverwriteWithResult => "dst".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub translator: TranslatorConfig,
    pub copy_mode: CopyMode,
    pub ocr: OcrConfig,
    pub ui: UiConfig,

    /// Global hotkey, e.g. "F1" or "ctrl+shift+KeyT"
    #[serde(default = "default_hotkey")]
    pub hotkey: String,
    /// Trigger loop poll interval
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            copy_mode: CopyMode::default(),
            ocr: OcrConfig::default(),
            ui: UiConfig::default(),
            hotkey: default_hotkey(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    /// Config file location, `HOVERLATE_CONFIG` or `config.json` in the working directory
    pub fn path_from_env() -> PathBuf {
        env::var("HOVERLATE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file, falling back to defaults when it is missing or malformed
    pub fn load_or_default(path: &Path) -> Self {
        let mut config = match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{e}; using default config (auto -> zh)");
                Self::default()
            }
        };

        config.apply_env_overrides();
        config
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(poll_interval_ms) = env::var("POLL_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.poll_interval_ms = poll_interval_ms;
        }
    }
}
