use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LexitriError, Result};
use crate::harvest::HarvestOptions;

const CONFIG_FILE: &str = "lexitri.toml";

/// Default input mapping file name
pub const DEFAULT_INPUT: &str = "words_flac.json";
/// Default categorized dictionary file name
pub const DEFAULT_OUTPUT: &str = "words_dictionary.json";
/// Default directory scanned for recordings
pub const DEFAULT_AUDIO_DIR: &str = "flac";
/// Default distribution directory for sampled recordings
pub const DEFAULT_SOUNDS_DIR: &str = "sounds";
/// Default sampling stride
pub const DEFAULT_STRIDE: usize = 5;

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# lexitri configuration file
# Location: ./lexitri.toml

[build]
# Input mapping produced by the harvest step (assetId -> text)
input = "words_flac.json"
# Categorized dictionary written by the build
output = "words_dictionary.json"

[harvest]
# Directory scanned for .flac recordings
audio_dir = "flac"
# Distribution directory receiving the sampled recordings
sounds_dir = "sounds"
# Every stride-th file of the sorted listing is left out of the sample
stride = 5
"#;

/// Working-directory configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub harvest: HarvestConfig,
}

/// Build-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Input mapping file
    #[serde(default = "default_input")]
    pub input: String,

    /// Output dictionary file
    #[serde(default = "default_output")]
    pub output: String,
}

/// Harvest-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Directory scanned for recordings
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,

    /// Distribution directory
    #[serde(default = "default_sounds_dir")]
    pub sounds_dir: String,

    /// Sampling stride
    #[serde(default = "default_stride")]
    pub stride: usize,
}

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_audio_dir() -> String {
    DEFAULT_AUDIO_DIR.to_string()
}

fn default_sounds_dir() -> String {
    DEFAULT_SOUNDS_DIR.to_string()
}

fn default_stride() -> usize {
    DEFAULT_STRIDE
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            sounds_dir: default_sounds_dir(),
            stride: default_stride(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| LexitriError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| LexitriError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "build.input" => Some(self.build.input.clone()),
            "build.output" => Some(self.build.output.clone()),
            "harvest.audio_dir" => Some(self.harvest.audio_dir.clone()),
            "harvest.sounds_dir" => Some(self.harvest.sounds_dir.clone()),
            "harvest.stride" => Some(self.harvest.stride.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "build.input" => {
                self.build.input = value.to_string();
                Ok(())
            }
            "build.output" => {
                self.build.output = value.to_string();
                Ok(())
            }
            "harvest.audio_dir" => {
                self.harvest.audio_dir = value.to_string();
                Ok(())
            }
            "harvest.sounds_dir" => {
                self.harvest.sounds_dir = value.to_string();
                Ok(())
            }
            "harvest.stride" => {
                self.harvest.stride =
                    value.parse().map_err(|_| LexitriError::ConfigValue {
                        key: key.to_string(),
                        message: format!("expected a non-negative integer, got '{value}'"),
                    })?;
                Ok(())
            }
            _ => Err(LexitriError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        vec![
            ("build.input".to_string(), self.build.input.clone()),
            ("build.output".to_string(), self.build.output.clone()),
            (
                "harvest.audio_dir".to_string(),
                self.harvest.audio_dir.clone(),
            ),
            (
                "harvest.sounds_dir".to_string(),
                self.harvest.sounds_dir.clone(),
            ),
            (
                "harvest.stride".to_string(),
                self.harvest.stride.to_string(),
            ),
        ]
    }

    /// Convert to HarvestOptions with paths anchored at `base_dir`
    pub fn to_harvest_options(&self, base_dir: &Path) -> HarvestOptions {
        HarvestOptions {
            audio_dir: base_dir.join(&self.harvest.audio_dir),
            sounds_dir: base_dir.join(&self.harvest.sounds_dir),
            output: base_dir.join(&self.build.input),
            stride: self.harvest.stride,
        }
    }
}
