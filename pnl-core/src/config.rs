use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory holding the entries file.
    pub data_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Prefix used when formatting money, e.g. `$` or `€`.
    pub currency_symbol: String,
    /// `chrono` format of the month heading. Default is `%B %Y` (e.g. `March 2024`).
    pub month_label_format: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    editor: Option<String>,
    currency_symbol: Option<String>,
    month_label_format: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A malformed config file is reported and ignored rather than stopping the program.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            warn!(error = %format!("{error:#}"), "ignoring config file");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            data_dir: file_config.data_dir.unwrap_or_else(Self::default_data_dir),
            editor: file_config.editor,
            currency_symbol: file_config
                .currency_symbol
                .unwrap_or_else(|| "$".to_string()),
            month_label_format: file_config
                .month_label_format
                .filter(|format| Self::is_valid_label_format(format))
                .unwrap_or_else(|| "%B %Y".to_string()),
        }
    }

    fn is_valid_label_format(format: &str) -> bool {
        let valid = StrftimeItems::new(format).all(|item| !matches!(item, Item::Error));
        if !valid {
            warn!(format, "ignoring invalid month_label_format");
        }
        valid
    }

    /// Default data root: `{data_dir}/pnl`
    /// - macOS:   `~/Library/Application Support/pnl`
    /// - Linux:   `$XDG_DATA_HOME/pnl` or `~/.local/share/pnl`
    /// - Windows: `%APPDATA%\pnl`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("pnl")
        } else {
            PathBuf::from("./pnl")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("pnl").join("config.toml"));
            v.push(b.config_dir().join("pnl").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

/// Test helper to create a default `Config` for testing purposes.
///
/// If you add a field to `Config`, you only need to update it here.
#[cfg(test)]
pub(crate) fn mk_config(data_dir: PathBuf) -> Config {
    Config {
        data_dir,
        editor: None,
        currency_symbol: "$".to_string(),
        month_label_format: "%B %Y".to_string(),
    }
}
