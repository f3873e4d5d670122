use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional overrides loaded from a TOML config file.
/// Unknown keys are ignored so future additions do not break old files.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub comics_dir: Option<PathBuf>,
    pub stories_dir: Option<PathBuf>,
    pub artwork_dir: Option<PathBuf>,
    pub thumbnails_dir: Option<PathBuf>,
    pub localhost: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub comics_dir: PathBuf,
    pub stories_dir: PathBuf,
    pub artwork_dir: PathBuf,
    pub thumbnails_dir: PathBuf,
    pub localhost: bool,
}

impl Config {
    /// Merge CLI args, the environment port, and the config file.
    /// Precedence: CLI flag > $PORT > config file > built-in default.
    /// Content directories default to fixed names under the root
    /// (stories live in `literature/`, a naming quirk the content repo kept).
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args, env_port: Option<u16>) -> Self {
        let file = file.unwrap_or_default();
        Config {
            port: args.port.or(env_port).or(file.port).unwrap_or(DEFAULT_PORT),
            comics_dir: file.comics_dir.unwrap_or_else(|| args.root.join("comics")),
            stories_dir: file.stories_dir.unwrap_or_else(|| args.root.join("literature")),
            artwork_dir: file.artwork_dir.unwrap_or_else(|| args.root.join("artwork")),
            thumbnails_dir: file
                .thumbnails_dir
                .unwrap_or_else(|| args.root.join("thumbnails")),
            localhost: args.localhost || file.localhost.unwrap_or(false),
        }
    }
}

/// Parse the `PORT` environment variable. Unset or unparseable values are None.
pub fn port_from_env() -> Option<u16> {
    std::env::var("PORT").ok().and_then(|v| v.parse().ok())
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("chronicles.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("chronicles").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
