use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONTENT_DIR: &str = "src/content/blog";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error opening configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error parsing configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
pub struct Paths {
    pub content_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CollectionSettings {
    /// Base name of the post file inside a post directory, e.g. `index` for
    /// `my-post/index.md`
    pub index_base_name: String,
    pub extensions: Vec<String>,
    pub include_drafts: bool,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        CollectionSettings {
            index_base_name: "index".to_string(),
            extensions: vec!["md".to_string(), "mdx".to_string()],
            include_drafts: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: Paths,
    #[serde(default)]
    pub collection: CollectionSettings,
    pub log: Option<Log>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: Paths { content_dir: PathBuf::from(DEFAULT_CONTENT_DIR) },
            collection: CollectionSettings::default(),
            log: None,
        }
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    let Some(str_path) = path.to_str() else {
        return path;
    };
    if !str_path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match exe_dir.as_ref().and_then(|dir| dir.to_str()) {
        Some(exe_dir) => PathBuf::from(str_path.replace("${exe_dir}", exe_dir)),
        None => path,
    }
}

pub fn parse_config(cfg_content: &str) -> Result<Config, ConfigError> {
    let mut cfg: Config = toml::from_str::<Config>(cfg_content)?;

    cfg.paths = Paths {
        content_dir: parse_path(cfg.paths.content_dir),
    };
    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> Result<Config, ConfigError> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(source) => return Err(ConfigError::Io { path: cfg_path.to_path_buf(), source }),
    };

    parse_config(&cfg_content)
}
