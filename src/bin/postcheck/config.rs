use std::env;
use std::path::PathBuf;

use anyhow::Result;

use postcheck::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()));
    let candidates = [
        exe_dir,
        env::current_dir().ok(),
        dirs::config_dir().map(|dir| dir.join("postcheck")),
    ];

    candidates.into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// Reads the given configuration, or the first one found next to the
/// executable, in the current dir or in the user config dir. Defaults are
/// used when there is none.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<(Config, Option<PathBuf>)> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => return Ok((Config::default(), None)),
        Some(x) => x,
    };

    let mut config = read_config(&config_path)?;

    if let Some(mut log) = config.log {
        if log.location.is_none() && !log.log_to_console {
            log.location = dirs::cache_dir().map(|dir| dir.join("postcheck").join("log").join("check.log"));
        }
        config.log = Some(log);
    }

    Ok((config, Some(config_path)))
}
