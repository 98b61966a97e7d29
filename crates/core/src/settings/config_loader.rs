//! Locating and reading the finance document.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::settings_model::FinanceConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "finances.yaml";

/// Pick the finance document to use.
///
/// An explicit path must exist. Without one, `<home>/finances.yaml` wins if
/// present, otherwise `finances.yaml` in the working directory is assumed.
pub fn find_config_file(explicit: Option<&Path>, home: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::ConfigIO(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        return Ok(path.to_path_buf());
    }

    if let Some(home) = home {
        let candidate = home.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    Ok(PathBuf::from(CONFIG_FILE_NAME))
}

pub fn load_config(path: &Path) -> Result<FinanceConfig> {
    debug!("Loading finance document from {}", path.display());

    let contents = fs::read_to_string(path)
        .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;

    serde_yaml::from_str(&contents)
        .map_err(|e| Error::Config(format!("in file {}: {}", path.display(), e)))
}
