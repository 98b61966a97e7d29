//! File-backed history of summaries.
//!
//! Each `sum` run drops one YAML file named after its RFC 3339 timestamp into
//! a `finances` directory next to the finance document. The directory is
//! never created automatically: keeping history is opt-in.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::SecondsFormat;
use log::{debug, warn};

use crate::errors::{Error, Result};
use crate::portfolio::Summary;

pub const HISTORY_DIR_NAME: &str = "finances";

#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store next to the given finance document.
    pub fn for_config(config_path: &Path) -> Self {
        let parent = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::new(parent.join(HISTORY_DIR_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `summary` and return the path written.
    pub fn write(&self, summary: &Summary) -> Result<PathBuf> {
        if !self.dir.is_dir() {
            return Err(Error::History(format!(
                "Output dir does not exist: {}",
                self.dir.display()
            )));
        }

        let name = summary.date.to_rfc3339_opts(SecondsFormat::Secs, true);
        let path = self.dir.join(format!("{}.yaml", name));
        let contents = serde_yaml::to_string(summary)
            .map_err(|e| Error::History(format!("Failed to encode summary: {}", e)))?;

        fs::write(&path, contents)
            .map_err(|e| Error::History(format!("Could not create {}: {}", path.display(), e)))?;
        debug!("Wrote summary to {}", path.display());

        Ok(path)
    }

    /// Every readable summary, oldest first.
    ///
    /// A missing directory is an empty history. Files that cannot be read or
    /// parsed are skipped.
    pub fn load(&self) -> Vec<Summary> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("No history at {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
            .collect();
        paths.sort();

        paths
            .into_iter()
            .filter_map(|path| match read_summary(&path) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!("Skipping history file {}: {}", path.display(), e);
                    None
                }
            })
            .collect()
    }
}

fn read_summary(path: &Path) -> Result<Summary> {
    let contents = fs::read_to_string(path).map_err(|e| Error::History(e.to_string()))?;
    serde_yaml::from_str(&contents).map_err(|e| Error::History(e.to_string()))
}
