use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::common::paths;
use crate::rotate::cli::ScanArgs;

fn default_interval() -> u64 {
    300
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RotateConfig {
    /// Directory or comma-separated list of directories to scan.
    pub dirs: Option<String>,
    /// Seconds between rotation cycles.
    #[serde(default = "default_interval")]
    pub interval: u64,
    #[serde(default)]
    pub lockscreen: bool,
    #[serde(default)]
    pub recursive: bool,
    /// Leave the last scanned image out of the random draw.
    #[serde(default)]
    pub exclude_last: bool,
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self {
            dirs: None,
            interval: default_interval(),
            lockscreen: false,
            recursive: false,
            exclude_last: false,
        }
    }
}

impl RotateConfig {
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(paths::config_dir()?.join("wallcycle.toml"))
    }

    pub fn load() -> Result<Self> {
        let cfg_path = Self::config_file_path()?;
        if !cfg_path.exists() {
            return Ok(Self::default());
        }

        let s = fs::read_to_string(&cfg_path)
            .with_context(|| format!("reading config {}", cfg_path.display()))?;
        toml::from_str(&s).context("parsing config toml")
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply_scan_args(&mut self, args: &ScanArgs) {
        if let Some(dirs) = &args.dirs {
            self.dirs = Some(dirs.clone());
        }
        if args.lockscreen {
            self.lockscreen = true;
        }
        if args.recursive {
            self.recursive = true;
        }
        if args.exclude_last {
            self.exclude_last = true;
        }
    }
}
