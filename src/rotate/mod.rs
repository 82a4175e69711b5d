//! The rotation loop: scan, pick, apply, sleep.

pub mod cli;
pub mod commands;
pub mod config;
pub mod scanner;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use rand::seq::SliceRandom;

use crate::rotate::config::RotateConfig;
use crate::rotate::scanner::Outcome;
use crate::wallpaper;

/// Owns the per-process rotation state: the resolved directory set and the
/// most recently applied image.
pub struct Rotator {
    config: RotateConfig,
    dirs: Vec<PathBuf>,
    current: Option<PathBuf>,
    debug: bool,
}

impl Rotator {
    pub fn new(config: RotateConfig, dirs: Vec<PathBuf>, debug: bool) -> Self {
        Self {
            config,
            dirs,
            current: None,
            debug,
        }
    }

    /// Run rotation cycles forever, sleeping the configured interval
    /// between them.
    pub async fn run_loop(&mut self) -> Result<()> {
        let interval = Duration::from_secs(self.config.interval);
        loop {
            self.run_cycle().await?;
            tokio::time::sleep(interval).await;
        }
    }

    /// One scan → select → apply cycle.
    ///
    /// The scan runs to completion on its own task before selection looks
    /// at the catalog. Scan and apply failures are reported and tolerated;
    /// the only error escalated from here is a panicked task.
    pub async fn run_cycle(&mut self) -> Result<()> {
        let dirs = self.dirs.clone();
        let recursive = self.config.recursive;
        let report = tokio::task::spawn_blocking(move || scanner::scan(&dirs, recursive))
            .await
            .context("scan task panicked")?;

        for error in &report.errors {
            eprintln!("{} {}", "Dir scan error:".yellow(), error);
        }

        if self.debug {
            println!("Found {} candidate images", report.files.len());
        }

        match report.outcome() {
            Outcome::Empty => {
                println!("{}", "No images found, will rescan next cycle".yellow());
            }
            Outcome::Single => {
                println!(
                    "{}",
                    "Only one image found, rotation needs at least two".yellow()
                );
            }
            Outcome::Ready => {
                if let Some(pick) = select_candidate(&report.files, self.config.exclude_last) {
                    self.apply(pick.clone()).await;
                }
            }
        }

        Ok(())
    }

    /// Dispatch the background and lockscreen changes for a pick, waiting
    /// for both before the cycle advances. A pick that is already current
    /// needs no re-apply.
    async fn apply(&mut self, pick: PathBuf) {
        if !needs_apply(self.current.as_deref(), &pick) {
            if self.debug {
                println!("Picked {} again, leaving it in place", pick.display());
            }
            return;
        }

        println!("{} {}", "Changing background to".cyan(), pick.display());

        let lockscreen = self.config.lockscreen;
        let debug = self.debug;
        let bg_path = pick.clone();
        let ls_path = pick.clone();

        let background =
            tokio::task::spawn_blocking(move || wallpaper::apply_background(&bg_path, debug));
        let screensaver = tokio::task::spawn_blocking(move || {
            if lockscreen {
                wallpaper::apply_lockscreen(&ls_path, debug)
            } else {
                Ok(())
            }
        });

        let (background, screensaver) = tokio::join!(background, screensaver);
        report_apply("background", background);
        report_apply("lockscreen", screensaver);

        self.current = Some(pick);
    }
}

/// A pick equal to the current wallpaper is a no-op.
fn needs_apply(current: Option<&Path>, pick: &Path) -> bool {
    current != Some(pick)
}

/// Choose a random candidate from the catalog.
///
/// With `exclude_last` the final entry is left out of the draw, narrowing
/// the range to `[0, len - 1)`.
fn select_candidate(files: &[PathBuf], exclude_last: bool) -> Option<&PathBuf> {
    let pool = if exclude_last && !files.is_empty() {
        &files[..files.len() - 1]
    } else {
        files
    };
    pool.choose(&mut rand::thread_rng())
}

fn report_apply(target: &str, result: Result<Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(error)) => eprintln!(
            "{} {} change failed: {:#}",
            "Warning:".yellow(),
            target,
            error
        ),
        Err(error) => eprintln!(
            "{} {} change task panicked: {}",
            "Warning:".yellow(),
            target,
            error
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_needs_apply() {
        let pick = Path::new("/p/a.jpg");
        assert!(needs_apply(None, pick));
        assert!(needs_apply(Some(Path::new("/p/b.jpg")), pick));
        assert!(!needs_apply(Some(pick), pick));
    }

    #[test]
    fn test_select_covers_whole_catalog() {
        let files: Vec<PathBuf> = (0..3)
            .map(|i| PathBuf::from(format!("/p/{}.jpg", i)))
            .collect();
        for _ in 0..100 {
            let pick = select_candidate(&files, false).unwrap();
            assert!(files.contains(pick));
        }
    }

    #[test]
    fn test_exclude_last_never_selects_final_entry() {
        let files: Vec<PathBuf> = (0..4)
            .map(|i| PathBuf::from(format!("/p/{}.jpg", i)))
            .collect();
        let last = files.last().unwrap().clone();
        for _ in 0..200 {
            let pick = select_candidate(&files, true).unwrap();
            assert_ne!(pick, &last);
        }
    }

    #[test]
    fn test_select_from_empty_catalog_is_none() {
        assert_eq!(select_candidate(&[], false), None);
        assert_eq!(select_candidate(&[], true), None);
    }

    #[tokio::test]
    async fn test_empty_catalog_applies_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut rotator = Rotator::new(
            RotateConfig::default(),
            vec![dir.path().to_path_buf()],
            false,
        );

        rotator.run_cycle().await.unwrap();

        assert!(rotator.current.is_none());
    }

    #[tokio::test]
    async fn test_single_candidate_applies_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("only.jpg"), b"").unwrap();
        let mut rotator = Rotator::new(
            RotateConfig::default(),
            vec![dir.path().to_path_buf()],
            false,
        );

        rotator.run_cycle().await.unwrap();

        assert!(rotator.current.is_none());
    }
}
