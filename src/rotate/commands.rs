use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use crate::common::paths;
use crate::rotate::Rotator;
use crate::rotate::cli::{NextArgs, RotateArgs, SetArgs};
use crate::rotate::config::RotateConfig;
use crate::wallpaper;

pub async fn handle_run(args: RotateArgs, debug: bool) -> Result<()> {
    let mut config = RotateConfig::load()?;
    config.apply_scan_args(&args.scan);
    if let Some(interval) = args.interval {
        config.interval = interval;
    }

    let mut rotator = prepare(config.clone(), debug)?;
    println!(
        "{} {} {}",
        "Rotating backgrounds every".cyan(),
        config.interval,
        "seconds".cyan()
    );

    tokio::select! {
        result = rotator.run_loop() => result,
        _ = tokio::signal::ctrl_c() => {
            println!("{}", "Stopping background rotation".cyan());
            Ok(())
        }
    }
}

pub async fn handle_next(args: NextArgs, debug: bool) -> Result<()> {
    let mut config = RotateConfig::load()?;
    config.apply_scan_args(&args.scan);

    let mut rotator = prepare(config, debug)?;
    rotator.run_cycle().await
}

pub fn handle_set(args: SetArgs, debug: bool) -> Result<()> {
    let path = Path::new(&args.path)
        .canonicalize()
        .with_context(|| format!("resolving wallpaper path {}", args.path))?;
    if !path.is_file() {
        anyhow::bail!("{} is not a file", path.display());
    }

    wallpaper::apply_background(&path, debug)?;
    if args.lockscreen {
        wallpaper::apply_lockscreen(&path, debug)?;
    }

    println!("{} {}", "Wallpaper set to".green(), path.display());
    Ok(())
}

/// Resolve the directory set from the config and build a rotator.
///
/// Startup fails when no configured directory exists at all; once running,
/// scan failures are per-cycle log lines.
fn prepare(config: RotateConfig, debug: bool) -> Result<Rotator> {
    let home = paths::home_dir()?;
    let dirs = match &config.dirs {
        Some(spec) => paths::resolve_dir_spec(spec, &home),
        None => vec![paths::default_picture_dir(&home)],
    };

    if dirs.is_empty() {
        anyhow::bail!("No backgrounds directory configured");
    }
    if !dirs.iter().any(|dir| dir.is_dir()) {
        anyhow::bail!(
            "None of the configured directories exist: {}",
            dirs.iter()
                .map(|dir| dir.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    if which::which("dconf").is_err() {
        eprintln!(
            "{}",
            "dconf not found in PATH, background changes will fail".yellow()
        );
    }

    if debug {
        for dir in &dirs {
            println!("Scanning {}", dir.display());
        }
    }

    Ok(Rotator::new(config, dirs, debug))
}
