use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Centralized path management for wallcycle
/// This module provides a single source of truth for all application paths

/// Resolve the user's home directory.
///
/// The `HOME` variable observed in the process environment wins; the
/// platform lookup is only a fallback for environments that don't set it.
pub fn home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir().context("Unable to determine home directory")
}

/// Get the wallcycle config directory
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Unable to determine user config directory")?
        .join("wallcycle");

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("creating config directory at {}", config_dir.display()))?;

    Ok(config_dir)
}

/// Directory scanned when none is configured
pub fn default_picture_dir(home: &Path) -> PathBuf {
    dirs::picture_dir().unwrap_or_else(|| home.join("Pictures"))
}

/// Expand a leading tilde in a single directory segment.
///
/// Segments without a tilde pass through unchanged. A home directory that
/// cannot be represented leaves the segment as written; the scanner will
/// report it as a missing root later.
pub fn expand_dir(raw: &str, home: &Path) -> PathBuf {
    let expanded = shellexpand::tilde_with_context(raw, || home.to_str().map(|s| s.to_string()));
    PathBuf::from(expanded.as_ref())
}

/// Expand a directory spec into the ordered directory set.
///
/// The spec is a single directory or a comma-separated list; each segment
/// is trimmed and tilde-expanded independently, order preserved.
pub fn resolve_dir_spec(spec: &str, home: &Path) -> Vec<PathBuf> {
    spec.split(',')
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .map(|segment| expand_dir(segment, home))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_leading_tilde() {
        let home = Path::new("/home/u");
        assert_eq!(
            expand_dir("~/Pictures", home),
            PathBuf::from("/home/u/Pictures")
        );
    }

    #[test]
    fn test_expand_bare_tilde() {
        let home = Path::new("/home/u");
        assert_eq!(expand_dir("~", home), PathBuf::from("/home/u"));
    }

    #[test]
    fn test_absolute_path_unchanged() {
        let home = Path::new("/home/u");
        assert_eq!(
            expand_dir("/abs/Pictures", home),
            PathBuf::from("/abs/Pictures")
        );
    }

    #[test]
    fn test_comma_spec_expands_each_segment() {
        let home = Path::new("/home/u");
        let dirs = resolve_dir_spec("/abs/Pictures,~/Other", home);
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/abs/Pictures"),
                PathBuf::from("/home/u/Other")
            ]
        );
    }

    #[test]
    fn test_single_segment_spec() {
        let home = Path::new("/home/u");
        let dirs = resolve_dir_spec("~/Pictures", home);
        assert_eq!(dirs, vec![PathBuf::from("/home/u/Pictures")]);
    }

    #[test]
    fn test_empty_segments_dropped() {
        let home = Path::new("/home/u");
        let dirs = resolve_dir_spec("/a,,/b", home);
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }
}
