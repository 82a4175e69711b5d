//! Directory scanning for background candidates.

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;
use walkdir::WalkDir;

/// Filename substrings accepted as images.
pub const ALLOWED_FILE_TYPES: [&str; 3] = ["jpeg", "jpg", "png"];

/// A traversal failure under one configured root.
#[derive(Error, Debug)]
#[error("scanning {}: {}", .root.display(), .source)]
pub struct ScanError {
    pub root: PathBuf,
    pub source: walkdir::Error,
}

/// Everything one scan cycle produced over the directory set.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub files: Vec<PathBuf>,
    pub errors: Vec<ScanError>,
}

/// Catalog classification observed by the rotation loop.
///
/// Rotation needs at least two candidates before picking "a different"
/// image means anything, so one candidate is kept distinct from none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Empty,
    Single,
    Ready,
}

impl ScanReport {
    pub fn outcome(&self) -> Outcome {
        match self.files.len() {
            0 => Outcome::Empty,
            1 => Outcome::Single,
            _ => Outcome::Ready,
        }
    }
}

/// Walk each root and collect image files.
///
/// Non-recursive mode visits only a root's immediate children. A failure
/// under one root is collected and never aborts the remaining roots, and
/// a path is cataloged at most once no matter how many roots reach it.
pub fn scan(dirs: &[PathBuf], recursive: bool) -> ScanReport {
    let mut report = ScanReport::default();
    let mut seen = HashSet::new();

    for root in dirs {
        let mut walker = WalkDir::new(root);
        if !recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_dir() {
                        continue;
                    }
                    if !is_image_name(&entry.file_name().to_string_lossy()) {
                        continue;
                    }
                    let path = entry.into_path();
                    if seen.insert(path.clone()) {
                        report.files.push(path);
                    }
                }
                Err(source) => report.errors.push(ScanError {
                    root: root.clone(),
                    source,
                }),
            }
        }
    }

    report
}

/// Case-insensitive containment test against the allowed image types.
fn is_image_name(name: &str) -> bool {
    let lowered = name.to_lowercase();
    ALLOWED_FILE_TYPES.iter().any(|t| lowered.contains(t))
}
