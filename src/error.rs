use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid semver (expected x.y.z): {0}")]
    InvalidVersionFormat(String),

    #[error("unknown bump kind: {0} (expected: major|minor|patch)")]
    UnknownBumpKind(String),

    #[error("could not find a [package] version field")]
    VersionFieldNotFound,

    #[error("manifest not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("rewrite produced version {found} instead of {expected}")]
    RewriteMismatch { expected: String, found: String },
}
