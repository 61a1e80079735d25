//! Destination resolution and file output for the rendered resume.
//!
//! The environment is read exactly once, here, at the boundary; the composer
//! itself never looks at it.  The destination is the invoking user's Desktop
//! directory, resolved from the platform profile variable.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed name of the generated file.
pub const DEFAULT_FILENAME: &str = "GOKULAKANNAN_RESUME.pdf";

/// Environment variable naming the current user's profile directory.
#[cfg(windows)]
pub const PROFILE_ENV_VAR: &str = "USERPROFILE";
/// Environment variable naming the current user's profile directory.
#[cfg(not(windows))]
pub const PROFILE_ENV_VAR: &str = "HOME";

const DESKTOP_DIR_NAME: &str = "Desktop";

/// Errors produced while resolving the destination or writing the file.
#[derive(Debug)]
pub enum OutputError {
    /// The profile environment variable is unset or empty.
    ProfileDirUnset {
        /// Name of the variable that was consulted.
        variable: &'static str,
    },
    /// The resolved Desktop directory does not exist.
    DesktopMissing {
        /// The path that was expected to exist.
        path: PathBuf,
    },
    /// Writing the file failed.
    Write {
        /// Destination path of the failed write.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProfileDirUnset { variable } => write!(
                f,
                "Environment variable {variable} is not set; cannot locate the profile directory"
            ),
            Self::DesktopMissing { path } => {
                write!(f, "Desktop directory not found at {}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write { source, .. } => Some(source),
            Self::ProfileDirUnset { .. } | Self::DesktopMissing { .. } => None,
        }
    }
}

/// Resolves the invoking user's Desktop directory from the environment.
pub fn desktop_dir() -> Result<PathBuf, OutputError> {
    let profile = env::var_os(PROFILE_ENV_VAR)
        .filter(|value| !value.is_empty())
        .ok_or(OutputError::ProfileDirUnset {
            variable: PROFILE_ENV_VAR,
        })?;

    let desktop = PathBuf::from(profile).join(DESKTOP_DIR_NAME);
    if desktop.is_dir() {
        Ok(desktop)
    } else {
        Err(OutputError::DesktopMissing { path: desktop })
    }
}

/// Writes the rendered bytes into `dir`, overwriting any existing file, and
/// returns the resolved path.
pub fn save_document(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, OutputError> {
    let path = dir.join(filename);
    fs::write(&path, bytes).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
