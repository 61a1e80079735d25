//! Font discovery for the resume_pdf crate.
//!
//! `genpdf` embeds TrueType fonts into the output, so the crate ships with
//! the Arimo family (metrically compatible with Arial) under `assets/fonts`.
//! The search order is the `RESUME_PDF_FONTS_DIR` environment variable, the
//! `assets/fonts` directory next to the running executable, and finally the
//! crate manifest's `assets/fonts` directory.  On Windows the system Arial
//! faces act as a fallback when the bundled files are absent.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::warn;

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Arimo";

/// Environment variable overriding the bundled font search path.
pub const FONTS_DIR_ENV_VAR: &str = "RESUME_PDF_FONTS_DIR";

/// Environment variable overriding the Windows system font directory.
pub const WINDOWS_FONTS_DIR_ENV_VAR: &str = "RESUME_PDF_WINDOWS_FONTS_DIR";

const BUNDLED_FONT_FILES: &[&str] = &[
    "Arimo-Regular.ttf",
    "Arimo-Bold.ttf",
    "Arimo-Italic.ttf",
    "Arimo-BoldItalic.ttf",
];

const FALLBACK_FAMILY_NAME: &str = "Arial";

// Windows face files in regular/bold/italic/bold-italic order, matching
// BUNDLED_FONT_FILES.
const WINDOWS_FONT_FILES: &[&str] = &["arial.ttf", "arialbd.ttf", "ariali.ttf", "arialbi.ttf"];

/// Returns the `assets/fonts` directory inside the crate source tree.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        if value.is_empty() {
            None
        } else {
            Some(PathBuf::from(value))
        }
    })
}

fn search_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path(FONTS_DIR_ENV_VAR) {
        candidates.push(path);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            candidates.push(bin_dir.join("assets/fonts"));
        }
    }

    candidates.push(bundled_fonts_source_dir());
    candidates.dedup();
    candidates
}

fn describe_candidate(path: &Path) -> Option<String> {
    if !path.is_dir() {
        return Some(format!("{} (directory missing)", path.display()));
    }

    let missing: Vec<_> = BUNDLED_FONT_FILES
        .iter()
        .filter(|name| !path.join(name).is_file())
        .copied()
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!(
            "{} (missing files [{}])",
            path.display(),
            missing.join(", ")
        ))
    }
}

fn resolve_fonts_dir() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in search_candidates() {
        match describe_candidate(&candidate) {
            None => return Ok(candidate),
            Some(reason) => attempts.push(reason),
        }
    }

    Err(Error::new(
        format!(
            "Unable to locate the bundled font directory. Checked: {}. \
             See assets/fonts/README.md or set {}.",
            attempts.join(", "),
            FONTS_DIR_ENV_VAR
        ),
        io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
    ))
}

fn load_bundled_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_fonts_dir()?;

    fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                DEFAULT_FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

fn windows_font_directory() -> Option<PathBuf> {
    if let Some(path) = env_path(WINDOWS_FONTS_DIR_ENV_VAR) {
        return Some(path);
    }

    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                let candidate = root.join("Fonts");
                if candidate.is_dir() {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

fn load_fallback_face(directory: &Path, file: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load fallback font at {}: {}",
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn windows_fallback_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = windows_font_directory().ok_or_else(|| {
        Error::new(
            "Windows font directory not found for fallback",
            io::Error::new(io::ErrorKind::NotFound, "windows fonts directory not found"),
        )
    })?;

    Ok(FontFamily {
        regular: load_fallback_face(&directory, WINDOWS_FONT_FILES[0])?,
        bold: load_fallback_face(&directory, WINDOWS_FONT_FILES[1])?,
        italic: load_fallback_face(&directory, WINDOWS_FONT_FILES[2])?,
        bold_italic: load_fallback_face(&directory, WINDOWS_FONT_FILES[3])?,
    })
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

/// Returns the bundled Arimo family, falling back to the system Arial faces
/// when the bundled fonts are missing.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    match load_bundled_font_family() {
        Ok(family) => Ok(family),
        Err(err) if fonts_missing(&err) => match windows_fallback_font_family() {
            Ok(fallback) => {
                warn!(
                    "Bundled fonts unavailable ({}); falling back to the system '{}' family.",
                    err, FALLBACK_FAMILY_NAME
                );
                Ok(fallback)
            }
            Err(fallback_err) => {
                warn!(
                    "Bundled fonts unavailable ({}); fallback failed: {}",
                    err, fallback_err
                );
                Err(Error::new(
                    format!(
                        "Bundled fonts unavailable and the system fallback failed: {}",
                        fallback_err
                    ),
                    io::Error::new(io::ErrorKind::NotFound, "no usable font family"),
                ))
            }
        },
        Err(err) => Err(err),
    }
}

/// Indicates whether all bundled fonts required for rendering are present.
pub fn default_fonts_available() -> bool {
    resolve_fonts_dir().is_ok()
}
