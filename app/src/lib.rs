//! Command shell for the in-memory menu catalog.
//!
//! The binary loads [`MenuSettings`], builds the starting catalog (the
//! built-in dishes, or a seed menu file when configured), and hands it to a
//! [`shell::Session`] that reads commands line by line.

pub mod config;
pub mod error;
pub mod shell;

use std::path::Path;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use menu_catalog::{Catalog, MenuSeed, default_menu};
use tracing::info;

pub use config::MenuSettings;
pub use error::{AppError, CommandError};

/// Build the starting catalog described by `settings`.
///
/// # Errors
///
/// Returns [`AppError`] if the configured seed menu cannot be opened or is
/// invalid.
pub fn load_catalog(settings: &MenuSettings) -> Result<Catalog, AppError> {
    let Some(path) = settings.seed_path() else {
        let catalog = Catalog::from_items(default_menu());
        info!(item_count = catalog.len(), source = "built-in", "catalog ready");
        return Ok(catalog);
    };

    let (dir, file_name) = open_parent(path)?;
    let catalog = MenuSeed::from_file(&dir, file_name)?.into_catalog();
    info!(
        item_count = catalog.len(),
        source = %path.display(),
        "catalog ready"
    );
    Ok(catalog)
}

/// Open the directory holding `path` and return it with the file name.
///
/// # Errors
///
/// Returns [`AppError::InvalidPath`] if `path` is not UTF-8 or has no file
/// name, and [`AppError::Open`] if the directory cannot be opened.
pub fn open_parent(path: &Path) -> Result<(Dir, &Utf8Path), AppError> {
    let invalid = || AppError::InvalidPath {
        path: path.to_path_buf(),
    };
    let utf8 = Utf8Path::from_path(path).ok_or_else(invalid)?;
    let file_name = utf8.file_name().map(Utf8Path::new).ok_or_else(invalid)?;
    let parent = utf8
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|source| {
        AppError::Open {
            path: parent.as_std_path().to_path_buf(),
            source,
        }
    })?;
    Ok((dir, file_name))
}
