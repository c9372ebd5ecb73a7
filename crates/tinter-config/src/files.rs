//! Reading and writing theme documents on disk.

use std::path::{Path, PathBuf};

use tinter_common::ThemeError;
use tracing::info;

use crate::document::ThemeDocument;

/// File stem used when a document name has nothing usable in it.
pub const FALLBACK_FILE_STEM: &str = "comfyui-theme";

/// `<sanitized name>.json` for exporting `document`.
///
/// The name is lowercased, every run of non-alphanumeric characters becomes
/// a single `-`, and leading or trailing dashes are dropped.
pub fn export_file_name(document: &ThemeDocument) -> String {
    let mut stem = String::with_capacity(document.name.len());
    for c in document.name.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('-') {
            stem.push('-');
        }
    }
    let stem = stem.trim_matches('-');
    if stem.is_empty() {
        format!("{FALLBACK_FILE_STEM}.json")
    } else {
        format!("{stem}.json")
    }
}

/// Write `document` as pretty JSON to `path`.
pub fn write_document(document: &ThemeDocument, path: &Path) -> Result<(), ThemeError> {
    let json = document.to_json()?;
    std::fs::write(path, json).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), name = %document.name, "exported theme");
    Ok(())
}

/// Write `document` into `dir` under its export file name.
pub fn export_to_dir(document: &ThemeDocument, dir: &Path) -> Result<PathBuf, ThemeError> {
    let path = dir.join(export_file_name(document));
    write_document(document, &path)?;
    Ok(path)
}

/// Load a document from a `.json`, `.yaml` or `.yml` file.
pub fn load_document(path: &Path) -> Result<ThemeDocument, ThemeError> {
    if !path.exists() {
        return Err(ThemeError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let document = match extension.as_deref() {
        Some("yaml") | Some("yml") => ThemeDocument::from_yaml(&content)?,
        Some("json") => ThemeDocument::from_json(&content)?,
        _ => {
            return Err(ThemeError::ParseError(format!(
                "unsupported theme file type: {}",
                path.display()
            )))
        }
    };

    info!(path = %path.display(), id = %document.id, "loaded theme file");
    Ok(document)
}
