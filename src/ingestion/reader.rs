use crate::detector::error::{DetectorError, Result};
use crate::detector::types::Document;
use std::path::Path;

const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Reads a source file into text.
///
/// Plain text files are decoded as UTF-8, replacing invalid byte sequences.
/// Any other format is rejected with `DetectorError::FileAccess`.
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(file_error(path, "file not found"));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(file_error(
            path,
            &format!("unsupported file format: .{}", extension),
        ));
    }

    let bytes = std::fs::read(path).map_err(|err| file_error(path, &err.to_string()))?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a file into a `Document` identified by its file name.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = read_file(path)?;
    let id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Document::new(id, content))
}

/// Reads every file, stopping at the first one that cannot be read.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Document>> {
    paths.iter().map(|p| load_document(p.as_ref())).collect()
}

fn file_error(path: &Path, reason: &str) -> DetectorError {
    tracing::error!("Failed to read {}: {}", path.display(), reason);
    DetectorError::FileAccess {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
