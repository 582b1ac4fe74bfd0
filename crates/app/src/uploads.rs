//! Local image files
//!
//! Turns a picked file into the data URL the forms hold until submit.

use std::path::{Path, PathBuf};

use cardapio::images::{mime_from_extension, to_data_url};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a picked image.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file could not be read.
    #[error("Não foi possível ler a imagem {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name an image format.
    #[error("O arquivo {0} não é uma imagem.")]
    NotAnImage(PathBuf),
}

/// Read an image file into a data URL.
///
/// The MIME type comes from the file extension.
///
/// # Errors
///
/// Returns [`UploadError::NotAnImage`] for non-image extensions and
/// [`UploadError::Read`] when the file cannot be read.
pub async fn load_image(path: &Path) -> Result<String, UploadError> {
    let mime = path
        .extension()
        .and_then(|extension| extension.to_str())
        .and_then(mime_from_extension)
        .ok_or_else(|| UploadError::NotAnImage(path.to_path_buf()))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| UploadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), mime, size = bytes.len(), "loaded image");

    Ok(to_data_url(mime, &bytes))
}
