//! Filesystem store for uploaded images.
//!
//! Car pictures arrive as base64 strings (optionally with a `data:image/...`
//! prefix), get decoded and sniffed for their actual type, and are written
//! under a UUID filename inside the upload directory. Only the filename is
//! persisted on the car row.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::AppError;

/// Decodes a base64 image payload, tolerating a `data:image/...;base64,` prefix.
///
/// # Returns
/// - `Ok(bytes)` - Decoded image bytes
/// - `Err(AppError::BadRequest)` - Payload is not valid base64 or decodes to nothing
pub fn decode_base64_image(data: &str) -> Result<Vec<u8>, AppError> {
    let raw = strip_data_url(data).trim();

    let bytes = BASE64
        .decode(raw)
        .map_err(|_| AppError::BadRequest("Failed to decode base64 image.".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::BadRequest(
            "Failed to decode base64 image.".to_string(),
        ));
    }

    Ok(bytes)
}

fn strip_data_url(data: &str) -> &str {
    if data.starts_with("data:image") {
        data.split_once(',').map(|(_, rest)| rest).unwrap_or(data)
    } else {
        data
    }
}

/// Picks a file extension from the image's magic bytes. Unknown types fall
/// back to jpg, matching what clients overwhelmingly upload.
fn sniff_extension(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "png"
    } else if bytes.starts_with(b"GIF8") {
        "gif"
    } else if bytes.starts_with(b"<svg") || bytes.starts_with(b"<?xml") {
        "svg"
    } else {
        "jpg"
    }
}

#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Opens (and creates, if needed) the upload directory.
    ///
    /// # Returns
    /// - `Ok(ImageStore)` - Store rooted at the given directory
    /// - `Err(std::io::Error)` - Directory could not be created
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Decodes and stores a base64 image, returning the generated filename.
    ///
    /// # Returns
    /// - `Ok(file_name)` - Name of the stored file, e.g. `"<uuid>.png"`
    /// - `Err(AppError::BadRequest)` - Payload is not a decodable image
    /// - `Err(AppError::Io)` - Write failed
    pub async fn store(&self, data: &str) -> Result<String, AppError> {
        let bytes = decode_base64_image(data)?;

        let file_name = format!("{}.{}", Uuid::new_v4(), sniff_extension(&bytes));
        tokio::fs::write(self.root.join(&file_name), &bytes).await?;

        Ok(file_name)
    }

    /// Removes a stored image, best effort.
    ///
    /// A missing file is not an error; replacement and deletion flows should
    /// not fail because an old image is already gone.
    pub async fn remove(&self, file_name: &str) {
        // Strip any path components so a tampered value can't escape the root.
        let Some(file_name) = Path::new(file_name).file_name() else {
            return;
        };

        if let Err(err) = tokio::fs::remove_file(self.root.join(file_name)).await {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove stored image {:?}: {}", file_name, err);
            }
        }
    }
}
