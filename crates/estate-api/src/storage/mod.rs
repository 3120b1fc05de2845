//! Listing image storage
//!
//! Uploaded images are written under the configured upload directory with a
//! random name; the original filename only contributes its extension. Stored
//! files are served back under `/uploads`.

use std::path::{Path, PathBuf};

use estate_common::StorageConfig;
use uuid::Uuid;

use crate::response::{ApiError, ApiResult};

/// Accepted image file extensions
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Most image files accepted in one multipart request
pub const MAX_IMAGES_PER_REQUEST: usize = 10;

/// Slack for the `data` field and multipart framing when sizing request bodies
const REQUEST_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Filesystem store for listing images
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl ImageStore {
    /// Create a store from the storage configuration
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.upload_dir),
            max_bytes: config.max_file_size_mb as usize * 1024 * 1024,
        }
    }

    /// Directory the images live in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Request body size needed to carry a full set of maximum-size images
    ///
    /// The framework's default body cap is smaller than a single configured
    /// file; the routes that take uploads raise it to this value.
    pub fn request_body_limit(&self) -> usize {
        self.max_bytes * MAX_IMAGES_PER_REQUEST + REQUEST_OVERHEAD_BYTES
    }

    /// Create the upload directory if it does not exist
    pub async fn ensure_dir(&self) -> ApiResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to create upload dir: {e}")))
    }

    /// Store one uploaded file; returns the public URL path
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> ApiResult<String> {
        if bytes.len() > self.max_bytes {
            return Err(ApiError::invalid_body(format!(
                "File too large: limit is {} bytes",
                self.max_bytes
            )));
        }

        let extension = extension_of(original_name)?;
        let file_name = format!("{}.{extension}", Uuid::new_v4());

        tokio::fs::write(self.dir.join(&file_name), bytes)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to store image: {e}")))?;

        Ok(format!("/uploads/{file_name}"))
    }

    /// Remove a stored file by its public URL path
    ///
    /// Best-effort: a missing file is fine, anything else is logged and
    /// swallowed so cleanup never masks the error that triggered it.
    pub async fn remove(&self, url: &str) {
        let Some(file_name) = url.strip_prefix("/uploads/") else {
            return;
        };
        if file_name.contains(['/', '\\']) {
            return;
        }
        if let Err(e) = tokio::fs::remove_file(self.dir.join(file_name)).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove stored image {file_name}: {e}");
            }
        }
    }

    /// Remove every file in a batch of stored URLs
    pub async fn discard(&self, urls: &[String]) {
        for url in urls {
            self.remove(url).await;
        }
    }
}

fn extension_of(name: &str) -> ApiResult<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .filter(|e| ALLOWED_EXTENSIONS.contains(&e.as_str()))
        .ok_or_else(|| ApiError::invalid_body(format!("Unsupported image type: {name}")))
}
