use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use ink_core::{ports::ImageSourcePort, GalleryError, PickedImage};
use log::debug;
use tokio::io::AsyncReadExt;

/// Reads picked images from the local filesystem.
///
/// The file handle lives only inside `load`; it is closed when the function
/// returns, on success and on every error path.
#[derive(Debug, Default, Clone)]
pub struct FsImageSource;

impl FsImageSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageSourcePort for FsImageSource {
    async fn load(&self, path: &Path) -> Result<PickedImage, GalleryError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                GalleryError::precondition(format!("`{}` is not a file path", path.display()))
            })?
            .to_string();

        let mut file = tokio::fs::File::open(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                GalleryError::precondition(format!("image not found: {}", path.display()))
            }
            _ => GalleryError::Io(format!("failed to open {}: {}", path.display(), e)),
        })?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .await
            .map_err(|e| GalleryError::Io(format!("failed to read {}: {}", path.display(), e)))?;

        if bytes.is_empty() {
            return Err(GalleryError::precondition(format!(
                "image file is empty: {}",
                path.display()
            )));
        }

        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(PickedImage::new(file_name, bytes))
    }
}
