use std::path::Path;

use async_trait::async_trait;

use crate::{error::GalleryError, upload::PickedImage};

/// Access to images the user picked from local storage.
///
/// Implementations acquire the file, read it fully and release it on every
/// exit path before returning.
#[async_trait]
pub trait ImageSourcePort: Send + Sync {
    async fn load(&self, path: &Path) -> Result<PickedImage, GalleryError>;
}
