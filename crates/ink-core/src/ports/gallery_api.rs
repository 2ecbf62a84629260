use async_trait::async_trait;

use crate::{
    artwork::CollectionSnapshot, endpoint::ImageSize, error::GalleryError, ids::ArtworkId,
    upload::UploadRequest,
};

/// Remote gallery server.
///
/// Every call is a single request/response. A non-200 answer must come back
/// as [`GalleryError::Http`] carrying the status and the raw body text.
#[async_trait]
pub trait GalleryApiPort: Send + Sync {
    /// Fetch the whole collection and the next id.
    async fn fetch_collection(&self) -> Result<CollectionSnapshot, GalleryError>;

    /// Fetch the image bytes of one artwork, optionally fitted to `size`.
    async fn fetch_image(
        &self,
        id: &ArtworkId,
        size: Option<ImageSize>,
    ) -> Result<Vec<u8>, GalleryError>;

    /// Post a new artwork.
    async fn upload(&self, request: UploadRequest) -> Result<(), GalleryError>;

    /// Remove one artwork.
    async fn delete(&self, id: &ArtworkId) -> Result<(), GalleryError>;

    /// Queue an artwork for the companion display.
    async fn set_next(&self, id: &ArtworkId) -> Result<(), GalleryError>;

    /// Read the queued artwork, `None` if the server has none.
    async fn fetch_next(&self) -> Result<Option<ArtworkId>, GalleryError>;
}
