//! # Application Dependencies
//!
//! Parameter grouping for use case construction. Not a builder: no defaults,
//! no hidden logic.

use std::sync::Arc;

use ink_core::ports::{GalleryApiPort, ImageSourcePort};

use crate::usecases::{GalleryStore, UploadSubmitter};

/// Ports the gallery use cases are built from.
#[derive(Clone)]
pub struct GalleryDeps {
    pub api: Arc<dyn GalleryApiPort>,
    pub image_source: Arc<dyn ImageSourcePort>,
}

impl GalleryDeps {
    pub fn gallery_store(&self) -> GalleryStore {
        GalleryStore::from_ports(self.api.clone())
    }

    pub async fn upload_submitter(
        &self,
        path: &std::path::Path,
    ) -> Result<UploadSubmitter, ink_core::GalleryError> {
        UploadSubmitter::pick(self.api.clone(), self.image_source.as_ref(), path).await
    }
}
