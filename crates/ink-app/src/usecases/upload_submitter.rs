use std::path::Path;
use std::sync::Arc;

use ink_core::{
    ports::{GalleryApiPort, ImageSourcePort},
    ErrorAlert, GalleryError, PickedImage, UploadDraft,
};
use tracing::info;

/// Upload sheet state: the draft being edited and its alert.
///
/// A successful `submit` is the caller's cue to re-fetch the gallery.
pub struct UploadSubmitter {
    api: Arc<dyn GalleryApiPort>,
    draft: UploadDraft,
    alert: ErrorAlert,
}

impl UploadSubmitter {
    pub fn new(api: Arc<dyn GalleryApiPort>, image: PickedImage) -> Self {
        Self {
            api,
            draft: UploadDraft::new(image),
            alert: ErrorAlert::new(),
        }
    }

    /// Reads the picked file and opens a draft for it.
    pub async fn pick(
        api: Arc<dyn GalleryApiPort>,
        image_source: &dyn ImageSourcePort,
        path: &Path,
    ) -> Result<Self, GalleryError> {
        let image = image_source.load(path).await?;
        info!(file = %image.file_name(), bytes = image.len(), "Picked image for upload");
        Ok(Self::new(api, image))
    }

    pub fn draft(&self) -> &UploadDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut UploadDraft {
        &mut self.draft
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_submittable()
    }

    pub fn alert(&self) -> &ErrorAlert {
        &self.alert
    }

    pub fn alert_mut(&mut self) -> &mut ErrorAlert {
        &mut self.alert
    }

    /// Validates the draft and posts it.
    ///
    /// Validation failures (empty title, no image data, unknown extension)
    /// are reported before any request is made.
    #[tracing::instrument(
        name = "usecase.upload_submitter.submit",
        skip(self),
        fields(title = %self.draft.title)
    )]
    pub async fn submit(&mut self) -> Result<(), GalleryError> {
        let request = match self.draft.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.alert.report(&err);
                return Err(err);
            }
        };

        match self.api.upload(request).await {
            Ok(()) => {
                info!("Uploaded artwork");
                Ok(())
            }
            Err(err) => {
                self.alert.report(&err);
                Err(err)
            }
        }
    }
}
