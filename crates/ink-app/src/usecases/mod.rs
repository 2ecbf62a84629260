//! Gallery use cases
//!
//! [GalleryStore]     → list screen, detail screen (next id, image)
//!        ↑ re-fetch on success
//! [UploadSubmitter]  → upload sheet

pub mod gallery_store;
pub mod upload_submitter;

pub use gallery_store::{DeleteReport, GalleryStore};
pub use upload_submitter::UploadSubmitter;
