//! Inkarta application layer
//!
//! Use cases that own the view state of the gallery screens: the collection
//! store shared by the list and detail screens, and the upload submitter.

pub mod deps;
pub mod usecases;

pub use deps::GalleryDeps;
pub use usecases::{DeleteReport, GalleryStore, UploadSubmitter};
