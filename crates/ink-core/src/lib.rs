//! # ink-core
//!
//! Core domain models and ports for the Inkarta gallery client.
//!
//! This crate contains pure data and policy without any infrastructure
//! dependencies. HTTP and filesystem access live behind the traits in
//! [`ports`].

pub mod alert;
pub mod artwork;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod ids;
pub mod ports;
pub mod upload;

// Re-export commonly used types at the crate root
pub use alert::{AlertState, ErrorAlert};
pub use artwork::{Artwork, CollectionSnapshot};
pub use config::AppConfig;
pub use endpoint::{BackgroundParam, Endpoint, EndpointError, Endpoints, ImageSize, UploadQuery};
pub use error::GalleryError;
pub use ids::ArtworkId;
pub use upload::{FilePart, PickedImage, UploadDraft, UploadRequest};
