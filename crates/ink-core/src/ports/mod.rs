//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations (HTTP client, local files). Use cases only ever see these
//! traits.

pub mod gallery_api;
pub mod image_source;

pub use gallery_api::GalleryApiPort;
pub use image_source::ImageSourcePort;
