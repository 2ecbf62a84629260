//! # ink-infra
//!
//! Adapters behind the `ink-core` ports: a reqwest client for the gallery
//! server and a filesystem image source.

pub mod fs;
pub mod http;

pub use fs::FsImageSource;
pub use http::HttpGalleryClient;
