pub mod client;
pub mod dto;
pub mod multipart;

pub use client::HttpGalleryClient;
pub use dto::FetchResponse;
