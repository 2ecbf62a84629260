//! Upload draft: user-entered metadata plus the picked image.

use std::path::Path;

use image::ImageFormat;

use crate::endpoint::UploadQuery;
use crate::error::GalleryError;

/// Multipart field name the server reads the image from.
pub const FILE_FIELD: &str = "file";

/// Image bytes already read from a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    file_name: String,
    bytes: Vec<u8>,
}

impl PickedImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Resolves the MIME type of an image from its file extension.
///
/// Fails instead of falling back to a generic type, so the server never
/// receives a part with an empty or wrong content type.
pub fn mime_type_for(file_name: &str) -> Result<&'static str, GalleryError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            GalleryError::precondition(format!("`{}` has no file extension", file_name))
        })?;

    ImageFormat::from_extension(extension)
        .map(|format| format.to_mime_type())
        .ok_or_else(|| {
            GalleryError::precondition(format!(
                "unsupported image extension `.{}`",
                extension
            ))
        })
}

/// One file part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field_name: &'static str,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// A validated upload, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub query: UploadQuery,
    pub file: FilePart,
}

/// Transient input gathered by the upload screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDraft {
    pub title: String,
    pub artist: String,
    pub use_dark_background: bool,
    pub overwrite_existing: bool,
    image: PickedImage,
}

impl UploadDraft {
    pub fn new(image: PickedImage) -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            use_dark_background: false,
            overwrite_existing: false,
            image,
        }
    }

    pub fn image(&self) -> &PickedImage {
        &self.image
    }

    /// Whether the draft may be submitted (a title is required).
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.image.is_empty()
    }

    /// Validates the draft and builds the request to send.
    pub fn to_request(&self) -> Result<UploadRequest, GalleryError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(GalleryError::precondition("Title is required"));
        }
        if self.image.is_empty() {
            return Err(GalleryError::precondition("No image data to upload"));
        }
        let mime_type = mime_type_for(self.image.file_name())?;

        Ok(UploadRequest {
            query: UploadQuery {
                title: title.to_string(),
                artist: self.artist.trim().to_string(),
                dark_background: self.use_dark_background,
                overwrite: self.overwrite_existing,
            },
            file: FilePart {
                field_name: FILE_FIELD,
                file_name: self.image.file_name().to_string(),
                mime_type,
                bytes: self.image.bytes().to_vec(),
            },
        })
    }
}
