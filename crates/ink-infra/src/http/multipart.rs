use ink_core::{FilePart, GalleryError};
use reqwest::multipart::{Form, Part};

/// Builds the multipart body of an upload: a single file part.
pub fn upload_form(file: FilePart) -> Result<Form, GalleryError> {
    let FilePart {
        field_name,
        file_name,
        mime_type,
        bytes,
    } = file;

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime_type)
        .map_err(|e| GalleryError::precondition(format!("invalid MIME type `{}`: {}", mime_type, e)))?;

    Ok(Form::new().part(field_name, part))
}
