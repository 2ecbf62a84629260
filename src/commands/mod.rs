//! Command handlers. Each one drives the use cases and prints results on
//! stdout; failures are shown through the use case's alert on stderr.

pub mod gallery;
pub mod upload;

use ink_core::{ErrorAlert, GalleryError};

/// Shows the pending alert once and clears it, then hands the error back.
pub(crate) fn present_alert(alert: &mut ErrorAlert, err: GalleryError) -> anyhow::Error {
    if let (Some(title), Some(message)) = (alert.title(), alert.message()) {
        eprintln!("{}: {}", title, message);
    }
    alert.dismiss();
    err.into()
}
