use std::sync::Arc;

use anyhow::Context;
use ink_app::GalleryDeps;
use ink_core::{config::AppConfig, BackgroundParam, Endpoints, ImageSize};
use ink_infra::{FsImageSource, HttpGalleryClient};

/// Builds the adapters behind the use case ports from the effective config.
///
/// This is where configured values are validated: an unusable server URL or
/// background parameter fails here, before any command runs.
pub fn wire_dependencies(config: &AppConfig) -> anyhow::Result<GalleryDeps> {
    let background_param = BackgroundParam::parse(&config.background_param)
        .context("Invalid [upload] background_param")?;
    let endpoints = Endpoints::new(&config.server_url, background_param)
        .context("Invalid server url")?;

    tracing::debug!(server = %endpoints.base(), "Wiring gallery client");
    let client = HttpGalleryClient::new(endpoints)?;

    Ok(GalleryDeps {
        api: Arc::new(client),
        image_source: Arc::new(FsImageSource::new()),
    })
}

/// Display size to fit fetched images to, when both dimensions are set.
pub fn display_size(config: &AppConfig) -> Option<ImageSize> {
    (config.display_width > 0 && config.display_height > 0).then_some(ImageSize {
        width: config.display_width,
        height: config.display_height,
    })
}
