//! Endpoint resolution: logical gallery operations to fully-qualified URLs.
//!
//! Pure mapping. Nothing in here performs I/O.

use thiserror::Error;
use url::Url;

use crate::ids::ArtworkId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("invalid server url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unknown background parameter `{0}` (expected `dark` or `pad`)")]
    UnknownBackgroundParam(String),
}

/// Server routes, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Whole collection plus the next id.
    All,
    /// Image bytes for one artwork.
    Image,
    /// Multipart upload of a new artwork.
    Upload,
    /// Removal of one artwork.
    Delete,
    /// Read or update the artwork queued for the display.
    Next,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::All => "all",
            Endpoint::Image => "image",
            Endpoint::Upload => "upload",
            Endpoint::Delete => "delete",
            Endpoint::Next => "next",
        }
    }
}

/// Query key used to send the background flag on upload.
///
/// Current servers take `dark=true` for a black background. Older servers
/// take `pad`, where `true` pads with white, so the value is inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundParam {
    #[default]
    Dark,
    Pad,
}

impl BackgroundParam {
    pub fn parse(value: &str) -> Result<Self, EndpointError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(BackgroundParam::Dark),
            "pad" => Ok(BackgroundParam::Pad),
            other => Err(EndpointError::UnknownBackgroundParam(other.to_string())),
        }
    }

    fn query_pair(self, dark_background: bool) -> (&'static str, bool) {
        match self {
            BackgroundParam::Dark => ("dark", dark_background),
            BackgroundParam::Pad => ("pad", !dark_background),
        }
    }
}

/// Target box the server fits an image into before returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Query parameters sent alongside an upload body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadQuery {
    pub title: String,
    pub artist: String,
    pub dark_background: bool,
    pub overwrite: bool,
}

/// Resolves gallery operations against one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
    background_param: BackgroundParam,
}

impl Endpoints {
    /// Parses and validates the base URL.
    ///
    /// Only `http`/`https` URLs are accepted. A path prefix is kept, and a
    /// trailing slash is added so routes resolve beneath it.
    pub fn new(base_url: &str, background_param: BackgroundParam) -> Result<Self, EndpointError> {
        let invalid = |reason: String| EndpointError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut base = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", base.scheme())));
        }
        if base.cannot_be_a_base() {
            return Err(invalid("url cannot be used as a base".to_string()));
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);

        Ok(Self {
            base,
            background_param,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn background_param(&self) -> BackgroundParam {
        self.background_param
    }

    pub fn url(&self, endpoint: Endpoint) -> Url {
        let mut url = self.base.clone();
        // The base was validated in `new`, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(endpoint.path());
        }
        url
    }

    pub fn list(&self) -> Url {
        self.url(Endpoint::All)
    }

    pub fn image(&self, id: &ArtworkId) -> Url {
        let mut url = self.url(Endpoint::Image);
        url.query_pairs_mut().append_pair("id", id.as_str());
        url
    }

    pub fn image_sized(&self, id: &ArtworkId, size: ImageSize) -> Url {
        let mut url = self.image(id);
        url.query_pairs_mut()
            .append_pair("w", &size.width.to_string())
            .append_pair("h", &size.height.to_string());
        url
    }

    pub fn upload(&self, query: &UploadQuery) -> Url {
        let (background_key, background_value) =
            self.background_param.query_pair(query.dark_background);

        let mut url = self.url(Endpoint::Upload);
        url.query_pairs_mut()
            .append_pair("title", &query.title)
            .append_pair("artist", &query.artist)
            .append_pair(background_key, bool_str(background_value))
            .append_pair("overwrite", bool_str(query.overwrite));
        url
    }

    pub fn delete(&self, id: &ArtworkId) -> Url {
        let mut url = self.url(Endpoint::Delete);
        url.query_pairs_mut().append_pair("id", id.as_str());
        url
    }

    pub fn set_next(&self, id: &ArtworkId) -> Url {
        let mut url = self.url(Endpoint::Next);
        url.query_pairs_mut().append_pair("id", id.as_str());
        url
    }

    pub fn next(&self) -> Url {
        self.url(Endpoint::Next)
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
