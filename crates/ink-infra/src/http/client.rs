use async_trait::async_trait;
use ink_core::{
    ports::GalleryApiPort, ArtworkId, CollectionSnapshot, Endpoints, GalleryError, ImageSize,
    UploadRequest,
};
use log::{debug, info, warn};
use reqwest::{RequestBuilder, Response, StatusCode};

use super::dto::FetchResponse;
use super::multipart::upload_form;

/// Gallery server client over HTTP/JSON.
///
/// One request per call, no retries. Anything other than `200 OK` is turned
/// into [`GalleryError::Http`] with the body read as text.
pub struct HttpGalleryClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpGalleryClient {
    pub fn new(endpoints: Endpoints) -> Result<Self, GalleryError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GalleryError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, endpoints))
    }

    pub fn with_client(client: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn send(&self, op: &str, request: RequestBuilder) -> Result<Response, GalleryError> {
        let response = request.send().await.map_err(|e| {
            warn!("{} failed before a response arrived: {}", op, e);
            map_transport_error(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned {}: {}", op, status, body.trim());
            return Err(GalleryError::Http {
                status: status.as_u16(),
                body,
            });
        }

        debug!("{} returned {}", op, status);
        Ok(response)
    }
}

/// Maps failures where no usable response was received.
fn map_transport_error(error: reqwest::Error) -> GalleryError {
    if error.is_timeout() {
        GalleryError::Network(format!("request timed out: {}", error))
    } else if error.is_decode() || error.is_body() {
        GalleryError::Decode(error.to_string())
    } else {
        GalleryError::Network(error.to_string())
    }
}

#[async_trait]
impl GalleryApiPort for HttpGalleryClient {
    async fn fetch_collection(&self) -> Result<CollectionSnapshot, GalleryError> {
        let url = self.endpoints.list();
        debug!("Fetching collection from {}", url);
        let response = self.send("fetch_collection", self.client.get(url)).await?;

        let body = response.bytes().await.map_err(map_transport_error)?;
        let decoded: FetchResponse = serde_json::from_slice(&body)
            .map_err(|e| GalleryError::Decode(e.to_string()))?;
        Ok(decoded.into())
    }

    async fn fetch_image(
        &self,
        id: &ArtworkId,
        size: Option<ImageSize>,
    ) -> Result<Vec<u8>, GalleryError> {
        let url = match size {
            Some(size) => self.endpoints.image_sized(id, size),
            None => self.endpoints.image(id),
        };
        let response = self.send("fetch_image", self.client.get(url)).await?;

        let bytes = response.bytes().await.map_err(map_transport_error)?;
        Ok(bytes.to_vec())
    }

    async fn upload(&self, request: UploadRequest) -> Result<(), GalleryError> {
        let url = self.endpoints.upload(&request.query);
        let file_name = request.file.file_name.clone();
        let form = upload_form(request.file)?;

        info!("Uploading {} to {}", file_name, url.path());
        self.send("upload", self.client.post(url).multipart(form)).await?;
        Ok(())
    }

    async fn delete(&self, id: &ArtworkId) -> Result<(), GalleryError> {
        let url = self.endpoints.delete(id);
        info!("Deleting artwork {}", id);
        self.send("delete", self.client.delete(url)).await?;
        Ok(())
    }

    async fn set_next(&self, id: &ArtworkId) -> Result<(), GalleryError> {
        let url = self.endpoints.set_next(id);
        info!("Setting next artwork to {}", id);
        self.send("set_next", self.client.put(url)).await?;
        Ok(())
    }

    async fn fetch_next(&self) -> Result<Option<ArtworkId>, GalleryError> {
        let url = self.endpoints.next();
        let response = self.send("fetch_next", self.client.get(url)).await?;

        let body = response.text().await.map_err(map_transport_error)?;
        let next = body.trim();
        Ok((!next.is_empty()).then(|| ArtworkId::from(next)))
    }
}
