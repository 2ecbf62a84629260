use std::sync::Arc;

use ink_core::{
    ports::GalleryApiPort, Artwork, ArtworkId, ErrorAlert, GalleryError, ImageSize,
};
use tracing::{info, warn};

/// Outcome of a batch delete.
///
/// Only ids in `deleted` were removed from the local list. Failed ids stay
/// listed because the server still has them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: Vec<ArtworkId>,
    pub failed: Vec<(ArtworkId, GalleryError)>,
}

impl DeleteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// View state of the gallery: the latest snapshot, the next id, the loading
/// flag and the alert shown by the list and detail screens.
///
/// The store is the one shared handle for both screens. Operations take
/// `&mut self`, so results of a request are applied by whoever awaited it,
/// on that task, after the request completes.
pub struct GalleryStore {
    api: Arc<dyn GalleryApiPort>,
    artworks: Option<Vec<Artwork>>,
    next_id: Option<ArtworkId>,
    is_loading: bool,
    alert: ErrorAlert,
}

impl GalleryStore {
    pub fn from_ports(api: Arc<dyn GalleryApiPort>) -> Self {
        Self {
            api,
            artworks: None,
            next_id: None,
            is_loading: false,
            alert: ErrorAlert::new(),
        }
    }

    /// Artworks of the latest successful fetch, `None` before the first one.
    pub fn artworks(&self) -> Option<&[Artwork]> {
        self.artworks.as_deref()
    }

    pub fn next_id(&self) -> Option<&ArtworkId> {
        self.next_id.as_ref()
    }

    pub fn is_next(&self, id: &ArtworkId) -> bool {
        self.next_id.as_ref() == Some(id)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn alert(&self) -> &ErrorAlert {
        &self.alert
    }

    pub fn alert_mut(&mut self) -> &mut ErrorAlert {
        &mut self.alert
    }

    /// Fetches the whole collection and replaces the local snapshot.
    ///
    /// On failure the previous snapshot is kept and the error is surfaced.
    #[tracing::instrument(name = "usecase.gallery_store.fetch_all", skip(self))]
    pub async fn fetch_all(&mut self) -> Result<Vec<Artwork>, GalleryError> {
        self.is_loading = true;
        let result = self.api.fetch_collection().await;
        self.is_loading = false;

        match result {
            Ok(snapshot) => {
                let (artworks, next_id) = snapshot.into_parts();
                info!(count = artworks.len(), next = ?next_id, "Fetched collection");
                self.artworks = Some(artworks.clone());
                self.next_id = next_id;
                Ok(artworks)
            }
            Err(err) => Err(self.surface(err)),
        }
    }

    /// Deletes the artworks at `indices` of the current list.
    ///
    /// Requests go out one at a time, in index order. A failed delete is
    /// surfaced and the batch continues. Only confirmed deletions are removed
    /// from the local list. An index outside the list rejects the whole batch
    /// before any request is sent.
    #[tracing::instrument(name = "usecase.gallery_store.delete", skip(self))]
    pub async fn delete(&mut self, indices: &[usize]) -> Result<DeleteReport, GalleryError> {
        let targets = match self.resolve_indices(indices) {
            Ok(targets) => targets,
            Err(err) => return Err(self.surface(err)),
        };

        let mut report = DeleteReport::default();
        for id in targets {
            match self.api.delete(&id).await {
                Ok(()) => {
                    info!(artwork_id = %id, "Deleted artwork");
                    report.deleted.push(id);
                }
                Err(err) => {
                    warn!(artwork_id = %id, error = %err, "Failed to delete artwork");
                    let err = self.surface(err);
                    report.failed.push((id, err));
                }
            }
        }

        if let Some(artworks) = self.artworks.as_mut() {
            artworks.retain(|artwork| !report.deleted.contains(&artwork.id));
        }
        if self
            .next_id
            .as_ref()
            .is_some_and(|next_id| report.deleted.contains(next_id))
        {
            self.next_id = None;
        }

        Ok(report)
    }

    /// Queues `id` for the companion display and records it locally.
    #[tracing::instrument(name = "usecase.gallery_store.set_next", skip(self), fields(artwork_id = %id))]
    pub async fn set_next(&mut self, id: &ArtworkId) -> Result<(), GalleryError> {
        match self.api.set_next(id).await {
            Ok(()) => {
                info!("Updated next artwork");
                self.next_id = Some(id.clone());
                Ok(())
            }
            Err(err) => Err(self.surface(err)),
        }
    }

    /// Re-reads the next id from the server.
    #[tracing::instrument(name = "usecase.gallery_store.refresh_next", skip(self))]
    pub async fn refresh_next(&mut self) -> Result<Option<ArtworkId>, GalleryError> {
        match self.api.fetch_next().await {
            Ok(next_id) => {
                self.next_id = next_id.clone();
                Ok(next_id)
            }
            Err(err) => Err(self.surface(err)),
        }
    }

    /// Fetches the image of one artwork for the detail screen.
    #[tracing::instrument(name = "usecase.gallery_store.load_image", skip(self), fields(artwork_id = %id))]
    pub async fn load_image(
        &mut self,
        id: &ArtworkId,
        size: Option<ImageSize>,
    ) -> Result<Vec<u8>, GalleryError> {
        match self.api.fetch_image(id, size).await {
            Ok(bytes) => Ok(bytes),
            Err(err) => Err(self.surface(err)),
        }
    }

    fn resolve_indices(&self, indices: &[usize]) -> Result<Vec<ArtworkId>, GalleryError> {
        let artworks = self.artworks.as_deref().unwrap_or(&[]);
        let mut targets: Vec<ArtworkId> = Vec::with_capacity(indices.len());
        for &index in indices {
            let artwork = artworks.get(index).ok_or_else(|| {
                GalleryError::precondition(format!("No artwork at position {}", index))
            })?;
            if !targets.contains(&artwork.id) {
                targets.push(artwork.id.clone());
            }
        }
        Ok(targets)
    }

    fn surface(&mut self, err: GalleryError) -> GalleryError {
        self.alert.report(&err);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ink_core::{CollectionSnapshot, UploadRequest};
    use mockall::{mock, predicate::eq, Sequence};

    mock! {
        pub Api {}

        #[async_trait]
        impl GalleryApiPort for Api {
            async fn fetch_collection(&self) -> Result<CollectionSnapshot, GalleryError>;
            async fn fetch_image(
                &self,
                id: &ArtworkId,
                size: Option<ImageSize>,
            ) -> Result<Vec<u8>, GalleryError>;
            async fn upload(&self, request: UploadRequest) -> Result<(), GalleryError>;
            async fn delete(&self, id: &ArtworkId) -> Result<(), GalleryError>;
            async fn set_next(&self, id: &ArtworkId) -> Result<(), GalleryError>;
            async fn fetch_next(&self) -> Result<Option<ArtworkId>, GalleryError>;
        }
    }

    fn collection() -> CollectionSnapshot {
        CollectionSnapshot::new(
            vec![
                Artwork::new("x", "Almond Blossom", "Van Gogh", false),
                Artwork::new("y", "Bathers", "Cezanne", true),
                Artwork::new("z", "Composition", "Mondrian", false),
            ],
            Some(ArtworkId::from("x")),
        )
    }

    async fn loaded_store(mut api: MockApi) -> GalleryStore {
        let snapshot = collection();
        api.expect_fetch_collection()
            .times(1)
            .returning(move || Ok(snapshot.clone()));
        let mut store = GalleryStore::from_ports(Arc::new(api));
        store.fetch_all().await.unwrap();
        store
    }

    fn ids(store: &GalleryStore) -> Vec<&str> {
        store
            .artworks()
            .unwrap_or_default()
            .iter()
            .map(|a| a.id.as_str())
            .collect()
    }

    #[tokio::test]
    async fn fetch_all_replaces_snapshot_and_next() {
        let store = loaded_store(MockApi::new()).await;

        assert_eq!(ids(&store), vec!["x", "y", "z"]);
        assert!(store.is_next(&ArtworkId::from("x")));
        assert!(!store.is_loading());
        assert!(!store.alert().is_showing());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_snapshot() {
        let mut api = MockApi::new();
        let mut seq = Sequence::new();
        let snapshot = collection();
        api.expect_fetch_collection()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || Ok(snapshot.clone()));
        api.expect_fetch_collection()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Err(GalleryError::Http {
                    status: 500,
                    body: "database unavailable".to_string(),
                })
            });

        let mut store = GalleryStore::from_ports(Arc::new(api));
        store.fetch_all().await.unwrap();
        let err = store.fetch_all().await.unwrap_err();

        assert_eq!(
            err,
            GalleryError::Http {
                status: 500,
                body: "database unavailable".to_string()
            }
        );
        assert_eq!(ids(&store), vec!["x", "y", "z"]);
        assert_eq!(store.next_id(), Some(&ArtworkId::from("x")));
        assert_eq!(
            store.alert().message(),
            Some("database unavailable (Status: 500)")
        );
    }

    #[tokio::test]
    async fn delete_removes_only_confirmed_entries() {
        let mut api = MockApi::new();
        let mut seq = Sequence::new();
        api.expect_delete()
            .with(eq(ArtworkId::from("x")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(GalleryError::Http {
                    status: 400,
                    body: "File identifier not found".to_string(),
                })
            });
        api.expect_delete()
            .with(eq(ArtworkId::from("y")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut store = loaded_store(api).await;
        let report = store.delete(&[0, 1]).await.unwrap();

        assert_eq!(report.deleted, vec![ArtworkId::from("y")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, ArtworkId::from("x"));
        assert!(!report.is_complete());
        assert_eq!(ids(&store), vec!["x", "z"]);
        assert_eq!(
            store.alert().message(),
            Some("File identifier not found (Status: 400)")
        );
    }

    #[tokio::test]
    async fn delete_continues_after_failure_and_latches_alert_once() {
        let mut api = MockApi::new();
        api.expect_delete()
            .times(2)
            .returning(|id| Err(GalleryError::Network(format!("timeout deleting {}", id))));

        let mut store = loaded_store(api).await;
        let report = store.delete(&[1, 2]).await.unwrap();

        assert!(report.deleted.is_empty());
        assert_eq!(report.failed.len(), 2);
        assert_eq!(ids(&store), vec!["x", "y", "z"]);
        // Second failure overwrote the text of the alert already showing.
        assert_eq!(
            store.alert().message(),
            Some("Could not reach the server: timeout deleting z")
        );
    }

    #[tokio::test]
    async fn deleting_next_artwork_clears_next_id() {
        let mut api = MockApi::new();
        api.expect_delete().times(1).returning(|_| Ok(()));

        let mut store = loaded_store(api).await;
        store.delete(&[0]).await.unwrap();

        assert_eq!(store.next_id(), None);
        assert_eq!(ids(&store), vec!["y", "z"]);
    }

    #[tokio::test]
    async fn delete_with_bad_index_sends_nothing() {
        let mut api = MockApi::new();
        api.expect_delete().never();

        let mut store = loaded_store(api).await;
        let err = store.delete(&[0, 7]).await.unwrap_err();

        assert!(matches!(err, GalleryError::Precondition(_)));
        assert_eq!(ids(&store), vec!["x", "y", "z"]);
        assert!(store.alert().is_showing());
    }

    #[tokio::test]
    async fn duplicate_indices_delete_once() {
        let mut api = MockApi::new();
        api.expect_delete()
            .with(eq(ArtworkId::from("z")))
            .times(1)
            .returning(|_| Ok(()));

        let mut store = loaded_store(api).await;
        let report = store.delete(&[2, 2]).await.unwrap();

        assert_eq!(report.deleted, vec![ArtworkId::from("z")]);
    }

    #[tokio::test]
    async fn set_next_updates_local_next_on_success() {
        let mut api = MockApi::new();
        api.expect_set_next()
            .with(eq(ArtworkId::from("z")))
            .times(1)
            .returning(|_| Ok(()));

        let mut store = loaded_store(api).await;
        store.set_next(&ArtworkId::from("z")).await.unwrap();

        assert!(store.is_next(&ArtworkId::from("z")));
        assert!(!store.is_next(&ArtworkId::from("x")));
    }

    #[tokio::test]
    async fn failed_set_next_keeps_previous_next() {
        let mut api = MockApi::new();
        api.expect_set_next().times(1).returning(|_| {
            Err(GalleryError::Http {
                status: 400,
                body: "File identifier not found".to_string(),
            })
        });

        let mut store = loaded_store(api).await;
        let result = store.set_next(&ArtworkId::from("gone")).await;

        assert!(result.is_err());
        assert!(store.is_next(&ArtworkId::from("x")));
        assert!(store.alert().is_showing());
    }

    #[tokio::test]
    async fn refresh_next_reads_server_value() {
        let mut api = MockApi::new();
        api.expect_fetch_next()
            .times(1)
            .returning(|| Ok(Some(ArtworkId::from("y"))));

        let mut store = loaded_store(api).await;
        let next = store.refresh_next().await.unwrap();

        assert_eq!(next, Some(ArtworkId::from("y")));
        assert!(store.is_next(&ArtworkId::from("y")));
    }

    #[tokio::test]
    async fn load_image_passes_size_through() {
        let mut api = MockApi::new();
        let size = ImageSize {
            width: 600,
            height: 448,
        };
        api.expect_fetch_image()
            .with(eq(ArtworkId::from("y")), eq(Some(size)))
            .times(1)
            .returning(|_, _| Ok(b"BM".to_vec()));

        let mut store = GalleryStore::from_ports(Arc::new(api));
        let bytes = store
            .load_image(&ArtworkId::from("y"), Some(size))
            .await
            .unwrap();

        assert_eq!(bytes, b"BM".to_vec());
    }
}
