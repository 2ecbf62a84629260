use serde::{Deserialize, Serialize};

use crate::ids::ArtworkId;

/// A single gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub artist: String,
    /// Whether the piece is shown on a dark background (wire key `dark`).
    #[serde(rename = "dark", default)]
    pub dark_background: bool,
}

impl Artwork {
    pub fn new(
        id: impl Into<ArtworkId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        dark_background: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            dark_background,
        }
    }
}

/// The complete collection as of one successful list fetch.
///
/// Artworks are kept sorted by title. Ties are broken by id so that two
/// fetches of the same collection always produce the same order, whatever
/// order the server's map was serialized in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSnapshot {
    artworks: Vec<Artwork>,
    next_id: Option<ArtworkId>,
}

impl CollectionSnapshot {
    pub fn new(artworks: impl IntoIterator<Item = Artwork>, next_id: Option<ArtworkId>) -> Self {
        let mut artworks: Vec<Artwork> = artworks.into_iter().collect();
        artworks.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        Self { artworks, next_id }
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn next_id(&self) -> Option<&ArtworkId> {
        self.next_id.as_ref()
    }

    pub fn into_parts(self) -> (Vec<Artwork>, Option<ArtworkId>) {
        (self.artworks, self.next_id)
    }
}
