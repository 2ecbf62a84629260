use std::collections::HashMap;

use ink_core::{Artwork, ArtworkId, CollectionSnapshot};
use serde::{Deserialize, Serialize};

/// Body of `GET /all`.
///
/// `next` is an empty string when no artwork is queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    pub artworks: HashMap<String, Artwork>,
    #[serde(default)]
    pub next: String,
}

impl FetchResponse {
    pub fn from_snapshot(snapshot: &CollectionSnapshot) -> Self {
        Self {
            artworks: snapshot
                .artworks()
                .iter()
                .map(|artwork| (artwork.id.as_str().to_string(), artwork.clone()))
                .collect(),
            next: snapshot
                .next_id()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

impl From<FetchResponse> for CollectionSnapshot {
    fn from(response: FetchResponse) -> Self {
        let next = response.next.trim();
        let next_id = (!next.is_empty()).then(|| ArtworkId::from(next));
        CollectionSnapshot::new(response.artworks.into_values(), next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_map_into_title_sorted_snapshot() {
        let body = r#"{
            "artworks": {
                "a": {"id": "a", "title": "B", "artist": "Klimt", "dark": false},
                "b": {"id": "b", "title": "A", "artist": "Monet", "dark": true}
            },
            "next": "a"
        }"#;

        let response: FetchResponse = serde_json::from_str(body).unwrap();
        let snapshot = CollectionSnapshot::from(response);

        let titles: Vec<&str> = snapshot.artworks().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(snapshot.next_id(), Some(&ArtworkId::from("a")));
        assert!(snapshot.artworks()[0].dark_background);
    }

    #[test]
    fn empty_next_means_none_queued() {
        let response: FetchResponse =
            serde_json::from_str(r#"{"artworks": {}, "next": ""}"#).unwrap();

        let snapshot = CollectionSnapshot::from(response);

        assert!(snapshot.artworks().is_empty());
        assert_eq!(snapshot.next_id(), None);
    }

    #[test]
    fn artwork_survives_list_encoding() {
        let artwork = Artwork::new("9a1c", "Water Lilies", "Monet", true);
        let snapshot = CollectionSnapshot::new(vec![artwork.clone()], Some(artwork.id.clone()));

        let json = serde_json::to_string(&FetchResponse::from_snapshot(&snapshot)).unwrap();
        let decoded: FetchResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.artworks.get("9a1c"), Some(&artwork));
        assert_eq!(CollectionSnapshot::from(decoded), snapshot);
    }
}
