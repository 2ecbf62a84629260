//! End-to-end flow through the real HTTP adapter against a mock server:
//! list, upload, re-fetch, set next, delete.

use std::io::Write;
use std::sync::Arc;

use ink_app::GalleryDeps;
use ink_core::{ArtworkId, BackgroundParam, Endpoints, GalleryError};
use ink_infra::{FsImageSource, HttpGalleryClient};
use mockito::{Matcher, Server};
use tempfile::TempDir;

fn deps(host: &str) -> GalleryDeps {
    let endpoints = Endpoints::new(host, BackgroundParam::Dark).unwrap();
    GalleryDeps {
        api: Arc::new(HttpGalleryClient::new(endpoints).unwrap()),
        image_source: Arc::new(FsImageSource::new()),
    }
}

const ONE_ARTWORK: &str =
    r#"{"artworks":{"k1":{"id":"k1","title":"Kiss","artist":"Klimt","dark":false}},"next":"k1"}"#;

const TWO_ARTWORKS: &str = r#"{"artworks":{
    "k1":{"id":"k1","title":"Kiss","artist":"Klimt","dark":false},
    "n1":{"id":"n1","title":"Nighthawks","artist":"Hopper","dark":true}
},"next":"k1"}"#;

#[tokio::test]
async fn upload_then_refetch_then_manage() {
    let mut server = Server::new_async().await;
    let deps = deps(&server.url());

    let first_list = server
        .mock("GET", "/all")
        .with_status(200)
        .with_body(ONE_ARTWORK)
        .expect(1)
        .create_async()
        .await;

    let mut store = deps.gallery_store();
    let artworks = store.fetch_all().await.unwrap();
    assert_eq!(artworks.len(), 1);
    first_list.assert_async().await;
    first_list.remove_async().await;

    // Pick a local file and upload it.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nighthawks.jpg");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"jpeg-bytes")
        .unwrap();

    let upload = server
        .mock("POST", "/upload")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("title".into(), "Nighthawks".into()),
            Matcher::UrlEncoded("dark".into(), "true".into()),
        ]))
        .match_body(Matcher::Regex(
            r#"name="file"; filename="nighthawks.jpg""#.to_string(),
        ))
        .with_status(200)
        .with_body("Success")
        .create_async()
        .await;

    let mut submitter = deps.upload_submitter(&path).await.unwrap();
    submitter.draft_mut().title = "Nighthawks".to_string();
    submitter.draft_mut().artist = "Hopper".to_string();
    submitter.draft_mut().use_dark_background = true;
    submitter.submit().await.unwrap();
    upload.assert_async().await;

    // Success triggers a re-fetch.
    server
        .mock("GET", "/all")
        .with_status(200)
        .with_body(TWO_ARTWORKS)
        .create_async()
        .await;
    let artworks = store.fetch_all().await.unwrap();
    let titles: Vec<&str> = artworks.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Kiss", "Nighthawks"]);

    // Queue the new piece for the display.
    server
        .mock("PUT", "/next")
        .match_query(Matcher::UrlEncoded("id".into(), "n1".into()))
        .with_status(200)
        .with_body("n1")
        .create_async()
        .await;
    store.set_next(&ArtworkId::from("n1")).await.unwrap();
    assert!(store.is_next(&ArtworkId::from("n1")));

    // Delete both: the first is refused by the server, the second succeeds.
    server
        .mock("DELETE", "/delete")
        .match_query(Matcher::UrlEncoded("id".into(), "k1".into()))
        .with_status(400)
        .with_body("File identifier not found")
        .create_async()
        .await;
    server
        .mock("DELETE", "/delete")
        .match_query(Matcher::UrlEncoded("id".into(), "n1".into()))
        .with_status(200)
        .with_body("Success")
        .create_async()
        .await;

    let report = store.delete(&[0, 1]).await.unwrap();

    assert_eq!(report.deleted, vec![ArtworkId::from("n1")]);
    assert_eq!(
        report.failed,
        vec![(
            ArtworkId::from("k1"),
            GalleryError::Http {
                status: 400,
                body: "File identifier not found".to_string(),
            }
        )]
    );
    let remaining: Vec<&str> = store
        .artworks()
        .unwrap()
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(remaining, vec!["k1"]);
    assert_eq!(store.next_id(), None);
    assert_eq!(
        store.alert().message(),
        Some("File identifier not found (Status: 400)")
    );
}

#[tokio::test]
async fn empty_title_never_reaches_the_server() {
    let mut server = Server::new_async().await;
    let upload = server
        .mock("POST", "/upload")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.png");
    std::fs::write(&path, b"png-bytes").unwrap();

    let mut submitter = deps(&server.url()).upload_submitter(&path).await.unwrap();
    let err = submitter.submit().await.unwrap_err();

    assert!(matches!(err, GalleryError::Precondition(_)));
    upload.assert_async().await;
}
