use std::path::PathBuf;

use ink_app::{GalleryDeps, GalleryStore};
use ink_core::{Artwork, ArtworkId, ImageSize};

use super::present_alert;

async fn fetched_store(deps: &GalleryDeps) -> anyhow::Result<GalleryStore> {
    let mut store = deps.gallery_store();
    if let Err(err) = store.fetch_all().await {
        return Err(present_alert(store.alert_mut(), err));
    }
    Ok(store)
}

fn print_artworks(artworks: &[Artwork], store: &GalleryStore) {
    if artworks.is_empty() {
        println!("No artwork available");
        return;
    }
    for (position, artwork) in artworks.iter().enumerate() {
        let marker = if store.is_next(&artwork.id) { "*" } else { " " };
        let background = if artwork.dark_background { "dark" } else { "light" };
        println!(
            "{} [{}] {} / {} ({}, id {})",
            marker, position, artwork.title, artwork.artist, background, artwork.id
        );
    }
}

pub async fn list(deps: &GalleryDeps) -> anyhow::Result<()> {
    let store = fetched_store(deps).await?;
    print_artworks(store.artworks().unwrap_or_default(), &store);
    Ok(())
}

pub async fn image(
    deps: &GalleryDeps,
    id: String,
    output: Option<PathBuf>,
    size: Option<ImageSize>,
) -> anyhow::Result<()> {
    let id = ArtworkId::from(id);
    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.bmp", id)));

    let mut store = deps.gallery_store();
    let bytes = match store.load_image(&id, size).await {
        Ok(bytes) => bytes,
        Err(err) => return Err(present_alert(store.alert_mut(), err)),
    };

    tokio::fs::write(&output, &bytes).await?;
    println!("Saved {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

pub async fn delete(deps: &GalleryDeps, positions: Vec<usize>) -> anyhow::Result<()> {
    let mut store = fetched_store(deps).await?;

    let report = match store.delete(&positions).await {
        Ok(report) => report,
        Err(err) => return Err(present_alert(store.alert_mut(), err)),
    };

    for id in &report.deleted {
        println!("Deleted {}", id);
    }
    for (id, err) in &report.failed {
        tracing::debug!(artwork_id = %id, error = %err, "Delete failed");
    }
    if let Some((_, err)) = report.failed.last().cloned() {
        return Err(present_alert(store.alert_mut(), err));
    }
    Ok(())
}

pub async fn next(deps: &GalleryDeps, id: Option<String>) -> anyhow::Result<()> {
    let mut store = deps.gallery_store();

    match id {
        Some(id) => {
            let id = ArtworkId::from(id);
            if let Err(err) = store.set_next(&id).await {
                return Err(present_alert(store.alert_mut(), err));
            }
            println!("Queued {} for the display", id);
        }
        None => match store.refresh_next().await {
            Ok(Some(id)) => println!("{}", id),
            Ok(None) => println!("Nothing queued"),
            Err(err) => return Err(present_alert(store.alert_mut(), err)),
        },
    }
    Ok(())
}
