use std::path::Path;

use ink_app::GalleryDeps;

use super::present_alert;

pub struct UploadArgs {
    pub title: String,
    pub artist: String,
    pub dark: bool,
    pub overwrite: bool,
}

pub async fn upload(deps: &GalleryDeps, path: &Path, args: UploadArgs) -> anyhow::Result<()> {
    let mut submitter = match deps.upload_submitter(path).await {
        Ok(submitter) => submitter,
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            return Err(err.into());
        }
    };

    {
        let draft = submitter.draft_mut();
        draft.title = args.title;
        draft.artist = args.artist;
        draft.use_dark_background = args.dark;
        draft.overwrite_existing = args.overwrite;
    }

    if let Err(err) = submitter.submit().await {
        return Err(present_alert(submitter.alert_mut(), err));
    }
    println!("Uploaded {}", submitter.draft().title.trim());

    // Re-fetch so the new piece shows up with its server-assigned id.
    let mut store = deps.gallery_store();
    match store.fetch_all().await {
        Ok(artworks) => {
            println!("Gallery now has {} artworks", artworks.len());
            Ok(())
        }
        Err(err) => Err(present_alert(store.alert_mut(), err)),
    }
}
