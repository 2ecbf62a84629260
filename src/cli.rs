use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse and manage the Inkarta art gallery.
#[derive(Debug, Parser)]
#[command(name = "inkarta", version, about)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/inkarta/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Gallery server URL, overrides the config file
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all artworks, sorted by title
    List,

    /// Download the image of an artwork
    Image {
        /// Artwork id
        id: String,

        /// Output file (defaults to <id>.bmp)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fit the image to the configured display size
        #[arg(long)]
        fit: bool,
    },

    /// Upload a new artwork
    Upload {
        /// Image file to upload
        path: PathBuf,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        artist: String,

        /// Show on a dark background
        #[arg(long)]
        dark: bool,

        /// Replace an existing artwork with the same title and artist
        #[arg(long)]
        overwrite: bool,
    },

    /// Delete artworks by their position in `list`
    Delete {
        #[arg(required = true)]
        positions: Vec<usize>,
    },

    /// Show the artwork queued for the display, or queue a new one
    Next {
        /// Artwork id to queue
        id: Option<String>,
    },
}
