//! graphpost - publish text, photos and videos to a page

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graphpost::{Config, ImageSource, PageCredentials, PagePoster};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphpost")]
#[command(about = "Publish text, photos and videos to a page", long_about = None)]
struct Cli {
    /// Page identifier
    #[arg(long, env = "FACEBOOK_PAGE_ID")]
    page_id: String,

    /// Page access token
    #[arg(long, env = "PAGE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Graph API version segment, e.g. v19.0
    #[arg(long, env = "GRAPH_API_VERSION")]
    api_version: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Post text, optionally with a link
    Text {
        message: String,

        #[arg(short, long)]
        link: Option<String>,
    },
    /// Post text with images (local paths or http(s) URLs); ignored when --link is set
    Post {
        message: String,

        #[arg(short, long = "image")]
        images: Vec<String>,

        #[arg(short, long)]
        link: Option<String>,
    },
    /// Upload a local video file
    Video {
        path: PathBuf,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },
}

fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::default();
    if let Some(version) = cli.api_version {
        config = config.with_api_version(version);
    }

    let poster = PagePoster::with_config(PageCredentials::new(cli.page_id, cli.access_token), config)
        .context("failed to set up poster")?;

    let response = match cli.command {
        Command::Text { message, link } => poster
            .create_text_post(&message, link.as_deref())
            .context("failed to create text post")?,
        Command::Post {
            message,
            images,
            link,
        } => {
            let images: Vec<ImageSource> = images
                .iter()
                .map(String::as_str)
                .map(ImageSource::parse)
                .collect();
            poster
                .create_post(&message, &images, link.as_deref())
                .context("failed to create post")?
        }
        Command::Video {
            path,
            title,
            description,
        } => poster
            .create_video_post(&path, title.as_deref(), description.as_deref())
            .context("failed to create video post")?,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
