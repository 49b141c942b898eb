//! # graphpost - publish to a Graph API page from Rust
//!
//! A small blocking client that assembles the HTTP requests needed to publish
//! photos, videos, text and link posts to a single page.
//!
//! ## Features
//!
//! - Unpublished photo uploads from local files or remote URLs
//! - Feed posts with attached photos or a link preview
//! - Video uploads from local files
//! - Typed errors that keep the Graph API error code and trace id
//!
//! ## Basic Usage
//!
//! ```no_run
//! use graphpost::{ImageSource, PageCredentials, PagePoster};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let poster = PagePoster::new(PageCredentials::from_env()?)?;
//!
//!     let response = poster.create_post(
//!         "Fresh out of the oven",
//!         &[
//!             ImageSource::file("bread.jpg"),
//!             ImageSource::url("https://cdn.example.com/crumb.jpg"),
//!         ],
//!         None,
//!     )?;
//!
//!     println!("Post: {:?}", response.id());
//!     Ok(())
//! }
//! ```
//!
//! ## Links take precedence
//!
//! A post with a link never uploads or attaches images; the API renders a
//! preview of the linked page instead.
//!
//! ```no_run
//! use graphpost::{PageCredentials, PagePoster};
//!
//! let poster = PagePoster::new(PageCredentials::new("1234567890", "page-token"))?;
//! poster.create_text_post("Read the changelog", Some("https://example.com/changelog"))?;
//! # Ok::<(), graphpost::PostError>(())
//! ```

pub mod client;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod media;
pub mod poster;
pub mod request;
pub mod response;

// Re-export main types for convenience
pub use client::Config;
pub use credentials::PageCredentials;
pub use endpoints::Endpoints;
pub use error::{PostError, Result};
pub use media::ImageSource;
pub use poster::PagePoster;
pub use request::{FeedPost, PhotoUpload, RequestBody, VideoPost};
pub use response::GraphResponse;
