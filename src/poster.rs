use crate::client::{create_graph_client, create_upload_client, Config};
use crate::credentials::PageCredentials;
use crate::endpoints::Endpoints;
use crate::error::{PostError, Result};
use crate::media::{file_part, ImageSource};
use crate::request::{FeedPost, PhotoUpload, RequestBody, VideoPost, FILE_FIELD};
use crate::response::{GraphErrorBody, GraphResponse};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, warn};
use url::Url;

/// Publishes photos, videos and feed posts to a single page.
///
/// Holds no mutable state; one poster can serve calls from several threads.
/// Each operation logs its own failure and returns it as `Err`.
pub struct PagePoster {
    credentials: PageCredentials,
    config: Config,
    endpoints: Endpoints,
    /// Client for feed posts and URL photo uploads
    client: Client,
    /// Client for multipart uploads
    upload_client: Client,
}

impl PagePoster {
    /// Create a poster targeting the public Graph API hosts
    pub fn new(credentials: PageCredentials) -> Result<Self> {
        Self::with_config(credentials, Config::default())
    }

    /// Create a poster with custom transport configuration
    pub fn with_config(credentials: PageCredentials, config: Config) -> Result<Self> {
        let endpoints = Endpoints::new(&config, &credentials.page_id)?;
        Ok(PagePoster {
            client: create_graph_client(&config)?,
            upload_client: create_upload_client(&config)?,
            credentials,
            config,
            endpoints,
        })
    }

    /// Page this poster publishes to
    pub fn page_id(&self) -> &str {
        &self.credentials.page_id
    }

    /// Transport configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// URL for unpublished photo uploads
    pub fn photo_endpoint(&self) -> &str {
        self.endpoints.photos.as_str()
    }

    /// URL for video uploads
    pub fn video_endpoint(&self) -> &str {
        self.endpoints.videos.as_str()
    }

    /// URL for feed posts
    pub fn feed_endpoint(&self) -> &str {
        self.endpoints.feed.as_str()
    }

    /// Upload an image without publishing it to the feed. The returned `id`
    /// can be attached to a later feed post.
    pub fn upload_image(
        &self,
        source: &ImageSource,
        description: Option<&str>,
    ) -> Result<GraphResponse> {
        self.send_photo(source, description)
            .inspect_err(|e| error!(image = %source, error = %e, "error uploading image"))
    }

    /// Create a feed post with text and either images or a link.
    ///
    /// When `link` is set the images are ignored and nothing is uploaded.
    /// Otherwise each image is uploaded in order; failed uploads are skipped
    /// and the rest are attached as `attached_media[i]`.
    pub fn create_post(
        &self,
        text: &str,
        images: &[ImageSource],
        link: Option<&str>,
    ) -> Result<GraphResponse> {
        let mut post = FeedPost::new(text).with_images(images.iter().cloned());
        if let Some(link) = link {
            post = post.with_link(link);
        }
        self.publish(&post)
    }

    /// Create a feed post from a prepared [`FeedPost`]
    pub fn publish(&self, post: &FeedPost) -> Result<GraphResponse> {
        if post.link.is_some() && !post.images.is_empty() {
            debug!(
                images = post.images.len(),
                "link set, skipping image uploads"
            );
        }

        let media_ids = self.upload_attachments(post.pending_uploads());
        let body = post.body(&self.credentials.access_token, &media_ids);

        self.submit(&self.endpoints.feed, body).inspect_err(|e| {
            error!(
                attached = media_ids.len(),
                error = %e,
                "error creating post"
            )
        })
    }

    /// Create a text post, optionally with a link
    pub fn create_text_post(&self, text: &str, link: Option<&str>) -> Result<GraphResponse> {
        self.create_post(text, &[], link)
    }

    /// Upload a local video file with an optional title and description
    pub fn create_video_post(
        &self,
        path: impl AsRef<Path>,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<GraphResponse> {
        let path = path.as_ref();
        let mut video = VideoPost::new(path);
        if let Some(title) = title {
            video = video.with_title(title);
        }
        if let Some(description) = description {
            video = video.with_description(description);
        }

        self.submit(&self.endpoints.videos, video.body(&self.credentials.access_token))
            .inspect_err(|e| {
                error!(video = %path.display(), error = %e, "error creating video post")
            })
    }

    /// Photo upload without logging, shared by `upload_image` and attachments
    fn send_photo(
        &self,
        source: &ImageSource,
        description: Option<&str>,
    ) -> Result<GraphResponse> {
        let mut upload = PhotoUpload::new(source.clone());
        if let Some(description) = description {
            upload = upload.with_message(description);
        }
        self.submit(&self.endpoints.photos, upload.body(&self.credentials.access_token))
    }

    /// Upload images sequentially and collect the ids that came back.
    /// Order follows the input so attachment indices match it.
    fn upload_attachments(&self, images: &[ImageSource]) -> Vec<String> {
        images
            .iter()
            .filter_map(|image| match self.send_photo(image, None) {
                Ok(response) => {
                    let id = response.id();
                    if id.is_none() {
                        warn!(image = %image, "upload response has no id, not attaching");
                    }
                    id
                }
                Err(e) => {
                    warn!(image = %image, error = %e, "skipping image that failed to upload");
                    None
                }
            })
            .collect()
    }

    fn submit(&self, url: &Url, body: RequestBody) -> Result<GraphResponse> {
        let request = match body {
            RequestBody::Form(fields) => self.client.post(url.as_str()).form(&fields),
            RequestBody::Multipart { fields, file } => {
                // Opened here so the handle is dropped with the request on every path
                let part = file_part(&file)?;
                let form = fields
                    .into_iter()
                    .fold(Form::new(), |form, (name, value)| form.text(name, value))
                    .part(FILE_FIELD, part);
                self.upload_client.post(url.as_str()).multipart(form)
            }
        };

        let start = Instant::now();
        let http_response = request.send()?;
        let status = http_response.status();
        let body = http_response.bytes()?;

        debug!(
            endpoint = url.path(),
            status = status.as_u16(),
            elapsed = ?start.elapsed(),
            "graph request finished"
        );

        parse_response(status, &body)
    }
}

/// Turn a status and raw body into a response or a typed error
pub(crate) fn parse_response(status: StatusCode, body: &[u8]) -> Result<GraphResponse> {
    if !status.is_success() {
        if let Ok(graph_error) = serde_json::from_slice::<GraphErrorBody>(body) {
            return Err(PostError::from_graph_error(status.as_u16(), graph_error));
        }
        return Err(PostError::Http {
            status: status.as_u16(),
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    let value: Value = serde_json::from_slice(body)?;

    // Some edges answer 200 with an error envelope
    if value.get("error").is_some_and(Value::is_object) {
        let graph_error: GraphErrorBody = serde_json::from_value(value)?;
        return Err(PostError::from_graph_error(status.as_u16(), graph_error));
    }

    GraphResponse::try_from(value).map_err(|other| PostError::UnexpectedResponse(other.to_string()))
}
