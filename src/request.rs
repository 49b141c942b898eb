//! Per-call request values and the bodies they encode to.
//!
//! Building a body is kept separate from sending it, so the exact fields a
//! call will submit can be inspected without a network round trip.

use crate::media::ImageSource;
use std::path::PathBuf;

/// Name of the multipart part carrying file content.
/// The Graph API documents `source`; older scripts posted the part as `file`.
pub const FILE_FIELD: &str = "source";

/// Encoded request body, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded` fields
    Form(Vec<(String, String)>),
    /// `multipart/form-data` text fields plus one file part
    Multipart {
        fields: Vec<(String, String)>,
        file: PathBuf,
    },
}

impl RequestBody {
    /// Text fields in submission order
    pub fn fields(&self) -> &[(String, String)] {
        match self {
            RequestBody::Form(fields) => fields,
            RequestBody::Multipart { fields, .. } => fields,
        }
    }

    /// First value of a field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a field is present
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// File sent as the multipart file part, if any
    pub fn file(&self) -> Option<&PathBuf> {
        match self {
            RequestBody::Form(_) => None,
            RequestBody::Multipart { file, .. } => Some(file),
        }
    }
}

fn token_field(access_token: &str) -> (String, String) {
    ("access_token".to_string(), access_token.to_string())
}

/// Unpublished photo upload, later attachable to a feed post by id
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub source: ImageSource,
    pub message: Option<String>,
}

impl PhotoUpload {
    /// Create an upload with no message
    pub fn new(source: ImageSource) -> Self {
        PhotoUpload {
            source,
            message: None,
        }
    }

    /// Set the photo description
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Encode the upload: multipart for local files, form fields for URLs
    pub fn body(&self, access_token: &str) -> RequestBody {
        let mut fields = vec![token_field(access_token)];
        if let Some(ref message) = self.message {
            fields.push(("message".to_string(), message.clone()));
        }
        fields.push(("published".to_string(), "false".to_string()));

        match &self.source {
            ImageSource::LocalFile(path) => RequestBody::Multipart {
                fields,
                file: path.clone(),
            },
            ImageSource::RemoteUrl(url) => {
                fields.push(("url".to_string(), url.clone()));
                RequestBody::Form(fields)
            }
        }
    }
}

/// Feed post with optional link or attached images.
///
/// A link takes precedence: when one is set the images are neither uploaded
/// nor attached, and the API builds a link preview instead.
#[derive(Debug, Clone, Default)]
pub struct FeedPost {
    pub message: String,
    pub images: Vec<ImageSource>,
    pub link: Option<String>,
}

impl FeedPost {
    /// Create a text-only post
    pub fn new(message: impl Into<String>) -> Self {
        FeedPost {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Append images to attach, in order
    pub fn with_images<I>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = ImageSource>,
    {
        self.images.extend(images);
        self
    }

    /// Set the link; images are then ignored
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Images that have to be uploaded before the post is created
    pub fn pending_uploads(&self) -> &[ImageSource] {
        if self.link.is_some() {
            &[]
        } else {
            &self.images
        }
    }

    /// Encode the feed body. `media_ids` are the ids of uploaded photos in
    /// attachment order; they are dropped when a link is set.
    pub fn body(&self, access_token: &str, media_ids: &[String]) -> RequestBody {
        let mut fields = vec![
            token_field(access_token),
            ("message".to_string(), self.message.clone()),
        ];

        match self.link {
            Some(ref link) => fields.push(("link".to_string(), link.clone())),
            None => {
                for (index, id) in media_ids.iter().enumerate() {
                    fields.push((
                        format!("attached_media[{}]", index),
                        serde_json::json!({ "media_fbid": id }).to_string(),
                    ));
                }
            }
        }

        RequestBody::Form(fields)
    }
}

/// Video upload from a local file
#[derive(Debug, Clone)]
pub struct VideoPost {
    pub path: PathBuf,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl VideoPost {
    /// Create a video upload with no title or description
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VideoPost {
            path: path.into(),
            title: None,
            description: None,
        }
    }

    /// Set the video title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the video description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Encode the upload as multipart with the video as the file part
    pub fn body(&self, access_token: &str) -> RequestBody {
        let mut fields = vec![token_field(access_token)];
        if let Some(ref title) = self.title {
            fields.push(("title".to_string(), title.clone()));
        }
        if let Some(ref description) = self.description {
            fields.push(("description".to_string(), description.clone()));
        }
        RequestBody::Multipart {
            fields,
            file: self.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_local_file_body() {
        let body = PhotoUpload::new(ImageSource::file("a.jpg")).body("tok");
        assert_eq!(body.file(), Some(&PathBuf::from("a.jpg")));
        assert_eq!(body.field("access_token"), Some("tok"));
        assert_eq!(body.field("published"), Some("false"));
        assert!(!body.has_field("url"));
        assert!(!body.has_field("message"));
    }

    #[test]
    fn test_photo_remote_url_body() {
        let body = PhotoUpload::new(ImageSource::url("https://cdn.example/a.jpg"))
            .with_message("caption")
            .body("tok");
        assert!(body.file().is_none());
        assert_eq!(body.field("url"), Some("https://cdn.example/a.jpg"));
        assert_eq!(body.field("message"), Some("caption"));
        assert_eq!(body.field("published"), Some("false"));
    }

    #[test]
    fn test_feed_body_with_media() {
        let post = FeedPost::new("hello")
            .with_images([ImageSource::file("a.jpg"), ImageSource::file("b.jpg")]);
        let body = post.body("tok", &["111".to_string(), "222".to_string()]);

        assert_eq!(
            body.fields(),
            &[
                ("access_token".to_string(), "tok".to_string()),
                ("message".to_string(), "hello".to_string()),
                (
                    "attached_media[0]".to_string(),
                    r#"{"media_fbid":"111"}"#.to_string()
                ),
                (
                    "attached_media[1]".to_string(),
                    r#"{"media_fbid":"222"}"#.to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_feed_link_suppresses_images() {
        let post = FeedPost::new("hello")
            .with_images([ImageSource::file("a.jpg")])
            .with_link("https://x.com");

        assert!(post.pending_uploads().is_empty());

        let body = post.body("tok", &["111".to_string()]);
        assert_eq!(body.field("link"), Some("https://x.com"));
        assert!(body
            .fields()
            .iter()
            .all(|(k, _)| !k.starts_with("attached_media")));
    }

    #[test]
    fn test_feed_pending_uploads_keep_order() {
        let post = FeedPost::new("hello").with_images([
            ImageSource::file("b.jpg"),
            ImageSource::url("https://cdn.example/a.jpg"),
        ]);
        assert_eq!(
            post.pending_uploads(),
            &[
                ImageSource::file("b.jpg"),
                ImageSource::url("https://cdn.example/a.jpg")
            ]
        );
    }

    #[test]
    fn test_text_only_feed_body() {
        let body = FeedPost::new("just text").body("tok", &[]);
        assert_eq!(body.fields().len(), 2);
        assert!(!body.has_field("link"));
    }

    #[test]
    fn test_video_body() {
        let body = VideoPost::new("clip.mp4").with_title("Launch").body("tok");
        assert_eq!(body.file(), Some(&PathBuf::from("clip.mp4")));
        assert_eq!(body.field("title"), Some("Launch"));
        assert!(!body.has_field("description"));
    }
}
