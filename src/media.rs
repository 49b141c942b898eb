use crate::error::{PostError, Result};
use reqwest::blocking::multipart::Part;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where an image comes from. Decided by the caller, never guessed from
/// filesystem state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image file on the local filesystem, sent as multipart content
    LocalFile(PathBuf),
    /// Publicly reachable image URL the API fetches itself
    RemoteUrl(String),
}

impl ImageSource {
    /// Image read from a local file
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageSource::LocalFile(path.into())
    }

    /// Image fetched by the API from a URL
    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::RemoteUrl(url.into())
    }

    /// Classify a user-supplied string by its scheme: `http://` and
    /// `https://` are URLs, everything else is a local path.
    pub fn parse(input: &str) -> Self {
        let lower = input.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::RemoteUrl(input.trim().to_string())
        } else {
            ImageSource::LocalFile(PathBuf::from(input))
        }
    }

    /// Check whether the image is uploaded from disk
    pub fn is_local(&self) -> bool {
        matches!(self, ImageSource::LocalFile(_))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::LocalFile(path) => write!(f, "{}", path.display()),
            ImageSource::RemoteUrl(url) => f.write_str(url),
        }
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::LocalFile(path.to_path_buf())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::LocalFile(path)
    }
}

/// Open a file as a multipart part. The handle lives inside the part and is
/// closed when the request that consumes it is dropped.
pub fn file_part(path: &Path) -> Result<Part> {
    Part::file(path).map_err(|e| PostError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_url() {
        assert_eq!(
            ImageSource::parse("https://cdn.example/cat.jpg"),
            ImageSource::url("https://cdn.example/cat.jpg")
        );
        assert_eq!(
            ImageSource::parse("HTTP://cdn.example/cat.jpg"),
            ImageSource::url("HTTP://cdn.example/cat.jpg")
        );
    }

    #[test]
    fn test_parse_path() {
        // Existence is not consulted
        assert_eq!(
            ImageSource::parse("does/not/exist.jpg"),
            ImageSource::file("does/not/exist.jpg")
        );
        assert_eq!(
            ImageSource::parse("ftp.example.jpg"),
            ImageSource::file("ftp.example.jpg")
        );
        assert!(ImageSource::parse("a.png").is_local());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            ImageSource::from(Path::new("a.jpg")),
            ImageSource::file("a.jpg")
        );
        assert_eq!(
            ImageSource::from(PathBuf::from("dir/b.png")),
            ImageSource::LocalFile(PathBuf::from("dir/b.png"))
        );
    }

    #[test]
    fn test_file_part_missing() {
        let err = file_part(Path::new("/definitely/missing/video.mp4")).unwrap_err();
        assert!(matches!(err, PostError::Io { .. }));
    }

    #[test]
    fn test_file_part_existing() {
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.write_all(b"jpeg-bytes").unwrap();
        assert!(file_part(file.path()).is_ok());
    }
}
