//! Media library entries.

use crate::common::{Error, MediaId, Result};
use crate::presentation::ContentType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image (png, jpg, svg, ...)
    Image,
    /// Video file or streaming page
    Video,
    /// Audio file (mp3, wav, ...)
    Audio,
}

impl MediaType {
    /// The content type an inserted copy of this media gets.
    pub fn content_type(&self) -> ContentType {
        match self {
            MediaType::Image => ContentType::Image,
            MediaType::Video => ContentType::Video,
            MediaType::Audio => ContentType::Audio,
        }
    }

    /// The media type matching a content type, if it is a media type at all.
    pub fn from_content_type(content_type: ContentType) -> Option<Self> {
        match content_type {
            ContentType::Image => Some(MediaType::Image),
            ContentType::Video => Some(MediaType::Video),
            ContentType::Audio => Some(MediaType::Audio),
            _ => None,
        }
    }

    /// Get the MIME type prefix for this media type.
    pub fn mime_prefix(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }

    /// Detect the media type from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" | "avif" => {
                Some(MediaType::Image)
            },
            "mp4" | "webm" | "mov" | "m4v" | "ogv" | "avi" | "wmv" => Some(MediaType::Video),
            "mp3" | "wav" | "ogg" | "oga" | "m4a" | "aac" | "flac" | "wma" => {
                Some(MediaType::Audio)
            },
            _ => None,
        }
    }

    /// Guess the media type of a URL from its path extension.
    ///
    /// Query strings and fragments are ignored; well-known video hosting pages
    /// count as video.
    pub fn from_url(url: &str) -> Option<Self> {
        let lower = url.to_ascii_lowercase();
        if lower.contains("youtube.com/") || lower.contains("youtu.be/") || lower.contains("vimeo.com/")
        {
            return Some(MediaType::Video);
        }
        if lower.starts_with("data:") {
            let mime = lower.trim_start_matches("data:");
            return [MediaType::Image, MediaType::Video, MediaType::Audio]
                .into_iter()
                .find(|ty| mime.starts_with(ty.mime_prefix()));
        }

        let path = url.split(['?', '#']).next().unwrap_or(url);
        let file = path.rsplit('/').next().unwrap_or(path);
        let (_, ext) = file.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_prefix())
    }
}

/// An entry of a presentation's media library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: MediaId,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub name: String,
    /// Preview image; only meaningful for images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub date_added: DateTime<Utc>,
}

/// A media entry before the library assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedia {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl NewMedia {
    pub fn new(media_type: MediaType, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            media_type,
            url: url.into(),
            name: name.into(),
            thumbnail: None,
        }
    }

    /// Attach a thumbnail. Ignored for anything but images.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        if self.media_type == MediaType::Image {
            self.thumbnail = Some(thumbnail.into());
        }
        self
    }

    /// Check the library form rules: `url` and `name` must be non-empty.
    ///
    /// The document store accepts empty strings; this is for the layer that
    /// collects the entry from a user or a collaborator.
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::InvalidMedia("url must not be empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(Error::InvalidMedia("name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Turn into a library entry.
    pub(crate) fn into_item(self, id: MediaId, date_added: DateTime<Utc>) -> MediaItem {
        let thumbnail = match self.media_type {
            MediaType::Image => self.thumbnail,
            _ => None,
        };
        MediaItem {
            id,
            media_type: self.media_type,
            url: self.url,
            name: self.name,
            thumbnail,
            date_added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_url() {
        assert_eq!(MediaType::from_url("https://x/y.png"), Some(MediaType::Image));
        assert_eq!(
            MediaType::from_url("https://cdn.example.com/clip.MP4?sig=abc#t=3"),
            Some(MediaType::Video)
        );
        assert_eq!(MediaType::from_url("/sounds/intro.mp3"), Some(MediaType::Audio));
        assert_eq!(
            MediaType::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some(MediaType::Video)
        );
        assert_eq!(
            MediaType::from_url("data:image/png;base64,AAAA"),
            Some(MediaType::Image)
        );
        assert_eq!(MediaType::from_url("https://example.com/page"), None);
        assert_eq!(MediaType::from_url("https://example.com/doc.pdf"), None);
    }

    #[test]
    fn test_validate() {
        assert!(NewMedia::new(MediaType::Image, "https://x/y.png", "Logo").validate().is_ok());
        let err = NewMedia::new(MediaType::Image, "", "Logo").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidMedia(_)));
        assert!(NewMedia::new(MediaType::Audio, "a.mp3", "  ").validate().is_err());
    }

    #[test]
    fn test_thumbnail_only_for_images() {
        let video = NewMedia::new(MediaType::Video, "v.mp4", "Clip").with_thumbnail("t.png");
        assert!(video.thumbnail.is_none());
        let image = NewMedia::new(MediaType::Image, "i.png", "Pic").with_thumbnail("t.png");
        assert_eq!(image.thumbnail.as_deref(), Some("t.png"));
    }

    #[test]
    fn test_content_type_mapping() {
        for ty in [MediaType::Image, MediaType::Video, MediaType::Audio] {
            assert_eq!(MediaType::from_content_type(ty.content_type()), Some(ty));
        }
        assert_eq!(MediaType::from_content_type(ContentType::Table), None);
    }
}
