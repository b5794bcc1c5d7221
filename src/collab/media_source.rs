//! Acquiring media from outside the editor (uploads, links, generators).

use crate::common::{Error, MediaId, Result};
use crate::media::{MediaType, NewMedia};
use crate::presentation::{Outcome, SharedStore};
use async_trait::async_trait;
use tracing::{debug, warn};

/// What the user asked to bring into the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRequest {
    /// Link an existing URL
    Link {
        url: String,
        name: Option<String>,
    },
    /// Upload a local file
    Upload {
        file_name: String,
        bytes: Vec<u8>,
    },
    /// Generate an asset from a prompt
    Generate {
        prompt: String,
        media_type: MediaType,
    },
}

impl MediaRequest {
    pub fn link(url: impl Into<String>) -> Self {
        MediaRequest::Link {
            url: url.into(),
            name: None,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MediaRequest::Link { .. } => "link",
            MediaRequest::Upload { .. } => "upload",
            MediaRequest::Generate { .. } => "generate",
        }
    }
}

/// An external service that turns a request into a library entry.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Name used in error reports.
    fn name(&self) -> &str;

    /// Resolve a request. Failures should be [`Error::Collaborator`].
    async fn acquire(&self, request: &MediaRequest) -> Result<NewMedia>;
}

/// Resolves [`MediaRequest::Link`] locally by inspecting the URL.
///
/// The media type comes from the extension or hosting site; the name defaults
/// to the last path segment. Uploads and generation need a real service and
/// are refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkSource;

#[async_trait]
impl MediaSource for LinkSource {
    fn name(&self) -> &str {
        "link"
    }

    async fn acquire(&self, request: &MediaRequest) -> Result<NewMedia> {
        let MediaRequest::Link { url, name } = request else {
            return Err(Error::collaborator(
                self.name(),
                format!("cannot handle {} requests", request.kind()),
            ));
        };
        let media_type = MediaType::from_url(url).ok_or_else(|| {
            Error::collaborator(self.name(), format!("unrecognised media URL: {}", url))
        })?;
        let name = match name {
            Some(name) => name.clone(),
            None => name_from_url(url),
        };
        Ok(NewMedia::new(media_type, url.clone(), name))
    }
}

fn name_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(path)
        .to_string()
}

/// Acquire media through `source` and add it to the current library.
///
/// The entry must pass [`NewMedia::validate`]. Nothing is written to the store
/// when acquisition or validation fails.
pub async fn import_media(
    store: &SharedStore,
    source: &dyn MediaSource,
    request: &MediaRequest,
) -> Result<Outcome<MediaId>> {
    let media = source.acquire(request).await.inspect_err(|e| {
        warn!(source = source.name(), kind = request.kind(), error = %e, "media acquisition failed");
    })?;
    media.validate()?;

    let outcome = store.write().add_media_to_library(media);
    debug!(source = source.name(), outcome = %outcome, "media imported");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::IdStrategy;
    use crate::config::StoreOptions;
    use crate::presentation::DocumentStore;

    struct FailingSource;

    #[async_trait]
    impl MediaSource for FailingSource {
        fn name(&self) -> &str {
            "uploader"
        }

        async fn acquire(&self, _request: &MediaRequest) -> Result<NewMedia> {
            Err(Error::collaborator(self.name(), "connection reset"))
        }
    }

    struct NamelessSource;

    #[async_trait]
    impl MediaSource for NamelessSource {
        fn name(&self) -> &str {
            "nameless"
        }

        async fn acquire(&self, _request: &MediaRequest) -> Result<NewMedia> {
            Ok(NewMedia::new(MediaType::Image, "https://x/y.png", ""))
        }
    }

    fn shared() -> SharedStore {
        let mut store =
            DocumentStore::with_options(StoreOptions::new().with_id_strategy(IdStrategy::Sequential));
        store.create_presentation("Media");
        store.into_shared()
    }

    #[tokio::test]
    async fn test_link_import() {
        let store = shared();
        let outcome = import_media(
            &store,
            &LinkSource,
            &MediaRequest::link("https://cdn.example.com/img/logo.png?v=2"),
        )
        .await
        .unwrap();
        assert_eq!(outcome, Outcome::Applied(MediaId::from("m1")));

        let guard = store.read();
        let item = &guard.current().unwrap().media_library[0];
        assert_eq!(item.media_type, MediaType::Image);
        assert_eq!(item.name, "logo.png");
    }

    #[tokio::test]
    async fn test_link_source_refuses_uploads() {
        let request = MediaRequest::Upload {
            file_name: "a.png".to_string(),
            bytes: vec![1, 2, 3],
        };
        let err = LinkSource.acquire(&request).await.unwrap_err();
        assert!(matches!(err, Error::Collaborator { ref name, .. } if name == "link"));

        let err = LinkSource
            .acquire(&MediaRequest::link("https://example.com/page"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unrecognised"));
    }

    #[tokio::test]
    async fn test_failures_leave_store_untouched() {
        let store = shared();
        let before = store.read().current().unwrap().clone();

        let err = import_media(&store, &FailingSource, &MediaRequest::link("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Collaborator { .. }));

        let err = import_media(&store, &NamelessSource, &MediaRequest::link("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMedia(_)));

        let guard = store.read();
        assert!(std::sync::Arc::ptr_eq(guard.current().unwrap(), &before));
    }

    #[tokio::test]
    async fn test_import_without_presentation() {
        let store = DocumentStore::new().into_shared();
        let outcome = import_media(&store, &LinkSource, &MediaRequest::link("https://x/a.mp3"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::NoPresentation);
    }

    #[test]
    fn test_name_from_url() {
        assert_eq!(name_from_url("https://x/a/b.mp4#t=1"), "b.mp4");
        assert_eq!(name_from_url("https://x/dir/"), "dir");
        assert_eq!(name_from_url("clip.mp3"), "clip.mp3");
    }
}
