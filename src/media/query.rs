//! Filtering over a media library, as the library browser presents it.

use super::item::{MediaItem, MediaType};

/// Filter and ordering for listing library entries.
///
/// # Examples
///
/// ```rust
/// use slidedeck::media::{MediaQuery, MediaType};
///
/// let query = MediaQuery::new().of_type(MediaType::Image).matching("logo");
/// assert!(query.apply(&[]).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MediaQuery {
    media_type: Option<MediaType>,
    needle: Option<String>,
    newest_first: bool,
}

impl MediaQuery {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only entries of this type.
    pub fn of_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// Only entries whose name contains `needle`, case-insensitively.
    pub fn matching(mut self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.needle = if needle.trim().is_empty() {
            None
        } else {
            Some(needle.to_lowercase())
        };
        self
    }

    /// Order by `date_added`, most recent first. Insertion order otherwise.
    pub fn newest_first(mut self, newest_first: bool) -> Self {
        self.newest_first = newest_first;
        self
    }

    pub fn matches(&self, item: &MediaItem) -> bool {
        if let Some(ty) = self.media_type
            && item.media_type != ty
        {
            return false;
        }
        match &self.needle {
            Some(needle) => item.name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    pub fn apply<'a>(&self, library: &'a [MediaItem]) -> Vec<&'a MediaItem> {
        let mut hits: Vec<&MediaItem> = library.iter().filter(|item| self.matches(item)).collect();
        if self.newest_first {
            // stable, so ties keep insertion order
            hits.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MediaId;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, ty: MediaType, name: &str, secs: i64) -> MediaItem {
        MediaItem {
            id: MediaId::from(id),
            media_type: ty,
            url: format!("https://x/{}", id),
            name: name.to_string(),
            thumbnail: None,
            date_added: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    fn library() -> Vec<MediaItem> {
        vec![
            entry("m1", MediaType::Image, "Company Logo", 10),
            entry("m2", MediaType::Video, "Intro clip", 30),
            entry("m3", MediaType::Image, "Team photo", 20),
        ]
    }

    #[test]
    fn test_filter_by_type() {
        let lib = library();
        let hits = MediaQuery::new().of_type(MediaType::Image).apply(&lib);
        let ids: Vec<&str> = hits.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m3"]);
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let lib = library();
        let hits = MediaQuery::new().matching("LOGO").apply(&lib);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "m1");
        // blank needle matches everything
        assert_eq!(MediaQuery::new().matching("  ").apply(&lib).len(), 3);
    }

    #[test]
    fn test_newest_first() {
        let lib = library();
        let hits = MediaQuery::new().newest_first(true).apply(&lib);
        let ids: Vec<&str> = hits.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m3", "m1"]);
    }
}
