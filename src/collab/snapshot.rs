//! Persisting presentation snapshots outside the process.

use crate::common::{Error, PresentationId, Result};
use crate::persist;
use crate::presentation::{Presentation, SharedStore};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Somewhere snapshots can be saved to and loaded from.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Store a snapshot, replacing any earlier one with the same id.
    async fn save(&self, presentation: &Presentation) -> Result<()>;

    /// Fetch a snapshot. Fails with [`Error::SnapshotNotFound`] if none was saved.
    async fn load(&self, id: &PresentationId) -> Result<Presentation>;

    /// Ids of every saved snapshot, sorted.
    async fn list(&self) -> Result<Vec<PresentationId>>;
}

/// One `<id>.json` file per presentation in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir`, which is created on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the snapshot for `id`.
    ///
    /// Bytes outside `[A-Za-z0-9-]` are written as `_XX` hex escapes, so an id
    /// can never escape the directory and distinct ids never share a file.
    pub fn path_for(&self, id: &PresentationId) -> PathBuf {
        self.dir.join(format!("{}.json", encode_stem(id.as_str())))
    }
}

fn encode_stem(id: &str) -> String {
    let mut stem = String::with_capacity(id.len());
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("_{:02X}", byte));
        }
    }
    stem
}

/// Inverse of [`encode_stem`]; `None` for names it could not have produced.
fn decode_stem(stem: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(stem.len());
    let mut rest = stem.as_bytes();
    while let Some((&byte, tail)) = rest.split_first() {
        if byte == b'_' {
            let hex = tail.get(..2)?;
            let hex = std::str::from_utf8(hex).ok()?;
            bytes.push(u8::from_str_radix(hex, 16).ok()?);
            rest = &tail[2..];
        } else if byte.is_ascii_alphanumeric() || byte == b'-' {
            bytes.push(byte);
            rest = tail;
        } else {
            return None;
        }
    }
    String::from_utf8(bytes).ok()
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn save(&self, presentation: &Presentation) -> Result<()> {
        let json = persist::to_json_pretty(presentation)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        // write then rename so a crash never leaves a half-written snapshot
        let path = self.path_for(&presentation.id);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        debug!(presentation = %presentation.id, path = %path.display(), "snapshot saved");
        Ok(())
    }

    async fn load(&self, id: &PresentationId) -> Result<Presentation> {
        let path = self.path_for(id);
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::SnapshotNotFound(id.to_string()));
            },
            Err(e) => return Err(e.into()),
        };
        persist::from_json(&json)
    }

    async fn list(&self) -> Result<Vec<PresentationId>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match path.file_stem().and_then(|stem| stem.to_str()).and_then(decode_stem) {
                Some(id) => ids.push(PresentationId::new(id)),
                None => debug!(path = %path.display(), "skipping file with a foreign name"),
            }
        }
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(ids)
    }
}

/// Snapshots kept in memory, for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    snapshots: Arc<Mutex<HashMap<PresentationId, Presentation>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.lock().is_empty()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn save(&self, presentation: &Presentation) -> Result<()> {
        self.snapshots
            .lock()
            .insert(presentation.id.clone(), presentation.clone());
        Ok(())
    }

    async fn load(&self, id: &PresentationId) -> Result<Presentation> {
        self.snapshots
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::SnapshotNotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<PresentationId>> {
        let mut ids: Vec<_> = self.snapshots.lock().keys().cloned().collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(ids)
    }
}

/// Save the current presentation of `store`.
///
/// Returns the saved id, or `None` when there is no current presentation.
pub async fn save_current(
    store: &SharedStore,
    snapshots: &dyn SnapshotStore,
) -> Result<Option<PresentationId>> {
    // the lock is released before awaiting
    let Some(current) = store.read().current().cloned() else {
        return Ok(None);
    };
    snapshots.save(&current).await.inspect_err(|e| {
        warn!(presentation = %current.id, error = %e, "saving snapshot failed");
    })?;
    Ok(Some(current.id.clone()))
}

/// Load a saved snapshot into `store` and make it current.
pub async fn restore(
    store: &SharedStore,
    snapshots: &dyn SnapshotStore,
    id: &PresentationId,
) -> Result<PresentationId> {
    let presentation = snapshots.load(id).await?;
    Ok(store.write().load_presentation(presentation))
}
