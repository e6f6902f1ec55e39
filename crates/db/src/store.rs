use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::character::Document;

/// What [`JsonStore::inspect`] and [`JsonStore::init`] found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// No backing file yet; reads behave as an empty catalog.
    Missing,
    /// The backing file was absent and has just been seeded.
    Created,
    /// The backing file parsed successfully.
    Ready { records: usize },
}

/// Handle to the JSON file holding the catalog document.
///
/// Cheap to clone; clones share the same write lock so that every mutation
/// in the process goes through one load-modify-save critical section.
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    /// Fair (FIFO) lock: queued mutations run in arrival order.
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Create a handle for `path`. Performs no I/O.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Inner {
                path: path.into(),
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Load the document, degrading to an empty catalog.
    ///
    /// A missing, unreadable or unparsable file never surfaces as an error
    /// here; the cause is logged instead so the service stays available.
    pub async fn load(&self) -> Document {
        match self.read().await {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                tracing::debug!(path = %self.path().display(), "Data file missing, using empty catalog");
                Document::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Data file unreadable, using empty catalog");
                Document::default()
            }
        }
    }

    /// Report the state of the backing file without masking failures.
    pub async fn inspect(&self) -> Result<StoreStatus, StoreError> {
        Ok(match self.read().await? {
            Some(doc) => StoreStatus::Ready {
                records: doc.characters.len(),
            },
            None => StoreStatus::Missing,
        })
    }

    /// Seed the backing file with an empty document if it does not exist.
    ///
    /// An existing but corrupt file is reported, never overwritten.
    pub async fn init(&self) -> Result<StoreStatus, StoreError> {
        let _guard = self.inner.write_lock.lock().await;
        match self.read().await? {
            Some(doc) => Ok(StoreStatus::Ready {
                records: doc.characters.len(),
            }),
            None => {
                self.write(&Document::default()).await?;
                tracing::info!(path = %self.path().display(), "Created empty data file");
                Ok(StoreStatus::Created)
            }
        }
    }

    /// Overwrite the backing file with `doc`.
    ///
    /// Returns only once the new content is flushed to disk and renamed into
    /// place.
    pub async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let _guard = self.inner.write_lock.lock().await;
        self.write(doc).await
    }

    /// Run one serialized load-modify-save cycle.
    ///
    /// `apply` returns `Ok(None)` to signal "nothing changed", in which case
    /// the file is left untouched, and an error to abort without writing.
    /// Otherwise the modified document is saved and the closure's result
    /// returned after the write succeeded.
    ///
    /// Unlike [`load`](Self::load), a corrupt file fails the mutation rather
    /// than being replaced by a document derived from an empty catalog.
    ///
    /// Dropping the returned future part way can leave the write finished
    /// on disk without the caller learning about it; callers that may be
    /// cancelled (request timeouts) run it on a spawned task.
    pub async fn mutate<T, F>(&self, apply: F) -> Result<Option<T>, StoreError>
    where
        F: FnOnce(&mut Document) -> Result<Option<T>, StoreError>,
    {
        let _guard = self.inner.write_lock.lock().await;
        let mut doc = self.read().await?.unwrap_or_default();

        let Some(outcome) = apply(&mut doc)? else {
            return Ok(None);
        };

        self.write(&doc).await?;
        Ok(Some(outcome))
    }

    /// Read and parse the file. `Ok(None)` means the file does not exist.
    async fn read(&self) -> Result<Option<Document>, StoreError> {
        let path = self.path();
        let raw = match tokio::fs::read(path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Write to a sibling temp file, fsync, then rename over the target so
    /// readers never observe a half-written document.
    async fn write(&self, doc: &Document) -> Result<(), StoreError> {
        let path = self.path();
        let mut json = serde_json::to_vec_pretty(doc)?;
        json.push(b'\n');

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StoreError::io(parent))?;
        }

        let tmp = temp_path(path);
        let mut file = tokio::fs::File::create(&tmp)
            .await
            .map_err(StoreError::io(&tmp))?;
        file.write_all(&json).await.map_err(StoreError::io(&tmp))?;
        file.sync_all().await.map_err(StoreError::io(&tmp))?;
        drop(file);

        if let Err(err) = tokio::fs::rename(&tmp, path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }

        tracing::debug!(
            path = %path.display(),
            records = doc.characters.len(),
            "Data file written"
        );
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
