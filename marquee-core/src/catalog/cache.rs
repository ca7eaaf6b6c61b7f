//! Process-wide catalog snapshot with modification-time invalidation.
//!
//! Each query holds its own `Arc<Catalog>` for its whole lifetime. A reload
//! swaps in a new snapshot and never touches one that is already handed out.

use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;

use super::{Catalog, FileCatalog};
use crate::errors::CatalogError;

#[derive(Debug)]
struct CachedSnapshot {
    modified: SystemTime,
    catalog: Arc<Catalog>,
}

/// Shared catalog snapshot backed by a file.
#[derive(Debug)]
pub struct CatalogCache {
    source: FileCatalog,
    state: RwLock<Option<CachedSnapshot>>,
}

impl CatalogCache {
    pub fn new(source: FileCatalog) -> Self {
        Self {
            source,
            state: RwLock::new(None),
        }
    }

    /// Returns the current snapshot, reloading if the file changed.
    ///
    /// # Errors
    /// - `CatalogError::Io` - File metadata or contents could not be read
    pub fn snapshot(&self) -> Result<Arc<Catalog>, CatalogError> {
        let modified = self.modified_time()?;

        if let Some(cached) = self.state.read().as_ref() {
            if cached.modified == modified {
                return Ok(Arc::clone(&cached.catalog));
            }
        }

        let mut state = self.state.write();
        // Another caller may have reloaded while we waited for the lock.
        if let Some(cached) = state.as_ref() {
            if cached.modified == modified {
                return Ok(Arc::clone(&cached.catalog));
            }
        }

        let catalog = Arc::new(Catalog::load(&self.source)?);
        tracing::info!(
            "Catalog reloaded from {} ({} records)",
            self.source.path().display(),
            catalog.len()
        );
        *state = Some(CachedSnapshot {
            modified,
            catalog: Arc::clone(&catalog),
        });

        Ok(catalog)
    }

    /// Drops the cached snapshot so the next access reloads.
    pub fn invalidate(&self) {
        *self.state.write() = None;
    }

    /// Checks whether a snapshot is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.state.read().is_some()
    }

    fn modified_time(&self) -> Result<SystemTime, CatalogError> {
        std::fs::metadata(self.source.path())
            .and_then(|metadata| metadata.modified())
            .map_err(|source| CatalogError::Io {
                path: self.source.path().to_path_buf(),
                source,
            })
    }
}
