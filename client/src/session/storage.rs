//! Persistence of the logged-in identity.
//!
//! A single identity string under a fixed key, mirroring the mobile app's
//! key-value store. The file is a single-writer resource: the startup read
//! happens once (enforced by `Resolve` idempotence) before any login or
//! logout touches it.

use crate::types::UserId;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

/// Identity storage result
pub type StorageResult<T> = Result<T, IdentityStoreError>;

/// Boxed future returned by [`IdentityStore`] methods
pub type StorageFuture<T> = Pin<Box<dyn Future<Output = StorageResult<T>> + Send>>;

/// Errors from identity persistence.
///
/// The session guard swallows these into `Anonymous` on resolve (fail-open)
/// and traces them on save/clear; they never abort a login.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityStoreError {
    /// Filesystem failure
    #[error("identity storage I/O failure: {0}")]
    Io(String),
    /// The stored file exists but does not decode
    #[error("persisted identity is corrupt")]
    Corrupt,
}

/// Load/save/clear of the single persisted identity.
pub trait IdentityStore: Send + Sync {
    /// Read the persisted identity, `None` when nobody is logged in.
    ///
    /// # Errors
    ///
    /// `Io` or `Corrupt`; callers treat both as "nobody logged in".
    fn load(&self) -> StorageFuture<Option<UserId>>;

    /// Persist an identity, replacing any previous one.
    ///
    /// # Errors
    ///
    /// `Io` on write failure.
    fn save(&self, identity: UserId) -> StorageFuture<()>;

    /// Remove the persisted identity. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// `Io` on removal failure.
    fn clear(&self) -> StorageFuture<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedIdentity {
    username: String,
}

/// Identity persisted as a small JSON file.
#[derive(Clone, Debug)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    /// Store backed by the given file path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Arc the store behind the trait object
    #[must_use]
    pub fn into_shared(self) -> Arc<dyn IdentityStore> {
        Arc::new(self)
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> StorageFuture<Option<UserId>> {
        let path = self.path.clone();
        Box::pin(async move {
            let contents = match tokio::fs::read_to_string(&path).await {
                Ok(contents) => contents,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                Err(err) => return Err(IdentityStoreError::Io(err.to_string())),
            };

            let persisted: PersistedIdentity =
                serde_json::from_str(contents.trim()).map_err(|_| IdentityStoreError::Corrupt)?;
            Ok(Some(UserId::new(persisted.username)))
        })
    }

    fn save(&self, identity: UserId) -> StorageFuture<()> {
        let path = self.path.clone();
        Box::pin(async move {
            let persisted = PersistedIdentity {
                username: identity.as_str().to_string(),
            };
            let contents = serde_json::to_string(&persisted)
                .map_err(|err| IdentityStoreError::Io(err.to_string()))?;

            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| IdentityStoreError::Io(err.to_string()))?;
            }
            tokio::fs::write(&path, contents)
                .await
                .map_err(|err| IdentityStoreError::Io(err.to_string()))
        })
    }

    fn clear(&self) -> StorageFuture<()> {
        let path = self.path.clone();
        Box::pin(async move {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(IdentityStoreError::Io(err.to_string())),
            }
        })
    }
}

/// In-memory identity store for tests.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    slot: Mutex<Option<UserId>>,
    fail: bool,
}

impl MemoryIdentityStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a logged-in identity
    #[must_use]
    pub fn with_identity(username: &str) -> Self {
        Self {
            slot: Mutex::new(Some(UserId::new(username))),
            fail: false,
        }
    }

    /// Store where every operation fails, for fail-open tests
    #[must_use]
    pub fn failing() -> Self {
        Self {
            slot: Mutex::new(None),
            fail: true,
        }
    }

    /// Arc the store behind the trait object
    #[must_use]
    pub fn shared(self) -> Arc<dyn IdentityStore> {
        Arc::new(self)
    }

    /// Current stored identity, for assertions
    #[must_use]
    pub fn current(&self) -> Option<UserId> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> StorageFuture<Option<UserId>> {
        let result = if self.fail {
            Err(IdentityStoreError::Io("scripted failure".to_string()))
        } else {
            Ok(self.current())
        };
        Box::pin(async move { result })
    }

    fn save(&self, identity: UserId) -> StorageFuture<()> {
        let result = if self.fail {
            Err(IdentityStoreError::Io("scripted failure".to_string()))
        } else {
            *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(identity);
            Ok(())
        };
        Box::pin(async move { result })
    }

    fn clear(&self) -> StorageFuture<()> {
        let result = if self.fail {
            Err(IdentityStoreError::Io("scripted failure".to_string()))
        } else {
            *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
            Ok(())
        };
        Box::pin(async move { result })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileIdentityStore::new(dir.path().join("identity.json"));

        assert_eq!(store.load().await.unwrap(), None);

        store.save(UserId::new("budi")).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(UserId::new("budi")));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        // Clearing twice is fine.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_is_reported_not_misread() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identity.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = FileIdentityStore::new(path);
        assert!(matches!(
            store.load().await,
            Err(IdentityStoreError::Corrupt)
        ));
    }

    #[tokio::test]
    async fn memory_store_failing_mode() {
        let store = MemoryIdentityStore::failing();
        assert!(store.load().await.is_err());
        assert!(store.save(UserId::new("budi")).await.is_err());
    }
}
