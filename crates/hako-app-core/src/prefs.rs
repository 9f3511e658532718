// SPDX-License-Identifier: Apache-2.0
//! Prefs persistence seam for Hako tools.
//!
//! A thin service that serializes prefs values as JSON and delegates raw
//! storage to a [`PrefsStore`]. Adapters (filesystem, platform keystore)
//! implement the store; an in-memory store is provided for tests and
//! ephemeral tooling.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Storage port for raw prefs blobs (keyed by logical name).
pub trait PrefsStore {
    /// Load a raw prefs blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, PrefsError>;
    /// Persist a raw prefs blob.
    fn save_raw(&mut self, key: &str, data: &[u8]) -> Result<(), PrefsError>;
}

/// Error type for prefs operations.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Thin service that serializes prefs values and delegates storage to a
/// [`PrefsStore`].
pub struct PrefsService<S> {
    store: S,
}

impl<S> PrefsService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> PrefsService<S>
where
    S: PrefsStore,
{
    /// Load and deserialize a prefs value for `key`. Returns `Ok(None)` if
    /// missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, PrefsError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(PrefsError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Load a prefs value for `key`, substituting the type's default when
    /// the key is missing or empty.
    pub fn load_or_default<T>(&self, key: &str) -> Result<T, PrefsError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Serialize and persist a prefs value for `key`.
    pub fn save<T>(&mut self, key: &str, value: &T) -> Result<(), PrefsError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

/// In-memory store for tests and tools without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefsStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, PrefsError> {
        self.blobs.get(key).cloned().ok_or(PrefsError::NotFound)
    }

    fn save_raw(&mut self, key: &str, data: &[u8]) -> Result<(), PrefsError> {
        self.blobs.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}
