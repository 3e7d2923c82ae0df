//! The serialize/deserialize boundary for state that outlives a session.
//!
//! Only statistics and settings are persisted; the live session never is.
//! Storage itself is an opaque, best-effort key-value collaborator behind
//! the [`BlobStore`] trait — the engine neither knows nor cares whether
//! the bytes land in a file, a browser store, or a test vector.
//!
//! A corrupt or missing blob is not an error worth surfacing to the
//! player: loading falls back to defaults (`decode_or_default`).

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::GameSettings;
use crate::stats::GameStatistics;

/// The persisted subset: statistics plus settings, nothing else.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedProfile {
    /// Lifetime statistics.
    pub stats: GameStatistics,

    /// Gameplay settings.
    pub settings: GameSettings,
}

impl SavedProfile {
    /// Encode to the stored JSON blob.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        // Serializing a plain struct of integers and enums cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Decode a stored blob.
    pub fn try_decode(bytes: &[u8]) -> Result<Self, ProfileError> {
        serde_json::from_slice(bytes).map_err(ProfileError::Corrupt)
    }

    /// Decode a stored blob, falling back to defaults on corruption.
    #[must_use]
    pub fn decode_or_default(bytes: &[u8]) -> Self {
        match Self::try_decode(bytes) {
            Ok(profile) => profile,
            Err(err) => {
                warn!("saved profile unreadable, starting fresh: {err}");
                Self::default()
            }
        }
    }
}

/// Failure decoding a saved profile.
#[derive(Debug)]
pub enum ProfileError {
    /// The stored blob was not a valid profile.
    Corrupt(serde_json::Error),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::Corrupt(err) => write!(f, "corrupt saved profile: {err}"),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileError::Corrupt(err) => Some(err),
        }
    }
}

/// Opaque blob storage collaborator.
///
/// Implementations are best-effort: a failed save is reported but the
/// game keeps running on in-memory state.
pub trait BlobStore {
    /// Load the stored blob, `None` if nothing has been saved yet.
    fn load(&mut self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Persist the blob, replacing any previous one.
    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Failure talking to a blob store.
#[derive(Debug)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Create an error with a human-readable description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "blob store error: {}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// In-memory store for hosts without durable storage and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blob: Option<Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a blob.
    #[must_use]
    pub fn with_blob(blob: Vec<u8>) -> Self {
        Self { blob: Some(blob) }
    }
}

impl BlobStore for MemoryStore {
    fn load(&mut self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        self.blob = Some(bytes.to_vec());
        Ok(())
    }
}

/// Load a profile from a store, defaulting when absent or unreadable.
pub fn load_profile(store: &mut dyn BlobStore) -> SavedProfile {
    match store.load() {
        Ok(Some(bytes)) => SavedProfile::decode_or_default(&bytes),
        Ok(None) => SavedProfile::default(),
        Err(err) => {
            warn!("profile load failed, starting fresh: {err}");
            SavedProfile::default()
        }
    }
}

/// Save a profile to a store, best-effort.
pub fn save_profile(store: &mut dyn BlobStore, profile: &SavedProfile) {
    if let Err(err) = store.save(&profile.encode()) {
        warn!("profile save failed: {err}");
    }
}
