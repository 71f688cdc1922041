//! Session-scoped audio blobs.
//!
//! Audio attached from a local file is held in memory and addressed by a
//! `blob:` URL that is only valid for the current session. Every URL created
//! here must be revoked once nothing refers to it; the collection revokes the
//! URL of an exercise when it is removed, and dropping the registry revokes
//! whatever is left.

use std::collections::HashMap;
use uuid::Uuid;

/// Prefix of every session-scoped audio URL.
pub const BLOB_URL_PREFIX: &str = "blob:listening-studio/";

/// Audio held for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBlob {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Audio chosen on the authoring form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AudioInput {
    /// A local file; takes priority over a URL.
    File { bytes: Vec<u8>, mime: String },
    /// An external URL.
    Url(String),
    #[default]
    None,
}

/// Registry of live blob URLs.
#[derive(Debug, Default)]
pub struct AudioRegistry {
    blobs: HashMap<String, AudioBlob>,
}

impl AudioRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `bytes` for the session and return the URL addressing them.
    pub fn create_object_url(&mut self, bytes: Vec<u8>, mime: &str) -> String {
        let url = format!("{}{}", BLOB_URL_PREFIX, Uuid::new_v4());
        tracing::debug!("Created audio blob {} ({} bytes)", url, bytes.len());
        self.blobs.insert(
            url.clone(),
            AudioBlob {
                bytes,
                mime: mime.to_string(),
            },
        );
        url
    }

    /// Turn form input into the audio reference stored on an exercise.
    pub fn attach(&mut self, input: AudioInput) -> String {
        match input {
            AudioInput::File { bytes, mime } => self.create_object_url(bytes, &mime),
            AudioInput::Url(url) => url.trim().to_string(),
            AudioInput::None => String::new(),
        }
    }

    pub fn resolve(&self, url: &str) -> Option<&AudioBlob> {
        self.blobs.get(url)
    }

    /// Release one blob. Returns false if the URL was not live.
    pub fn revoke_object_url(&mut self, url: &str) -> bool {
        let released = self.blobs.remove(url).is_some();
        if released {
            tracing::debug!("Revoked audio blob {}", url);
        }
        released
    }

    /// Release every blob, returning how many were live.
    pub fn revoke_all(&mut self) -> usize {
        let count = self.blobs.len();
        self.blobs.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl Drop for AudioRegistry {
    fn drop(&mut self) {
        let released = self.revoke_all();
        if released > 0 {
            tracing::debug!("Released {} audio blobs at session end", released);
        }
    }
}
