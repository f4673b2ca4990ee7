//! Persisted session store — the one durable credential.
//!
//! The bearer token is written on successful login/registration, read by
//! every outgoing request, and cleared on logout or on an authentication
//! failure. It is the only thing this client keeps in durable storage.
//!
//! The store is deliberately infallible at the trait boundary: `read` must
//! never fail (a broken store degrades to "not logged in"), and storage
//! problems on `save`/`clear` are logged rather than propagated — there is
//! nothing a view could do with them.

use async_lock::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Fixed file name the token lives under.
pub const TOKEN_FILE: &str = "session_token";

/// Durable storage for the session credential.
pub trait SessionStore: Send + Sync {
    /// Persist `token`, overwriting any prior value.
    fn save(&self, token: &str);

    /// The current credential, or `None` when logged out. Never fails.
    fn read(&self) -> Option<String>;

    /// Remove the credential. Idempotent.
    fn clear(&self);
}

// ─── FileSessionStore ────────────────────────────────────────────────────────

/// File-backed store: one file, one token, survives restarts.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `$HOME/.papertrade`, or the working directory when `HOME` is unset.
    pub fn default_dir() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".papertrade")
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!(dir = %self.dir.display(), "failed to create session dir: {}", e);
            return;
        }
        if let Err(e) = fs::write(self.token_path(), token) {
            tracing::warn!("failed to persist session token: {}", e);
        }
    }

    fn read(&self) -> Option<String> {
        match fs::read_to_string(self.token_path()) {
            Ok(token) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("failed to read session token: {}", e);
                None
            }
        }
    }

    fn clear(&self) {
        match fs::remove_file(self.token_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to clear session token: {}", e),
        }
    }
}

// ─── MemorySessionStore ──────────────────────────────────────────────────────

/// In-memory store for tests and ephemeral sessions. Not durable.
#[derive(Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str) {
        *self.token.lock_blocking() = Some(token.to_string());
    }

    fn read(&self) -> Option<String> {
        self.token.lock_blocking().clone()
    }

    fn clear(&self) {
        *self.token.lock_blocking() = None;
    }
}
