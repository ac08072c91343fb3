//! TOML-backed persistence for [`SessionState`].

use crate::session::SessionState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading or saving the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write session file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Invalid session file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to encode session: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Reads and writes one session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the session. A missing file is an empty session.
    pub fn load(&self) -> Result<SessionState, SessionError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session file, starting empty");
                return Ok(SessionState::default());
            }
            Err(source) => {
                return Err(SessionError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(toml::from_str(&contents)?)
    }

    /// Writes the session, creating parent directories as needed.
    pub fn save(&self, state: &SessionState) -> Result<(), SessionError> {
        let contents = toml::to_string(state)?;
        let write_error = |source| SessionError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&self.path, contents).map_err(write_error)?;
        info!(path = %self.path.display(), "Session saved");
        Ok(())
    }
}
