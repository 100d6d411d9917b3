//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path that failed                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ConsoleError (in console app) ← PERSISTENCE_FAILURE                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shell prints the cause; the invoice text is kept                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Invoice persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The output directory could not be created.
    ///
    /// ## When This Occurs
    /// - A path component is a regular file
    /// - Permission denied on a parent directory
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The invoice file could not be written.
    ///
    /// ## When This Occurs
    /// - The target is a directory
    /// - Permission denied
    /// - Disk full
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// The path the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::CreateDir { path, .. } | StoreError::Write { path, .. } => path,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
