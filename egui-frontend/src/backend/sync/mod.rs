//! Sync boundary: uploading the ledger file to a remote backup folder.
//!
//! The adapter trait is the seam for the actual transport. The shipped
//! implementation mirrors into a locally mounted folder (one an OS
//! cloud-drive client keeps synced); a real remote client would implement
//! the same trait.

use std::path::Path;
use thiserror::Error;

pub mod folder;

pub use folder::FolderSyncAdapter;

/// Errors that can occur while uploading the ledger.
///
/// Whatever the cause, the caller renders it as one human-readable message
/// and leaves every sync flag untouched.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Remote folder unavailable: {0}")]
    RemoteFolderUnavailable(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether the upload created a new remote entry or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Created,
    Replaced,
}

/// Uploads a local file into a remote folder.
///
/// Required semantics: list the folder's entries, match one by the local
/// file's name; replace its content if found, create a new entry otherwise.
/// A single attempt per call, no retries.
pub trait SyncAdapter: Send + Sync {
    fn upload(&self, local_file: &Path, remote_folder: &str) -> Result<UploadOutcome, SyncError>;
}
