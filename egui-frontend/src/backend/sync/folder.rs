//! Folder-mirror sync adapter.
//!
//! Targets a locally mounted backup folder, typically one a cloud-drive
//! client keeps synced with remote storage. The folder itself is treated as
//! remote: it must already exist, and the adapter never creates it.

use log::info;
use std::fs;
use std::path::Path;

use super::{SyncAdapter, SyncError, UploadOutcome};

#[derive(Clone, Default)]
pub struct FolderSyncAdapter;

impl FolderSyncAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SyncAdapter for FolderSyncAdapter {
    fn upload(&self, local_file: &Path, remote_folder: &str) -> Result<UploadOutcome, SyncError> {
        let file_name = local_file
            .file_name()
            .ok_or_else(|| SyncError::Upload(format!("{} has no file name", local_file.display())))?;

        let folder = Path::new(remote_folder);
        if !folder.is_dir() {
            return Err(SyncError::RemoteFolderUnavailable(remote_folder.to_string()));
        }

        // List the folder and match an entry by exact file name, the same
        // create-or-replace contract a remote drive upload follows.
        let mut existing = None;
        for entry in fs::read_dir(folder)? {
            let entry = entry?;
            if entry.file_name().as_os_str() == file_name {
                existing = Some(entry.path());
                break;
            }
        }

        let target = folder.join(file_name);
        fs::copy(local_file, &target)?;

        match existing {
            Some(_) => {
                info!("☁️ SYNC: replaced {} in {}", target.display(), remote_folder);
                Ok(UploadOutcome::Replaced)
            }
            None => {
                info!("☁️ SYNC: created {} in {}", target.display(), remote_folder);
                Ok(UploadOutcome::Created)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    fn write_local_ledger(dir: &Path) -> Result<std::path::PathBuf> {
        let path = dir.join("attendance_backup.csv");
        fs::write(&path, "Date,Day,Status,Synced\n01-01-2026,Thursday,Present,False\n")?;
        Ok(path)
    }

    #[test]
    fn upload_creates_missing_remote_entry() -> Result<()> {
        let local_dir = TempDir::new()?;
        let remote_dir = TempDir::new()?;
        let local = write_local_ledger(local_dir.path())?;

        let adapter = FolderSyncAdapter::new();
        let outcome = adapter
            .upload(&local, remote_dir.path().to_str().unwrap())
            .unwrap();

        assert_eq!(outcome, UploadOutcome::Created);
        let copied = fs::read_to_string(remote_dir.path().join("attendance_backup.csv"))?;
        assert!(copied.contains("01-01-2026"));
        Ok(())
    }

    #[test]
    fn upload_replaces_existing_remote_entry() -> Result<()> {
        let local_dir = TempDir::new()?;
        let remote_dir = TempDir::new()?;
        let local = write_local_ledger(local_dir.path())?;
        fs::write(remote_dir.path().join("attendance_backup.csv"), "stale")?;

        let adapter = FolderSyncAdapter::new();
        let outcome = adapter
            .upload(&local, remote_dir.path().to_str().unwrap())
            .unwrap();

        assert_eq!(outcome, UploadOutcome::Replaced);
        let copied = fs::read_to_string(remote_dir.path().join("attendance_backup.csv"))?;
        assert!(copied.contains("Date,Day,Status,Synced"));
        Ok(())
    }

    #[test]
    fn upload_fails_when_remote_folder_is_missing() -> Result<()> {
        let local_dir = TempDir::new()?;
        let local = write_local_ledger(local_dir.path())?;

        let adapter = FolderSyncAdapter::new();
        let missing = local_dir.path().join("nowhere");
        let error = adapter
            .upload(&local, missing.to_str().unwrap())
            .unwrap_err();

        assert!(matches!(error, SyncError::RemoteFolderUnavailable(_)));
        Ok(())
    }
}
