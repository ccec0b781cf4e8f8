//! Backup orchestration: upload the ledger file, then flag every row as
//! synced. An upload failure leaves the flags exactly as they were and is
//! reported as a single message, never as a crash.

use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use shared::SyncLedgerResponse;

use crate::backend::storage::LedgerStorage;
use crate::backend::sync::{SyncAdapter, UploadOutcome};

#[derive(Clone)]
pub struct SyncService {
    ledger: Arc<dyn LedgerStorage>,
    adapter: Arc<dyn SyncAdapter>,
    ledger_path: PathBuf,
    remote_folder: String,
}

impl SyncService {
    pub fn new(
        ledger: Arc<dyn LedgerStorage>,
        adapter: Arc<dyn SyncAdapter>,
        ledger_path: PathBuf,
        remote_folder: String,
    ) -> Self {
        Self {
            ledger,
            adapter,
            ledger_path,
            remote_folder,
        }
    }

    /// Upload the ledger to the backup folder. One attempt; on success every
    /// record is flagged synced, on failure nothing changes.
    pub fn sync_ledger(&self) -> Result<SyncLedgerResponse> {
        info!(
            "☁️ SYNC: uploading {} to {}",
            self.ledger_path.display(),
            self.remote_folder
        );

        match self.adapter.upload(&self.ledger_path, &self.remote_folder) {
            Ok(outcome) => {
                let flipped = self.ledger.mark_all_synced()?;
                info!("✅ SYNC: upload done, {} row(s) newly flagged", flipped);
                Ok(SyncLedgerResponse {
                    success: true,
                    message: match outcome {
                        UploadOutcome::Created => "Backup created in backup folder".to_string(),
                        UploadOutcome::Replaced => "Backup successful".to_string(),
                    },
                    records_synced: flipped as u32,
                })
            }
            Err(e) => {
                warn!("❌ SYNC: upload failed: {}", e);
                Ok(SyncLedgerResponse {
                    success: false,
                    message: format!("Backup error: {}", e),
                    records_synced: 0,
                })
            }
        }
    }
}
