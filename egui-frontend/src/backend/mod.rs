//! # Backend Module for egui Frontend
//!
//! Direct, synchronous access to the domain services and storage for the
//! egui shell. No async, no IO/REST layer: the UI calls services and gets
//! results back on the same thread.

use anyhow::Result;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod storage;
pub mod sync;

pub use config::AppConfig;
pub use storage::csv::CsvConnection;

use domain::{AttendanceService, CalendarPolicy, SyncService};
use storage::csv::LedgerRepository;
use storage::LedgerStorage;
use sync::{FolderSyncAdapter, SyncAdapter};

/// Main backend struct that wires all services together.
pub struct Backend {
    pub attendance_service: AttendanceService,
    pub sync_service: SyncService,
}

impl Backend {
    /// Create a backend from an explicit configuration. Initializes the
    /// ledger file (idempotent, safe on every startup).
    pub fn new(config: AppConfig) -> Result<Self> {
        let connection = CsvConnection::new(&config.data_dir, &config.ledger_file_name)?;
        connection.ensure_ledger_file_exists()?;

        let ledger: Arc<dyn LedgerStorage> = Arc::new(LedgerRepository::new(connection.clone()));
        let adapter: Arc<dyn SyncAdapter> = Arc::new(FolderSyncAdapter::new());

        let policy = CalendarPolicy::new(config.calendar.clone());
        let attendance_service = AttendanceService::new(policy, ledger.clone());
        let sync_service = SyncService::new(
            ledger,
            adapter,
            connection.ledger_path(),
            config.remote_folder.clone(),
        );

        Ok(Backend {
            attendance_service,
            sync_service,
        })
    }
}
