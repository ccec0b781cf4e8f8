use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Header row of the ledger file.
pub const LEDGER_HEADER: [&str; 4] = ["Date", "Day", "Status", "Synced"];

/// CsvConnection manages the data directory and the ledger file inside it.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    ledger_file_name: String,
}

impl CsvConnection {
    /// Create a connection rooted at `base_directory`, creating the
    /// directory if it does not exist.
    pub fn new<P: AsRef<Path>>(base_directory: P, ledger_file_name: &str) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
            ledger_file_name: ledger_file_name.to_string(),
        })
    }

    /// Full path of the ledger file.
    pub fn ledger_path(&self) -> PathBuf {
        self.base_directory.join(&self.ledger_file_name)
    }

    /// Create the ledger file with its header row if it is absent.
    /// Idempotent: an existing file is left untouched, rows included.
    pub fn ensure_ledger_file_exists(&self) -> Result<()> {
        let file_path = self.ledger_path();

        if !file_path.exists() {
            let header = format!("{}\n", LEDGER_HEADER.join(","));
            fs::write(&file_path, header)?;
            info!("Created new ledger file at {}", file_path.display());
        }

        Ok(())
    }
}
