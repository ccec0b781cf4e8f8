//! # Storage Traits
//!
//! Abstraction over the attendance ledger so the domain layer does not
//! depend on any particular storage backend.

use anyhow::Result;
use chrono::NaiveDate;

use crate::backend::domain::models::attendance::AttendanceRecord as DomainAttendanceRecord;

/// Result of a checked append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The record was written to the ledger.
    Inserted,
    /// A row with the same date already exists; nothing was written.
    DuplicateDate,
}

/// Trait defining the interface for ledger storage operations.
///
/// Every operation is a full read-modify-write of the persisted ledger; the
/// in-memory record sequence only lives for the duration of one call.
/// All operations are synchronous for the desktop-only egui app.
pub trait LedgerStorage: Send + Sync {
    /// True iff a record with exactly this date exists. Rows that fail to
    /// parse are skipped and never match.
    fn already_marked(&self, date: NaiveDate) -> Result<bool>;

    /// Append one record to the end of the ledger. Performs no duplicate
    /// check: two appends with the same date yield two rows. Callers that
    /// need uniqueness use `append_if_absent`.
    fn append_record(&self, record: &DomainAttendanceRecord) -> Result<()>;

    /// Check-and-append in a single read-modify-write, closing the race
    /// window of a separate `already_marked` followed by `append_record`.
    fn append_if_absent(&self, record: &DomainAttendanceRecord) -> Result<AppendOutcome>;

    /// Flag every record as synced. Returns how many records were newly
    /// flipped. Called only after a successful upload.
    fn mark_all_synced(&self) -> Result<usize>;

    /// present / total * 100, exactly 0.0 for an empty ledger. Unrounded.
    fn presence_ratio(&self) -> Result<f64>;

    /// All parseable records in file order.
    fn list_records(&self) -> Result<Vec<DomainAttendanceRecord>>;
}
