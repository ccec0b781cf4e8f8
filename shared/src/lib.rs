use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used in the ledger file and everywhere a date crosses the
/// UI/backend boundary (day-month-year, e.g. "01-01-2026").
pub const LEDGER_DATE_FORMAT: &str = "%d-%m-%Y";

/// Attendance status for a single school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

/// One attendance row as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Ledger date formatted as day-month-year.
    pub date: String,
    /// Weekday display label derived from the date ("Thursday").
    pub day: String,
    pub status: AttendanceStatus,
    /// Whether this row was included in the most recent successful backup.
    pub synced: bool,
}

/// Current date/day shown in the shell header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentDateResponse {
    /// Formatted as day-month-year.
    pub date: String,
    pub day_name: String,
}

/// Outcome of a mark-attendance action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkAttendanceOutcome {
    /// A new row was appended to the ledger.
    Marked,
    /// The date already has a row; nothing was written.
    AlreadyMarked,
    /// The calendar policy says no attendance is required on this date.
    NotRequired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAttendanceResponse {
    pub outcome: MarkAttendanceOutcome,
    /// Human-readable message for the modal surface.
    pub message: String,
    /// The appended row, present only when `outcome` is `Marked`.
    pub record: Option<AttendanceRecord>,
}

/// Attendance totals and the full ledger contents for the summary view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummaryResponse {
    pub present_days: u32,
    pub total_days: u32,
    /// Rows not yet covered by a successful backup.
    pub unsynced_days: u32,
    /// present / total * 100, exactly 0.0 for an empty ledger.
    /// Unrounded; display rounding is the UI's concern.
    pub percentage: f64,
    pub records: Vec<AttendanceRecord>,
}

/// Result of a backup attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncLedgerResponse {
    pub success: bool,
    /// Human-readable message for the modal surface.
    pub message: String,
    /// How many rows were newly flagged as synced. Zero on failure.
    pub records_synced: u32,
}
