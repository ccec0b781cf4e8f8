//! Domain model for one attendance ledger row.

use chrono::NaiveDate;
use shared::LEDGER_DATE_FORMAT;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Parse the status cell of a ledger row. Anything other than the two
    /// known labels is treated as unparsable, not coerced.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

/// One row of the attendance ledger. The `date` is the unique key; `day` is
/// a derived display label and never authoritative on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub day: String,
    pub status: AttendanceStatus,
    pub synced: bool,
}

impl AttendanceRecord {
    /// Build a fresh, unsynced record for `date`. The weekday label is
    /// derived from the date.
    pub fn new(date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            date,
            day: date.format("%A").to_string(),
            status,
            synced: false,
        }
    }

    /// The date as it appears in the ledger file.
    pub fn ledger_date(&self) -> String {
        self.date.format(LEDGER_DATE_FORMAT).to_string()
    }
}
