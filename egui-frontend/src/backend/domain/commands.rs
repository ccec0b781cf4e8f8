//! Command types accepted by the domain services.

use chrono::NaiveDate;

use crate::backend::domain::models::attendance::AttendanceStatus;

/// Mark attendance for one date. The shell passes today's date explicitly,
/// which keeps the services clock-free and testable with fixed dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkAttendanceCommand {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}
