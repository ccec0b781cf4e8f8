//! Attendance domain logic: the mark flow and the summary query.
//!
//! The UI only handles presentation concerns; whether a mark is allowed,
//! whether it is a duplicate, and what the totals are is all decided here.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use shared::{
    AttendanceRecord, AttendanceStatus, AttendanceSummaryResponse, MarkAttendanceOutcome,
    MarkAttendanceResponse,
};

use crate::backend::domain::calendar_policy::{CalendarPolicy, MarkingDecision};
use crate::backend::domain::commands::MarkAttendanceCommand;
use crate::backend::domain::models::attendance::{
    AttendanceRecord as DomainAttendanceRecord, AttendanceStatus as DomainAttendanceStatus,
};
use crate::backend::storage::{AppendOutcome, LedgerStorage};

struct AttendanceMapper;

impl AttendanceMapper {
    pub fn to_dto(record: &DomainAttendanceRecord) -> AttendanceRecord {
        AttendanceRecord {
            date: record.ledger_date(),
            day: record.day.clone(),
            status: match record.status {
                DomainAttendanceStatus::Present => AttendanceStatus::Present,
                DomainAttendanceStatus::Absent => AttendanceStatus::Absent,
            },
            synced: record.synced,
        }
    }
}

/// Attendance service that handles the mark flow and summary queries.
#[derive(Clone)]
pub struct AttendanceService {
    policy: CalendarPolicy,
    ledger: Arc<dyn LedgerStorage>,
}

impl AttendanceService {
    pub fn new(policy: CalendarPolicy, ledger: Arc<dyn LedgerStorage>) -> Self {
        Self { policy, ledger }
    }

    /// Mark attendance for the command's date.
    ///
    /// The calendar policy is consulted first; a day off is a no-op outcome
    /// carrying the reason, not an error. On a school day the record is
    /// appended through the single check-and-append operation, so a repeat
    /// press cannot produce a duplicate row.
    pub fn mark_attendance(&self, command: MarkAttendanceCommand) -> Result<MarkAttendanceResponse> {
        info!(
            "📒 MARK: {} requested for {}",
            command.status,
            command.date.format(shared::LEDGER_DATE_FORMAT)
        );

        if let MarkingDecision::NotRequired(reason) = self.policy.check(command.date) {
            info!("📒 MARK: no attendance required, {:?}", reason);
            return Ok(MarkAttendanceResponse {
                outcome: MarkAttendanceOutcome::NotRequired,
                message: reason.user_message(command.date),
                record: None,
            });
        }

        let record = DomainAttendanceRecord::new(command.date, command.status);

        match self.ledger.append_if_absent(&record)? {
            AppendOutcome::Inserted => {
                info!("✅ MARK: {} marked as {}", record.day, record.status);
                Ok(MarkAttendanceResponse {
                    outcome: MarkAttendanceOutcome::Marked,
                    message: format!("{} marked as {}", record.day, record.status),
                    record: Some(AttendanceMapper::to_dto(&record)),
                })
            }
            AppendOutcome::DuplicateDate => Ok(MarkAttendanceResponse {
                outcome: MarkAttendanceOutcome::AlreadyMarked,
                message: "Attendance already marked today".to_string(),
                record: None,
            }),
        }
    }

    /// Totals and the full ledger contents for the summary view.
    pub fn attendance_summary(&self) -> Result<AttendanceSummaryResponse> {
        let records = self.ledger.list_records()?;
        let percentage = self.ledger.presence_ratio()?;

        let present_days = records
            .iter()
            .filter(|r| r.status == DomainAttendanceStatus::Present)
            .count() as u32;
        let unsynced_days = records.iter().filter(|r| !r.synced).count() as u32;

        Ok(AttendanceSummaryResponse {
            present_days,
            total_days: records.len() as u32,
            unsynced_days,
            percentage,
            records: records.iter().map(AttendanceMapper::to_dto).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::calendar_policy::SchoolCalendar;
    use crate::backend::storage::csv::test_utils::TestEnvironment;
    use crate::backend::storage::csv::LedgerRepository;
    use chrono::{NaiveDate, Weekday};
    use std::collections::{BTreeMap, BTreeSet};

    fn setup_service() -> Result<(AttendanceService, TestEnvironment)> {
        let env = TestEnvironment::new()?;
        let ledger: Arc<dyn LedgerStorage> =
            Arc::new(LedgerRepository::new(env.connection.clone()));

        let mut vacations = BTreeSet::new();
        vacations.insert(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());

        let policy = CalendarPolicy::new(SchoolCalendar {
            non_school_weekday: Weekday::Sun,
            holidays: SchoolCalendar::india_2026(),
            vacations,
        });

        Ok((AttendanceService::new(policy, ledger), env))
    }

    fn mark(
        service: &AttendanceService,
        y: i32,
        m: u32,
        d: u32,
        status: DomainAttendanceStatus,
    ) -> Result<MarkAttendanceResponse> {
        service.mark_attendance(MarkAttendanceCommand {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            status,
        })
    }

    #[test]
    fn marking_a_school_day_appends_an_unsynced_row() -> Result<()> {
        let (service, _env) = setup_service()?;

        let response = mark(&service, 2026, 1, 1, DomainAttendanceStatus::Present)?;
        assert_eq!(response.outcome, MarkAttendanceOutcome::Marked);
        assert_eq!(response.message, "Thursday marked as Present");

        let record = response.record.unwrap();
        assert_eq!(record.date, "01-01-2026");
        assert!(!record.synced);

        Ok(())
    }

    #[test]
    fn marking_twice_reports_already_marked() -> Result<()> {
        let (service, _env) = setup_service()?;

        mark(&service, 2026, 1, 1, DomainAttendanceStatus::Present)?;
        let repeat = mark(&service, 2026, 1, 1, DomainAttendanceStatus::Absent)?;

        assert_eq!(repeat.outcome, MarkAttendanceOutcome::AlreadyMarked);
        assert_eq!(repeat.message, "Attendance already marked today");

        let summary = service.attendance_summary()?;
        assert_eq!(summary.total_days, 1);

        Ok(())
    }

    #[test]
    fn day_off_writes_nothing() -> Result<()> {
        let (service, _env) = setup_service()?;

        // Sunday, holiday, vacation: all no-ops with their own message.
        let sunday = mark(&service, 2026, 1, 4, DomainAttendanceStatus::Present)?;
        assert_eq!(sunday.outcome, MarkAttendanceOutcome::NotRequired);
        assert_eq!(sunday.message, "Sunday - No school");

        let holiday = mark(&service, 2026, 1, 26, DomainAttendanceStatus::Present)?;
        assert_eq!(holiday.outcome, MarkAttendanceOutcome::NotRequired);
        assert_eq!(holiday.message, "Holiday - No school");

        let vacation = mark(&service, 2026, 6, 15, DomainAttendanceStatus::Present)?;
        assert_eq!(vacation.outcome, MarkAttendanceOutcome::NotRequired);
        assert_eq!(vacation.message, "Vacation - No attendance needed");

        assert_eq!(service.attendance_summary()?.total_days, 0);
        Ok(())
    }

    #[test]
    fn summary_counts_and_percentage() -> Result<()> {
        let (service, _env) = setup_service()?;

        mark(&service, 2026, 1, 1, DomainAttendanceStatus::Present)?;
        mark(&service, 2026, 1, 2, DomainAttendanceStatus::Present)?;
        mark(&service, 2026, 1, 5, DomainAttendanceStatus::Present)?;
        mark(&service, 2026, 1, 6, DomainAttendanceStatus::Absent)?;

        let summary = service.attendance_summary()?;
        assert_eq!(summary.total_days, 4);
        assert_eq!(summary.present_days, 3);
        assert_eq!(summary.unsynced_days, 4);
        assert_eq!(summary.percentage, 75.0);

        Ok(())
    }
}
