//! Application configuration.
//!
//! Everything the backend needs is carried in one explicit value built in
//! `main` and passed into `Backend::new`: where the ledger lives, where
//! backups go, and the school calendar the policy evaluates against. Tests
//! build their own configs with temp directories and custom calendars.

use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::backend::domain::calendar_policy::SchoolCalendar;
use shared::LEDGER_DATE_FORMAT;

/// Ledger file name, kept stable so backups replace each other by name.
pub const DEFAULT_LEDGER_FILE: &str = "attendance_backup.csv";

/// Vacation dates for the current school year. Edit when vacations change.
const VACATIONS: [&str; 2] = ["15-06-2026", "16-06-2026"];

#[derive(Clone)]
pub struct AppConfig {
    /// Directory holding the ledger file.
    pub data_dir: PathBuf,
    pub ledger_file_name: String,
    /// Backup folder the sync adapter uploads into. Point this at a folder
    /// a cloud-drive client keeps synced.
    pub remote_folder: String,
    pub calendar: SchoolCalendar,
}

impl AppConfig {
    /// Production defaults: data under the user's documents folder, backups
    /// in a sibling folder, Sundays off, Indian public holidays.
    pub fn load_default() -> Result<Self> {
        let documents = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = documents.join("Attendance Tracker");
        let remote_folder = documents.join("Attendance Backup");

        Ok(Self {
            data_dir,
            ledger_file_name: DEFAULT_LEDGER_FILE.to_string(),
            remote_folder: remote_folder.to_string_lossy().to_string(),
            calendar: SchoolCalendar {
                non_school_weekday: Weekday::Sun,
                holidays: SchoolCalendar::india_2026(),
                vacations: parse_vacations(&VACATIONS)?,
            },
        })
    }
}

fn parse_vacations(dates: &[&str]) -> Result<BTreeSet<NaiveDate>> {
    dates
        .iter()
        .map(|s| {
            NaiveDate::parse_from_str(s, LEDGER_DATE_FORMAT)
                .map_err(|e| anyhow::anyhow!("Invalid vacation date '{}': {}", s, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_vacation_dates_parse() -> Result<()> {
        let vacations = parse_vacations(&VACATIONS)?;
        assert_eq!(vacations.len(), 2);
        assert!(vacations.contains(&NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()));
        Ok(())
    }

    #[test]
    fn bad_vacation_date_is_an_error() {
        assert!(parse_vacations(&["2026-06-15"]).is_err());
    }
}
