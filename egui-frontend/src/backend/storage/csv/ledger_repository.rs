use anyhow::Result;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Writer};
use log::{info, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::{CsvConnection, LEDGER_HEADER};
use crate::backend::domain::models::attendance::{
    AttendanceRecord as DomainAttendanceRecord, AttendanceStatus as DomainAttendanceStatus,
};
use crate::backend::storage::traits::{AppendOutcome, LedgerStorage};
use shared::LEDGER_DATE_FORMAT;

/// CSV-based ledger repository.
///
/// Every operation loads the whole file, works on the in-memory record
/// sequence, and writes the whole file back. No locking: the app assumes a
/// single interactive user and a single process.
#[derive(Clone)]
pub struct LedgerRepository {
    connection: CsvConnection,
}

impl LedgerRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read all records from the ledger file.
    ///
    /// Rows with an unparsable date, status, or sync flag are skipped with
    /// a warning and treated as if they were not there. One corrupted line
    /// must not take the whole ledger down.
    fn read_records(&self) -> Result<Vec<DomainAttendanceRecord>> {
        self.connection.ensure_ledger_file_exists()?;

        let file = File::open(self.connection.ledger_path())?;
        let reader = BufReader::new(file);
        let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

        let mut records = Vec::new();

        for result in csv_reader.records() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    warn!("Skipping unreadable ledger row: {}", e);
                    continue;
                }
            };

            let date_str = row.get(0).unwrap_or("");
            let date = match NaiveDate::parse_from_str(date_str, LEDGER_DATE_FORMAT) {
                Ok(date) => date,
                Err(_) => {
                    warn!("Skipping ledger row with unparsable date '{}'", date_str);
                    continue;
                }
            };

            let status_str = row.get(2).unwrap_or("");
            let status = match DomainAttendanceStatus::parse(status_str) {
                Some(status) => status,
                None => {
                    warn!(
                        "Skipping ledger row {} with unknown status '{}'",
                        date_str, status_str
                    );
                    continue;
                }
            };

            let synced = match row.get(3).unwrap_or("") {
                "True" => true,
                "False" => false,
                other => {
                    warn!(
                        "Skipping ledger row {} with unknown sync flag '{}'",
                        date_str, other
                    );
                    continue;
                }
            };

            records.push(DomainAttendanceRecord {
                date,
                day: row.get(1).unwrap_or("").to_string(),
                status,
                synced,
            });
        }

        Ok(records)
    }

    /// Write all records back to the ledger file, header included.
    fn write_records(&self, records: &[DomainAttendanceRecord]) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.connection.ledger_path())?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(LEDGER_HEADER)?;

        for record in records {
            let synced = if record.synced { "True" } else { "False" };
            csv_writer.write_record(&[
                record.ledger_date(),
                record.day.clone(),
                record.status.to_string(),
                synced.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl LedgerStorage for LedgerRepository {
    fn already_marked(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.read_records()?.iter().any(|r| r.date == date))
    }

    fn append_record(&self, record: &DomainAttendanceRecord) -> Result<()> {
        let mut records = self.read_records()?;
        records.push(record.clone());
        self.write_records(&records)?;
        info!("Appended ledger row for {}", record.ledger_date());
        Ok(())
    }

    fn append_if_absent(&self, record: &DomainAttendanceRecord) -> Result<AppendOutcome> {
        let mut records = self.read_records()?;

        if records.iter().any(|r| r.date == record.date) {
            info!(
                "Ledger already has a row for {}, not appending",
                record.ledger_date()
            );
            return Ok(AppendOutcome::DuplicateDate);
        }

        records.push(record.clone());
        self.write_records(&records)?;
        info!(
            "Appended ledger row for {} ({})",
            record.ledger_date(),
            record.status
        );
        Ok(AppendOutcome::Inserted)
    }

    fn mark_all_synced(&self) -> Result<usize> {
        let mut records = self.read_records()?;
        let mut flipped = 0;

        for record in &mut records {
            if !record.synced {
                record.synced = true;
                flipped += 1;
            }
        }

        self.write_records(&records)?;
        info!("Flagged {} ledger row(s) as synced", flipped);
        Ok(flipped)
    }

    fn presence_ratio(&self) -> Result<f64> {
        let records = self.read_records()?;
        let total = records.len();

        if total == 0 {
            return Ok(0.0);
        }

        let present = records
            .iter()
            .filter(|r| r.status == DomainAttendanceStatus::Present)
            .count();

        Ok(present as f64 / total as f64 * 100.0)
    }

    fn list_records(&self) -> Result<Vec<DomainAttendanceRecord>> {
        self.read_records()
    }
}
