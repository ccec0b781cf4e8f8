//! # CSV Storage Module
//!
//! File-based implementation of the ledger storage. The ledger is a single
//! CSV file with one row per marked day.
//!
//! ## File Format
//!
//! ```csv
//! Date,Day,Status,Synced
//! 01-01-2026,Thursday,Present,False
//! 02-01-2026,Friday,Absent,True
//! ```
//!
//! Only semantic fields are persisted; any highlighting (present/absent,
//! pending backup) is derived by the UI at render time.

pub mod connection;
pub mod ledger_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use ledger_repository::LedgerRepository;
