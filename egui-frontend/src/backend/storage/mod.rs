//! Storage layer: the ledger storage abstraction and its CSV implementation.

pub mod csv;
pub mod traits;

pub use self::csv::CsvConnection;
pub use traits::{AppendOutcome, LedgerStorage};
