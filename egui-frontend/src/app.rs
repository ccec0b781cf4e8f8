//! # App Module
//!
//! Entry point shim for the attendance tracker application: re-exports the
//! app type so `main` stays free of module-path noise.

pub use crate::ui::AttendanceTrackerApp;
