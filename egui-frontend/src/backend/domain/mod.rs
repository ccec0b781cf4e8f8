//! Domain layer: services, commands, and models.

pub mod attendance_service;
pub mod calendar_policy;
pub mod commands;
pub mod models;
pub mod sync_service;

pub use attendance_service::AttendanceService;
pub use calendar_policy::{CalendarPolicy, MarkingDecision, SchoolCalendar, SkipReason};
pub use sync_service::SyncService;
