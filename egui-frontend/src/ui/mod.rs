//! UI layer: app state plus the egui components that render it.

pub mod app_state;
pub mod components;
pub mod notifications;

pub use app_state::AttendanceTrackerApp;
