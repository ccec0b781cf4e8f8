//! Application state and the action handlers behind the four buttons.
//!
//! All backend calls are synchronous call/return on the UI thread; every
//! outcome, success or failure, ends up as a modal message. Nothing here
//! is allowed to crash the app.

use chrono::Local;
use log::info;

use shared::{AttendanceSummaryResponse, CurrentDateResponse, MarkAttendanceOutcome};

use crate::backend::config::AppConfig;
use crate::backend::domain::commands::MarkAttendanceCommand;
use crate::backend::domain::models::attendance::AttendanceStatus;
use crate::backend::Backend;
use crate::ui::notifications;

pub struct AttendanceTrackerApp {
    pub backend: Backend,
    /// Date/day header contents, computed once at startup.
    pub today: CurrentDateResponse,
    /// Current modal message, if any.
    pub info_message: Option<String>,
    /// Summary modal contents, if open.
    pub summary: Option<AttendanceSummaryResponse>,
}

impl AttendanceTrackerApp {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let backend = Backend::new(config)?;

        let today = Local::now().date_naive();
        let current = CurrentDateResponse {
            date: today.format(shared::LEDGER_DATE_FORMAT).to_string(),
            day_name: today.format("%A").to_string(),
        };

        Ok(Self {
            backend,
            today: current,
            info_message: None,
            summary: None,
        })
    }

    /// Mark today's attendance.
    pub fn mark(&mut self, status: AttendanceStatus) {
        let command = MarkAttendanceCommand {
            date: Local::now().date_naive(),
            status,
        };

        match self.backend.attendance_service.mark_attendance(command) {
            Ok(response) => {
                if response.outcome == MarkAttendanceOutcome::Marked {
                    notifications::notify_attendance_saved(&status.to_string());
                }
                self.info_message = Some(response.message);
            }
            Err(e) => self.info_message = Some(format!("Error: {}", e)),
        }
    }

    /// Upload the ledger to the backup folder.
    pub fn sync_backup(&mut self) {
        match self.backend.sync_service.sync_ledger() {
            Ok(response) => self.info_message = Some(response.message),
            Err(e) => self.info_message = Some(format!("Error: {}", e)),
        }
    }

    /// Open the attendance summary modal.
    pub fn show_summary(&mut self) {
        match self.backend.attendance_service.attendance_summary() {
            Ok(summary) => {
                info!(
                    "Showing summary: {}/{} present",
                    summary.present_days, summary.total_days
                );
                self.summary = Some(summary);
            }
            Err(e) => self.info_message = Some(format!("Error: {}", e)),
        }
    }
}

impl eframe::App for AttendanceTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            ui.add_space(20.0);
            self.render_actions(ui);
        });

        self.render_info_modal(ctx);
        self.render_summary_modal(ctx);
    }
}
