use shared::AttendanceStatus;

use crate::ui::app_state::AttendanceTrackerApp;

// Row tints, derived from record state at render time. The ledger file
// stores only the semantic fields.
const PRESENT_TINT: egui::Color32 = egui::Color32::from_rgb(0xC6, 0xEF, 0xCE);
const ABSENT_TINT: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xC7, 0xCE);
const PENDING_TINT: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xEB, 0x9C);
const ROW_TEXT: egui::Color32 = egui::Color32::from_rgb(0x30, 0x30, 0x30);

impl AttendanceTrackerApp {
    /// Render the blocking info modal, if a message is pending.
    pub fn render_info_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.info_message.clone() else {
            return;
        };

        let mut close = false;
        egui::Window::new("Info")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });

        if close {
            self.info_message = None;
        }
    }

    /// Render the attendance summary modal, if open.
    pub fn render_summary_modal(&mut self, ctx: &egui::Context) {
        let Some(summary) = self.summary.clone() else {
            return;
        };

        let mut close = false;
        egui::Window::new("Attendance")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Display-level rounding happens here, not in the backend.
                ui.label(
                    egui::RichText::new(format!("Attendance: {:.1}%", summary.percentage))
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong(),
                );
                ui.label(format!(
                    "{} present of {} marked day(s)",
                    summary.present_days, summary.total_days
                ));
                if summary.unsynced_days > 0 {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} day(s) pending backup",
                            summary.unsynced_days
                        ))
                        .background_color(PENDING_TINT)
                        .color(ROW_TEXT),
                    );
                }

                ui.add_space(8.0);
                egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                    for record in &summary.records {
                        let tint = match record.status {
                            AttendanceStatus::Present => PRESENT_TINT,
                            AttendanceStatus::Absent => ABSENT_TINT,
                        };
                        ui.horizontal(|ui| {
                            ui.label(format!("{} ({})", record.date, record.day));
                            ui.label(
                                egui::RichText::new(record.status.to_string())
                                    .background_color(tint)
                                    .color(ROW_TEXT),
                            );
                            if !record.synced {
                                ui.label(
                                    egui::RichText::new("pending")
                                        .background_color(PENDING_TINT)
                                        .color(ROW_TEXT),
                                );
                            }
                        });
                    }
                });

                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });

        if close {
            self.summary = None;
        }
    }
}
