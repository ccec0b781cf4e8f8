use crate::backend::domain::models::attendance::AttendanceStatus;
use crate::ui::app_state::AttendanceTrackerApp;

const PRESENT_GREEN: egui::Color32 = egui::Color32::from_rgb(0x3E, 0x9B, 0x4F);
const ABSENT_RED: egui::Color32 = egui::Color32::from_rgb(0xC0, 0x3A, 0x2B);

impl AttendanceTrackerApp {
    /// Render the four action buttons.
    pub fn render_actions(&mut self, ui: &mut egui::Ui) {
        let button_size = egui::vec2(260.0, 36.0);

        ui.vertical_centered(|ui| {
            let present = egui::Button::new(
                egui::RichText::new("Mark Present").color(egui::Color32::WHITE),
            )
            .fill(PRESENT_GREEN)
            .min_size(button_size);
            if ui.add(present).clicked() {
                self.mark(AttendanceStatus::Present);
            }

            ui.add_space(10.0);

            let absent = egui::Button::new(
                egui::RichText::new("Mark Absent").color(egui::Color32::WHITE),
            )
            .fill(ABSENT_RED)
            .min_size(button_size);
            if ui.add(absent).clicked() {
                self.mark(AttendanceStatus::Absent);
            }

            ui.add_space(10.0);

            if ui
                .add(egui::Button::new("Sync to Backup Folder").min_size(button_size))
                .clicked()
            {
                self.sync_backup();
            }

            ui.add_space(10.0);

            if ui
                .add(egui::Button::new("Show Attendance %").min_size(button_size))
                .clicked()
            {
                self.show_summary();
            }
        });
    }
}
