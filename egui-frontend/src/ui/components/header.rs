use crate::ui::app_state::AttendanceTrackerApp;

impl AttendanceTrackerApp {
    /// Render the title and the current date/day line.
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("🎓 Attendance Tracker")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("📅 {} ({})", self.today.date, self.today.day_name))
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional)),
            );
        });
    }
}
