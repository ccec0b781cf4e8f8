//! Fire-and-forget desktop notifications.

use log::warn;
use notify_rust::Notification;

/// Notify that today's attendance was saved. Failures are logged and
/// otherwise ignored; a missing notification daemon must not break a mark.
pub fn notify_attendance_saved(status_label: &str) {
    let result = Notification::new()
        .summary("Attendance Saved")
        .body(&format!("{} marked", status_label))
        .show();

    if let Err(e) = result {
        warn!("Desktop notification failed: {}", e);
    }
}
