use crate::core;
use crate::notify;

// ── Schedule Preview & Permission ────────────────────────────────────────────

/// Pure preview of the trigger times `settings` would produce, without
/// persisting or arming anything.  The frontend uses this to pre-fill custom
/// time pickers with the synthesized defaults.
#[tauri::command]
pub fn preview_schedule(settings: core::ReminderSettings) -> Vec<core::TriggerTime> {
    core::compute_trigger_times(&settings.clamped())
}

#[tauri::command]
pub fn notification_permission(app: tauri::AppHandle) -> Result<bool, String> {
    notify::ensure_permission(&app)
}
