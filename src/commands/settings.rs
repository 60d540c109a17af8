use crate::core;
use crate::notify;

// ── Reminder Settings ────────────────────────────────────────────────────────

#[tauri::command]
pub fn read_settings() -> Result<core::ReminderSettings, String> {
    core::read_settings()
}

/// Persist new reminder settings and swap the armed schedule in one step.
/// Returns the trigger times now installed (empty when reminders are off).
#[tauri::command]
pub fn write_settings(
    app: tauri::AppHandle,
    settings: core::ReminderSettings,
) -> Result<Vec<core::TriggerTime>, String> {
    let settings = settings.clamped();
    settings.check_window()?;
    core::write_settings(&settings)?;
    Ok(notify::apply(&app, &settings))
}
