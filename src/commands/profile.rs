use crate::core;

// ── User Profile ─────────────────────────────────────────────────────────────

#[tauri::command]
pub fn read_profile() -> Result<Option<core::UserProfile>, String> {
    core::read_profile()
}

/// Validate raw form input and persist it.  Returns the validated profile so
/// the frontend can render it without a second round trip.
#[tauri::command]
pub fn save_profile(raw_age: String, raw_weight: String) -> Result<core::UserProfile, String> {
    let profile = core::validate_profile(&raw_age, &raw_weight).map_err(|e| e.to_string())?;
    core::save_profile(&profile)?;
    Ok(profile)
}

// ── Intake Calculator ────────────────────────────────────────────────────────

/// Daily water target in milliliters for the stored profile.
#[tauri::command]
pub fn daily_target() -> Result<f64, String> {
    match core::read_profile()? {
        Some(profile) => Ok(core::daily_target_ml(profile.weight)),
        None => Err("No profile saved yet".into()),
    }
}
