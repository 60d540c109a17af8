use std::path::PathBuf;

// ── Path Helpers ─────────────────────────────────────────────────────────────

/// App data directory holding `profile.json` and `settings.json`.
pub fn get_droplet_dir() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or("Could not find home directory")?;
    Ok(home.join(".droplet"))
}
