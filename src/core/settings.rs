use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::paths::get_droplet_dir;
use super::scheduler::TriggerTime;

// ── Reminder Settings (~/.droplet/settings.json) ─────────────────────────────

/// Reminder preferences, serialized with the camelCase key names the settings
/// store documents (`notificationsEnabled`, `notificationsPerDay`,
/// `startHour`, `endHour`, `useCustomTimes`, `customTimes`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReminderSettings {
    /// Master toggle.  Off means no reminders are armed at all.
    pub notifications_enabled: bool,
    pub notifications_per_day: u32,
    pub start_hour: u32,
    pub end_hour: u32,
    /// When set, `custom_times` wins over the even start/end spread.
    pub use_custom_times: bool,
    /// User-chosen times, at most `notifications_per_day` entries.
    pub custom_times: Vec<TriggerTime>,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            notifications_enabled: false,
            notifications_per_day: 4,
            start_hour: 9,
            end_hour: 21,
            use_custom_times: false,
            custom_times: Vec::new(),
        }
    }
}

impl ReminderSettings {
    pub const MAX_PER_DAY: u32 = 12;

    /// Force every field back into its documented range.  The UI steppers
    /// enforce the same bounds, so this only matters for hand-edited settings
    /// files and direct invoke calls.
    pub fn clamped(&self) -> Self {
        let notifications_per_day = self.notifications_per_day.clamp(1, Self::MAX_PER_DAY);
        let custom_times = self
            .custom_times
            .iter()
            .take(notifications_per_day as usize)
            .map(|t| t.clamped())
            .collect();
        Self {
            notifications_enabled: self.notifications_enabled,
            notifications_per_day,
            start_hour: self.start_hour.min(23),
            end_hour: self.end_hour.min(23),
            use_custom_times: self.use_custom_times,
            custom_times,
        }
    }

    /// An enabled even-interval schedule needs a non-empty window; custom
    /// times do not care about the window at all.
    pub fn check_window(&self) -> Result<(), String> {
        if self.notifications_enabled && !self.use_custom_times && self.end_hour <= self.start_hour
        {
            return Err("End hour must be later than start hour".into());
        }
        Ok(())
    }
}

// ── Persistence ──────────────────────────────────────────────────────────────

fn settings_path() -> Result<PathBuf, String> {
    Ok(get_droplet_dir()?.join("settings.json"))
}

pub fn read_settings() -> Result<ReminderSettings, String> {
    read_settings_from(&settings_path()?)
}

fn read_settings_from(path: &Path) -> Result<ReminderSettings, String> {
    if !path.exists() {
        return Ok(ReminderSettings::default());
    }
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    Ok(serde_json::from_str(&raw).unwrap_or_default())
}

pub fn write_settings(settings: &ReminderSettings) -> Result<(), String> {
    write_settings_to(&settings_path()?, settings)
}

fn write_settings_to(path: &Path, settings: &ReminderSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
    }
    let raw = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(path, raw).map_err(|e| e.to_string())
}
