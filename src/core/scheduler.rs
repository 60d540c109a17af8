use serde::{Deserialize, Serialize};

use super::settings::ReminderSettings;

// ── Trigger Times ────────────────────────────────────────────────────────────

/// A time of day at which a recurring daily reminder fires.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TriggerTime {
    pub hour: u32,
    pub minute: u32,
}

impl TriggerTime {
    pub fn on_the_hour(hour: u32) -> Self {
        Self { hour, minute: 0 }
    }

    pub(crate) fn clamped(&self) -> Self {
        Self {
            hour: self.hour.min(23),
            minute: self.minute.min(59),
        }
    }
}

// ── Scheduler ────────────────────────────────────────────────────────────────

/// Default slot for custom-time index `index`: spread across the window with
/// integer steps so pickers the user has not touched yet show a sensible
/// time.  A single reminder lands on the start hour.
fn default_custom_hour(settings: &ReminderSettings, index: u32) -> u32 {
    let span = settings.end_hour.saturating_sub(settings.start_hour);
    let divisor = settings.notifications_per_day.saturating_sub(1).max(1);
    settings.start_hour + span * index / divisor
}

/// Expand reminder settings into the concrete list of daily trigger times.
///
/// Custom-times mode takes the first `notifications_per_day` stored times and
/// synthesizes evenly spaced defaults for the indices the user has not set
/// yet.  Even-interval mode splits the start/end window into equal steps,
/// always on the hour.  Deterministic: the same settings always produce the
/// same list.
pub fn compute_trigger_times(settings: &ReminderSettings) -> Vec<TriggerTime> {
    let count = settings.notifications_per_day;
    if settings.use_custom_times {
        (0..count)
            .map(|i| match settings.custom_times.get(i as usize) {
                Some(time) => *time,
                None => TriggerTime::on_the_hour(default_custom_hour(settings, i)),
            })
            .collect()
    } else {
        // Empty window: nothing to divide, no triggers.  `write_settings`
        // rejects this configuration before it is persisted, so only direct
        // callers ever see the empty result.
        if settings.end_hour <= settings.start_hour {
            return Vec::new();
        }
        let interval = (settings.end_hour - settings.start_hour) as f64 / count as f64;
        (0..count)
            .map(|i| {
                TriggerTime::on_the_hour(settings.start_hour + (interval * i as f64).round() as u32)
            })
            .collect()
    }
}
