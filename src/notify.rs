use std::sync::Mutex;
use std::time::Duration;

use chrono::Timelike;
use tauri::Manager;
use tauri_plugin_notification::{NotificationExt, PermissionState};

use crate::core::{self, TriggerTime};

// ── Reminder Delivery ────────────────────────────────────────────────────────
//
// The notification plugin only exposes fire-and-forget toasts on desktop, so
// recurrence lives here: an armed set of trigger times in Tauri-managed
// state, and a background thread that fires a toast whenever the local clock
// enters an armed hour:minute slot.

const REMINDER_TITLE: &str = "Water reminder";
const REMINDER_BODY: &str = "Time to drink some water 💧";

/// Armed trigger times shared between the command layer and the delivery
/// thread.  Triggers carry no identity across recomputes, so every update
/// replaces the whole set.
#[derive(Default)]
pub struct ReminderLedger {
    armed: Mutex<Vec<TriggerTime>>,
}

impl ReminderLedger {
    pub fn replace_all(&self, triggers: Vec<TriggerTime>) {
        *self.armed.lock().unwrap() = triggers;
    }

    pub fn cancel_all(&self) {
        self.armed.lock().unwrap().clear();
    }

    pub fn armed(&self) -> Vec<TriggerTime> {
        self.armed.lock().unwrap().clone()
    }

    fn due_at(&self, hour: u32, minute: u32) -> bool {
        self.armed
            .lock()
            .unwrap()
            .iter()
            .any(|t| t.hour == hour && t.minute == minute)
    }
}

/// Clear every pending reminder, then install the set for `settings`.
/// Returns the triggers now armed (empty when reminders are disabled).
pub fn apply<R: tauri::Runtime>(
    handle: &tauri::AppHandle<R>,
    settings: &core::ReminderSettings,
) -> Vec<TriggerTime> {
    let ledger = handle.state::<ReminderLedger>();
    ledger.cancel_all();
    if !settings.notifications_enabled {
        return Vec::new();
    }
    let triggers = core::compute_trigger_times(settings);
    ledger.replace_all(triggers.clone());
    triggers
}

/// Request notification permission if the user has not decided yet.
pub fn ensure_permission<R: tauri::Runtime>(handle: &tauri::AppHandle<R>) -> Result<bool, String> {
    let notification = handle.notification();
    match notification.permission_state().map_err(|e| e.to_string())? {
        PermissionState::Granted => Ok(true),
        PermissionState::Denied => Ok(false),
        _ => {
            let state = notification
                .request_permission()
                .map_err(|e| e.to_string())?;
            Ok(matches!(state, PermissionState::Granted))
        }
    }
}

/// Startup path: request permission, then arm the ledger from the persisted
/// settings so an enabled schedule survives an app restart.
pub fn bootstrap<R: tauri::Runtime>(handle: &tauri::AppHandle<R>) -> Result<(), String> {
    if !ensure_permission(handle)? {
        eprintln!("[droplet] notifications not permitted; reminders stay silent");
    }
    let settings = core::read_settings()?;
    if settings.notifications_enabled {
        handle
            .state::<ReminderLedger>()
            .replace_all(core::compute_trigger_times(&settings));
    }
    Ok(())
}

/// Delivery loop: wake a few times per minute and fire at most one toast per
/// armed minute slot.  Runs for the lifetime of the app.
pub fn run_delivery_loop<R: tauri::Runtime>(handle: tauri::AppHandle<R>) {
    let mut last_fired: Option<(u32, u32)> = None;
    loop {
        std::thread::sleep(Duration::from_secs(20));
        let now = chrono::Local::now();
        let slot = (now.hour(), now.minute());
        if last_fired == Some(slot) {
            continue;
        }
        if handle.state::<ReminderLedger>().due_at(slot.0, slot.1) {
            last_fired = Some(slot);
            if let Err(e) = show_reminder(&handle) {
                eprintln!("[droplet] notification error: {}", e);
            }
        }
    }
}

fn show_reminder<R: tauri::Runtime>(handle: &tauri::AppHandle<R>) -> Result<(), String> {
    handle
        .notification()
        .builder()
        .title(REMINDER_TITLE)
        .body(REMINDER_BODY)
        .show()
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32) -> TriggerTime {
        TriggerTime { hour, minute: 0 }
    }

    #[test]
    fn test_replace_all_swaps_the_whole_set() {
        let ledger = ReminderLedger::default();
        ledger.replace_all(vec![t(9), t(12)]);
        ledger.replace_all(vec![t(15)]);
        assert_eq!(ledger.armed(), vec![t(15)]);
    }

    #[test]
    fn test_cancel_all_disarms_everything() {
        let ledger = ReminderLedger::default();
        ledger.replace_all(vec![t(9), t(12)]);
        ledger.cancel_all();
        assert!(ledger.armed().is_empty());
        assert!(!ledger.due_at(9, 0));
    }

    #[test]
    fn test_due_at_matches_exact_slot_only() {
        let ledger = ReminderLedger::default();
        ledger.replace_all(vec![TriggerTime { hour: 9, minute: 30 }]);
        assert!(ledger.due_at(9, 30));
        assert!(!ledger.due_at(9, 0));
        assert!(!ledger.due_at(10, 30));
    }
}
