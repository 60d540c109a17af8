pub mod core;
pub mod notify;

mod commands;

// ── App Entry ────────────────────────────────────────────────────────────────

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::*;

    tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .setup(|app| {
            use tauri::Manager;

            app.manage(notify::ReminderLedger::default());

            // Ask for notification permission and arm any stored schedule on
            // a background thread so startup never blocks the UI.  The same
            // thread then becomes the delivery loop.
            let handle = app.handle().clone();
            std::thread::spawn(move || {
                if let Err(e) = notify::bootstrap(&handle) {
                    eprintln!("[droplet] reminder bootstrap error: {}", e);
                }
                notify::run_delivery_loop(handle);
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            read_profile,
            save_profile,
            daily_target,
            read_settings,
            write_settings,
            preview_schedule,
            notification_permission,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
