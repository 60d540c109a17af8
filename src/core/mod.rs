mod intake;
mod paths;
mod profile;
mod scheduler;
mod settings;

pub use intake::daily_target_ml;
pub use profile::{
    read_profile, save_profile, validate_profile, UserProfile, ValidationError, MAX_AGE, MAX_WEIGHT,
};
pub use scheduler::{compute_trigger_times, TriggerTime};
pub use settings::{read_settings, write_settings, ReminderSettings};
