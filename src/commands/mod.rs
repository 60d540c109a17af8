mod profile;
mod reminders;
mod settings;

pub use profile::*;
pub use reminders::*;
pub use settings::*;
