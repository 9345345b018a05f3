mod clipboard_snapshot;
mod user_settings;

pub use clipboard_snapshot::ClipboardSnapshot;
pub use user_settings::{ThemeMode, UserSettings};
