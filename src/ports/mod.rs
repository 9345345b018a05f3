mod clipboard_poller;
pub mod system_tray;

pub use clipboard_poller::{ClipboardPoller, PollerHandle};
pub use system_tray::{SystemTray, TrayEvent};
