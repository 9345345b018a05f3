pub const APPLICATION_NAME: &str = "Clipboard Mirror";
pub const APPLICATION_DIR_NAME: &str = "clipboard-mirror";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_POLLER: &str = "[POLLER]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";

pub const CLIPBOARD_POLL_INTERVAL_MS: u64 = 100;
pub const CONFIRMATION_DISMISS_SECONDS: u64 = 3;
pub const TRAY_POLL_INTERVAL_MS: u64 = 100;
pub const POLLER_THREAD_NAME: &str = "clipboard-poller";

pub const MAIN_WINDOW_MIN_WIDTH: f32 = 420.0;
pub const MAIN_WINDOW_MIN_HEIGHT: f32 = 240.0;
pub const DEFAULT_WINDOW_WIDTH: f32 = 560.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 420.0;
pub const CONFIRMATION_WINDOW_WIDTH: f32 = 300.0;
pub const CONFIRMATION_WINDOW_HEIGHT: f32 = 110.0;

pub const MENU_CLIPBOARD: &str = "Clipboard";
pub const MENU_CLEAR_CLIPBOARD: &str = "Clear Clipboard";
pub const MENU_SHOW_WINDOW: &str = "Show Window";
pub const MENU_QUIT: &str = "Quit";

pub const MESSAGE_CLIPBOARD_CLEARED: &str = "Clipboard cleared";
pub const MESSAGE_EMPTY_PLACEHOLDER: &str = "Copy some text and it will appear here...";
