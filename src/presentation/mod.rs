pub mod app_theme;
mod clipboard_view;
mod confirmation_view;
mod menu_bar;

pub use clipboard_view::{ClipboardView, ClipboardViewMessage};
pub use confirmation_view::render_confirmation;
pub use menu_bar::{MenuBar, MenuBarMessage};
