mod arboard_clipboard;
#[cfg(test)]
mod in_memory_clipboard;

pub use arboard_clipboard::ArboardClipboard;
#[cfg(test)]
pub use in_memory_clipboard::InMemoryClipboard;
