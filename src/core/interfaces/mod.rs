mod clipboard_access;

pub use clipboard_access::{ClipboardAccess, ClipboardReadError};
