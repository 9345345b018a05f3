use anyhow::Result;
use thiserror::Error;

/// Reasons a clipboard read produced no text. Every variant is transient:
/// the poller skips the tick and tries again on the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardReadError {
    #[error("clipboard holds no text content")]
    NoText,
    #[error("clipboard backend unavailable: {0}")]
    Unavailable(String),
}

pub trait ClipboardAccess: Send + Sync {
    fn read_text(&self) -> std::result::Result<String, ClipboardReadError>;
    fn clear(&self) -> Result<()>;
    #[allow(dead_code)]
    fn write_text(&self, value: &str) -> Result<()>;
}
