use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::core::interfaces::{ClipboardAccess, ClipboardReadError};
use crate::global_constants::LOG_TAG_CLIPBOARD;

/// System clipboard backed by `arboard`.
///
/// The handle is opened lazily and kept alive between calls; on Linux the
/// owning handle must outlive any text we place on the clipboard. A handle
/// that reports a backend failure is dropped and reopened on the next call.
pub struct ArboardClipboard {
    clipboard: Mutex<Option<Clipboard>>,
}

impl ArboardClipboard {
    pub fn initialize() -> Self {
        log::debug!("{} initializing arboard clipboard", LOG_TAG_CLIPBOARD);
        Self {
            clipboard: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Clipboard>> {
        match self.clipboard.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn with_clipboard<T>(
        &self,
        operation: impl FnOnce(&mut Clipboard) -> Result<T, arboard::Error>,
    ) -> Result<T, arboard::Error> {
        let mut slot = self.lock();
        if slot.is_none() {
            *slot = Some(Clipboard::new()?);
        }
        let Some(clipboard) = slot.as_mut() else {
            return Err(arboard::Error::ClipboardNotSupported);
        };

        let result = operation(clipboard);
        if let Err(ref error) = result {
            if !matches!(error, arboard::Error::ContentNotAvailable) {
                log::debug!(
                    "{} dropping clipboard handle after error: {}",
                    LOG_TAG_CLIPBOARD,
                    error
                );
                *slot = None;
            }
        }
        result
    }
}

impl ClipboardAccess for ArboardClipboard {
    fn read_text(&self) -> Result<String, ClipboardReadError> {
        self.with_clipboard(|clipboard| clipboard.get_text())
            .map_err(|error| match error {
                arboard::Error::ContentNotAvailable => ClipboardReadError::NoText,
                other => ClipboardReadError::Unavailable(other.to_string()),
            })
    }

    fn clear(&self) -> Result<()> {
        self.with_clipboard(|clipboard| clipboard.clear())
            .context("Failed to clear clipboard")?;
        log::info!("{} clipboard cleared", LOG_TAG_CLIPBOARD);
        Ok(())
    }

    fn write_text(&self, value: &str) -> Result<()> {
        self.with_clipboard(|clipboard| clipboard.set_text(value))
            .context("Failed to write text to clipboard")?;
        log::info!(
            "{} clipboard updated ({} chars)",
            LOG_TAG_CLIPBOARD,
            value.chars().count()
        );
        Ok(())
    }
}
