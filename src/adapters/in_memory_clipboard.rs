use std::sync::Mutex;

use anyhow::{bail, Result};

use crate::core::interfaces::{ClipboardAccess, ClipboardReadError};

/// Clipboard double for tests: holds an optional string and can be told to
/// fail the next few reads or every clear.
#[derive(Default)]
pub struct InMemoryClipboard {
    content: Mutex<Option<String>>,
    failing_reads: Mutex<u32>,
    fail_clear: Mutex<bool>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&self, value: &str) {
        *self.content.lock().unwrap() = Some(value.to_string());
    }

    pub fn contents(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    pub fn fail_next_reads(&self, count: u32) {
        *self.failing_reads.lock().unwrap() = count;
    }

    pub fn fail_clear(&self) {
        *self.fail_clear.lock().unwrap() = true;
    }
}

impl ClipboardAccess for InMemoryClipboard {
    fn read_text(&self) -> Result<String, ClipboardReadError> {
        let mut failing_reads = self.failing_reads.lock().unwrap();
        if *failing_reads > 0 {
            *failing_reads -= 1;
            return Err(ClipboardReadError::Unavailable(
                "simulated backend failure".to_string(),
            ));
        }

        self.content
            .lock()
            .unwrap()
            .clone()
            .ok_or(ClipboardReadError::NoText)
    }

    fn clear(&self) -> Result<()> {
        if *self.fail_clear.lock().unwrap() {
            bail!("simulated clear failure");
        }
        *self.content.lock().unwrap() = None;
        Ok(())
    }

    fn write_text(&self, value: &str) -> Result<()> {
        self.copy(value);
        Ok(())
    }
}
