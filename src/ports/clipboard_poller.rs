use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use iced::futures::channel::mpsc;

use crate::core::interfaces::{ClipboardAccess, ClipboardReadError};
use crate::core::models::ClipboardSnapshot;
use crate::global_constants::{CLIPBOARD_POLL_INTERVAL_MS, LOG_TAG_POLLER, POLLER_THREAD_NAME};

/// Stops a running poller. The thread notices at its next iteration.
#[derive(Debug, Clone)]
pub struct PollerHandle {
    stop_requested: Arc<AtomicBool>,
}

impl PollerHandle {
    pub fn stop(&self) {
        log::info!("{} stop requested", LOG_TAG_POLLER);
        self.stop_requested.store(true, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn is_stopped(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }
}

pub struct ClipboardPoller {
    clipboard: Arc<dyn ClipboardAccess>,
    snapshot: ClipboardSnapshot,
    interval: Duration,
    stop_requested: Arc<AtomicBool>,
}

impl ClipboardPoller {
    pub fn build(clipboard: Arc<dyn ClipboardAccess>, snapshot: ClipboardSnapshot) -> Self {
        Self {
            clipboard,
            snapshot,
            interval: Duration::from_millis(CLIPBOARD_POLL_INTERVAL_MS),
            stop_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    #[cfg(test)]
    fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn handle(&self) -> PollerHandle {
        PollerHandle {
            stop_requested: Arc::clone(&self.stop_requested),
        }
    }

    /// One tick: the new text if it changed since the last tick, else `None`.
    pub fn poll_once(&self) -> Option<String> {
        match self.clipboard.read_text() {
            Ok(current) => {
                if self.snapshot.observe(&current) {
                    log::debug!(
                        "{} clipboard changed ({} chars)",
                        LOG_TAG_POLLER,
                        current.chars().count()
                    );
                    Some(current)
                } else {
                    None
                }
            }
            Err(ClipboardReadError::NoText) => None,
            Err(error @ ClipboardReadError::Unavailable(_)) => {
                log::debug!("{} skipping tick: {}", LOG_TAG_POLLER, error);
                None
            }
        }
    }

    /// Runs until stopped or until the receiving side is dropped.
    pub fn run(self, sender: mpsc::UnboundedSender<String>) {
        log::info!(
            "{} polling clipboard every {:?}",
            LOG_TAG_POLLER,
            self.interval
        );

        while !self.stop_requested.load(Ordering::SeqCst) {
            if let Some(changed) = self.poll_once() {
                if sender.unbounded_send(changed).is_err() {
                    log::info!("{} receiver dropped, stopping", LOG_TAG_POLLER);
                    break;
                }
            }
            std::thread::sleep(self.interval);
        }

        log::info!("{} polling loop finished", LOG_TAG_POLLER);
    }

    /// Starts the loop on a detached thread. Changed values arrive on the
    /// returned receiver in the order they were detected.
    pub fn spawn(self) -> anyhow::Result<(PollerHandle, mpsc::UnboundedReceiver<String>)> {
        let (sender, receiver) = mpsc::unbounded();
        let handle = self.handle();

        std::thread::Builder::new()
            .name(POLLER_THREAD_NAME.to_string())
            .spawn(move || self.run(sender))?;

        Ok((handle, receiver))
    }
}
