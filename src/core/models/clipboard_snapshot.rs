use std::sync::{Arc, Mutex, MutexGuard};

/// Last clipboard text the poller has seen. Cloning shares the same value,
/// so the poller thread and the UI thread can both hold a handle.
#[derive(Debug, Clone, Default)]
pub struct ClipboardSnapshot {
    last_seen: Arc<Mutex<String>>,
}

impl ClipboardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `current` and returns true if it differs from the last value.
    /// Compare and store happen under one lock.
    pub fn observe(&self, current: &str) -> bool {
        let mut last_seen = self.lock();
        if *last_seen == current {
            return false;
        }
        last_seen.clear();
        last_seen.push_str(current);
        true
    }

    pub fn reset(&self) {
        self.lock().clear();
    }

    #[allow(dead_code)]
    pub fn current(&self) -> String {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        match self.last_seen.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("[SNAPSHOT] Mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}
