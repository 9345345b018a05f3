#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::adapters::InMemoryClipboard;
    use crate::core::interfaces::ClipboardAccess;
    use crate::core::models::{ClipboardSnapshot, UserSettings};
    use crate::core::orchestrators::app_orchestrator::{
        AppOrchestrator, OrchestratorMessage, ShellState,
    };
    use crate::ports::ClipboardPoller;

    struct Harness {
        clipboard: Arc<InMemoryClipboard>,
        poller: ClipboardPoller,
        orchestrator: AppOrchestrator,
    }

    impl Harness {
        fn new() -> Self {
            let clipboard = Arc::new(InMemoryClipboard::new());
            let snapshot = ClipboardSnapshot::new();
            let poller = ClipboardPoller::build(clipboard.clone(), snapshot.clone());
            let orchestrator =
                AppOrchestrator::build(clipboard.clone(), snapshot, UserSettings::default());
            Self {
                clipboard,
                poller,
                orchestrator,
            }
        }

        /// One poll tick followed by delivery to the UI, as the event loop would.
        fn tick(&mut self) {
            if let Some(changed) = self.poller.poll_once() {
                let _ = self
                    .orchestrator
                    .update(OrchestratorMessage::ClipboardChanged(changed));
            }
        }

        fn displayed(&self) -> &str {
            self.orchestrator.clipboard_view().displayed_text()
        }

        fn updates(&self) -> u64 {
            self.orchestrator.clipboard_view().applied_updates()
        }
    }

    #[test]
    fn test_hello_duplicate_clear_hello_scenario() {
        let mut harness = Harness::new();

        harness.tick();
        assert_eq!(harness.displayed(), "");
        assert_eq!(harness.updates(), 0);

        harness.clipboard.copy("hello");
        harness.tick();
        assert_eq!(harness.displayed(), "hello");
        assert_eq!(harness.updates(), 1);

        harness.clipboard.copy("hello");
        harness.tick();
        assert_eq!(harness.displayed(), "hello");
        assert_eq!(harness.updates(), 1);

        let _ = harness
            .orchestrator
            .update(OrchestratorMessage::ClearClipboard);
        assert_eq!(harness.displayed(), "");
        assert!(harness.clipboard.read_text().is_err());
        assert!(matches!(
            harness.orchestrator.state(),
            ShellState::ShowingConfirmation(_)
        ));

        harness.tick();
        assert_eq!(harness.displayed(), "");

        harness.clipboard.copy("hello");
        harness.tick();
        assert_eq!(harness.displayed(), "hello");
    }

    #[test]
    fn test_distinct_writes_are_displayed_in_order() {
        let mut harness = Harness::new();
        let writes = ["alpha", "beta", "gamma", "alpha"];
        let mut seen = Vec::new();

        for value in writes {
            harness.clipboard.copy(value);
            harness.tick();
            seen.push(harness.displayed().to_string());
        }

        assert_eq!(seen, writes);
        assert_eq!(harness.updates(), writes.len() as u64);
    }

    #[test]
    fn test_transient_read_failures_do_not_disturb_display() {
        let mut harness = Harness::new();
        harness.clipboard.copy("stable");
        harness.tick();

        harness.clipboard.copy("next");
        harness.clipboard.fail_next_reads(3);
        for _ in 0..3 {
            harness.tick();
            assert_eq!(harness.displayed(), "stable");
        }

        harness.tick();
        assert_eq!(harness.displayed(), "next");
    }

    #[test]
    fn test_large_clipboard_content_reaches_display() {
        let mut harness = Harness::new();
        let large = "0123456789abcdef\n".repeat(16_384);

        harness.clipboard.copy(&large);
        harness.tick();

        assert_eq!(harness.displayed().len(), large.len());
    }
}
