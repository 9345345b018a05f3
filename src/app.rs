use std::sync::Arc;
use std::time::Duration;

use iced::window::Id;
use iced::{Element, Task, Theme};

use crate::adapters::ArboardClipboard;
use crate::core::interfaces::ClipboardAccess;
use crate::core::models::{ClipboardSnapshot, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants::{LOG_TAG_APP, TRAY_POLL_INTERVAL_MS};
use crate::ports::{ClipboardPoller, SystemTray};

pub struct ClipboardMirrorApp {
    orchestrator: AppOrchestrator,
    tray: Option<SystemTray>,
}

impl ClipboardMirrorApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let snapshot = ClipboardSnapshot::new();
        let ui_clipboard: Arc<dyn ClipboardAccess> = Arc::new(ArboardClipboard::initialize());
        let poller_clipboard: Arc<dyn ClipboardAccess> = Arc::new(ArboardClipboard::initialize());

        let tray = if settings.show_tray_icon {
            match SystemTray::build() {
                Ok(tray) => Some(tray),
                Err(e) => {
                    log::error!("{} Failed to initialize system tray: {}", LOG_TAG_APP, e);
                    None
                }
            }
        } else {
            log::debug!("{} System tray disabled by settings", LOG_TAG_APP);
            None
        };

        let mut orchestrator = AppOrchestrator::build(ui_clipboard, snapshot.clone(), settings);
        let mut tasks = vec![Task::done(OrchestratorMessage::OpenMainWindow)];

        match ClipboardPoller::build(poller_clipboard, snapshot).spawn() {
            Ok((handle, changes)) => {
                orchestrator.attach_poller(handle);
                tasks.push(Task::run(changes, OrchestratorMessage::ClipboardChanged));
            }
            Err(e) => {
                log::error!("{} Failed to start clipboard poller: {}", LOG_TAG_APP, e);
            }
        }

        (
            Self {
                orchestrator,
                tray,
            },
            Task::batch(tasks),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, window_id: Id) -> String {
        self.orchestrator.get_window_title(window_id)
    }

    pub fn theme(&self, _window_id: Id) -> Theme {
        self.orchestrator.theme()
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        let mut subscriptions = vec![iced::event::listen_with(|event, _status, id| {
            if let iced::Event::Window(window::Event::Closed) = event {
                return Some(OrchestratorMessage::WindowClosed(id));
            }
            None
        })];

        if self.tray.is_some() {
            subscriptions.push(iced::Subscription::run(|| {
                iced::stream::channel(
                    10,
                    |mut output: futures::channel::mpsc::Sender<OrchestratorMessage>| async move {
                        loop {
                            tokio::time::sleep(Duration::from_millis(TRAY_POLL_INTERVAL_MS))
                                .await;
                            if let Some(event) = SystemTray::poll_events() {
                                let _ = output.try_send(OrchestratorMessage::TrayEvent(event));
                            }
                        }
                    },
                )
            }));
        }

        iced::Subscription::batch(subscriptions)
    }
}
