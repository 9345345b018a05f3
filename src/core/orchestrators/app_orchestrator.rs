use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use iced::widget::{column, container, text};
use iced::window::{self, Id};
use iced::{Element, Length, Size, Task, Theme};

use crate::core::interfaces::ClipboardAccess;
use crate::core::models::{ClipboardSnapshot, UserSettings};
use crate::global_constants::{
    APPLICATION_NAME, CONFIRMATION_DISMISS_SECONDS, CONFIRMATION_WINDOW_HEIGHT,
    CONFIRMATION_WINDOW_WIDTH, LOG_TAG_ORCHESTRATOR, MAIN_WINDOW_MIN_HEIGHT,
    MAIN_WINDOW_MIN_WIDTH, MESSAGE_CLIPBOARD_CLEARED,
};
use crate::ports::{PollerHandle, TrayEvent};
use crate::presentation::{
    app_theme, render_confirmation, ClipboardView, ClipboardViewMessage, MenuBar, MenuBarMessage,
};

pub enum AppWindow {
    Main,
    Confirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    ShowingConfirmation(Id),
}

pub struct AppOrchestrator {
    clipboard: Arc<dyn ClipboardAccess>,
    snapshot: ClipboardSnapshot,
    settings: UserSettings,
    theme: Theme,
    windows: HashMap<Id, AppWindow>,
    main_window_id: Option<Id>,
    state: ShellState,
    clipboard_view: ClipboardView,
    menu_bar: MenuBar,
    poller: Option<PollerHandle>,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    ClipboardChanged(String),
    ClipboardView(ClipboardViewMessage),
    MenuBar(MenuBarMessage),
    ClearClipboard,
    DismissConfirmation(Id),
    WindowClosed(Id),
    TrayEvent(TrayEvent),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::OpenMainWindow => write!(f, "OpenMainWindow"),
            OrchestratorMessage::ClipboardChanged(value) => {
                write!(f, "ClipboardChanged({} chars)", value.chars().count())
            }
            OrchestratorMessage::ClipboardView(_) => write!(f, "ClipboardView"),
            OrchestratorMessage::MenuBar(msg) => write!(f, "MenuBar({:?})", msg),
            OrchestratorMessage::ClearClipboard => write!(f, "ClearClipboard"),
            OrchestratorMessage::DismissConfirmation(id) => {
                write!(f, "DismissConfirmation({:?})", id)
            }
            OrchestratorMessage::WindowClosed(id) => write!(f, "WindowClosed({:?})", id),
            OrchestratorMessage::TrayEvent(event) => write!(f, "TrayEvent({:?})", event),
        }
    }
}

pub fn main_window_settings(settings: &UserSettings) -> window::Settings {
    let (width, height) = settings.window_size();
    window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_MIN_HEIGHT)),
        position: window::Position::Centered,
        resizable: true,
        level: if settings.always_on_top {
            window::Level::AlwaysOnTop
        } else {
            window::Level::Normal
        },
        ..Default::default()
    }
}

/// Borderless and deaf to close requests: only the timer closes it.
pub fn confirmation_window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(CONFIRMATION_WINDOW_WIDTH, CONFIRMATION_WINDOW_HEIGHT),
        position: window::Position::Centered,
        resizable: false,
        decorations: false,
        level: window::Level::AlwaysOnTop,
        exit_on_close_request: false,
        ..Default::default()
    }
}

pub async fn dismiss_after(window_id: Id, delay: Duration) -> OrchestratorMessage {
    tokio::time::sleep(delay).await;
    OrchestratorMessage::DismissConfirmation(window_id)
}

impl AppOrchestrator {
    pub fn build(
        clipboard: Arc<dyn ClipboardAccess>,
        snapshot: ClipboardSnapshot,
        settings: UserSettings,
    ) -> Self {
        let theme = app_theme::get_theme(&settings.theme_mode);
        Self {
            clipboard,
            snapshot,
            settings,
            theme,
            windows: HashMap::new(),
            main_window_id: None,
            state: ShellState::Idle,
            clipboard_view: ClipboardView::build(),
            menu_bar: MenuBar::default(),
            poller: None,
        }
    }

    pub fn attach_poller(&mut self, poller: PollerHandle) {
        self.poller = Some(poller);
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    #[allow(dead_code)]
    pub fn clipboard_view(&self) -> &ClipboardView {
        &self.clipboard_view
    }

    pub fn get_window_title(&self, window_id: Id) -> String {
        match self.windows.get(&window_id) {
            Some(AppWindow::Confirmation) => MESSAGE_CLIPBOARD_CLEARED.to_string(),
            _ => APPLICATION_NAME.to_string(),
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message);

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::ClipboardChanged(value) => {
                self.clipboard_view.replace_text(&value);
                Task::none()
            }
            OrchestratorMessage::ClipboardView(view_msg) => {
                self.clipboard_view.update(view_msg);
                Task::none()
            }
            OrchestratorMessage::MenuBar(menu_msg) => {
                self.menu_bar.update(&menu_msg);
                if menu_msg == MenuBarMessage::ClearClipboard {
                    return self.handle_clear_clipboard();
                }
                Task::none()
            }
            OrchestratorMessage::ClearClipboard => self.handle_clear_clipboard(),
            OrchestratorMessage::DismissConfirmation(id) => self.handle_dismiss_confirmation(id),
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
            OrchestratorMessage::TrayEvent(event) => self.handle_tray_event(event),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        let content: Element<'_, OrchestratorMessage> = match self.windows.get(&window_id) {
            Some(AppWindow::Main) => self.render_main_window(),
            Some(AppWindow::Confirmation) => render_confirmation(),
            None => text("Loading...").into(),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(app_theme::window_background_style)
            .into()
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if let Some(id) = self.main_window_id {
            log::debug!("{} Main window already open, focusing", LOG_TAG_ORCHESTRATOR);
            return window::minimize(id, false).chain(window::gain_focus(id));
        }

        let (id, task) = window::open(main_window_settings(&self.settings));

        self.main_window_id = Some(id);
        self.windows.insert(id, AppWindow::Main);
        log::info!(
            "{} Main window created with ID: {:?}",
            LOG_TAG_ORCHESTRATOR,
            id
        );
        task.discard()
    }

    fn handle_clear_clipboard(&mut self) -> Task<OrchestratorMessage> {
        log::info!("{} Clearing clipboard", LOG_TAG_ORCHESTRATOR);
        self.menu_bar.close();

        if let Err(e) = self.clipboard.clear() {
            log::error!("{} {:#}", LOG_TAG_ORCHESTRATOR, e);
        }
        self.clipboard_view.clear();
        self.snapshot.reset();

        let close_previous = match self.state {
            ShellState::ShowingConfirmation(previous_id) => {
                log::debug!(
                    "{} Replacing confirmation window {:?}",
                    LOG_TAG_ORCHESTRATOR,
                    previous_id
                );
                self.windows.remove(&previous_id);
                window::close(previous_id)
            }
            ShellState::Idle => Task::none(),
        };

        let (id, open_task) = window::open(confirmation_window_settings());
        self.windows.insert(id, AppWindow::Confirmation);
        self.state = ShellState::ShowingConfirmation(id);

        Task::batch(vec![
            close_previous,
            open_task.discard(),
            Task::future(dismiss_after(
                id,
                Duration::from_secs(CONFIRMATION_DISMISS_SECONDS),
            )),
        ])
    }

    fn handle_dismiss_confirmation(&mut self, id: Id) -> Task<OrchestratorMessage> {
        if self.state != ShellState::ShowingConfirmation(id) {
            log::debug!(
                "{} Ignoring stale dismiss for {:?}",
                LOG_TAG_ORCHESTRATOR,
                id
            );
            return Task::none();
        }

        log::info!("{} Closing confirmation window", LOG_TAG_ORCHESTRATOR);
        self.state = ShellState::Idle;
        self.windows.remove(&id);
        window::close(id)
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("{} Window closed: {:?}", LOG_TAG_ORCHESTRATOR, id);
        self.windows.remove(&id);

        if Some(id) == self.main_window_id {
            self.main_window_id = None;
            if let Some(poller) = self.poller.take() {
                poller.stop();
            }
            log::info!("{} Main window closed, exiting", LOG_TAG_ORCHESTRATOR);
            return iced::exit();
        }

        if self.state == ShellState::ShowingConfirmation(id) {
            self.state = ShellState::Idle;
        }
        Task::none()
    }

    fn handle_tray_event(&mut self, event: TrayEvent) -> Task<OrchestratorMessage> {
        log::info!("{} Handling tray event: {:?}", LOG_TAG_ORCHESTRATOR, event);

        match event {
            TrayEvent::ClearClipboard => self.handle_clear_clipboard(),
            TrayEvent::ShowWindow => self.handle_open_main_window(),
            TrayEvent::Quit => {
                if let Some(poller) = self.poller.take() {
                    poller.stop();
                }
                iced::exit()
            }
        }
    }

    fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        column![
            self.menu_bar.render_ui().map(OrchestratorMessage::MenuBar),
            self.clipboard_view
                .render_ui()
                .map(OrchestratorMessage::ClipboardView),
        ]
        .spacing(6)
        .padding(8)
        .into()
    }
}
