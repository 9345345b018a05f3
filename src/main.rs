#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

#[cfg(test)]
mod clipboard_scenario_tests;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    daemon(
        app::ClipboardMirrorApp::build,
        app::ClipboardMirrorApp::handle_update,
        app::ClipboardMirrorApp::render_view,
    )
    .title(app::ClipboardMirrorApp::window_title)
    .theme(app::ClipboardMirrorApp::theme)
    .subscription(app::ClipboardMirrorApp::handle_subscription)
    .run()
}
