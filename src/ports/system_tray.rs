#[cfg(not(target_os = "linux"))]
use tray_icon::menu::{Menu, MenuEvent, MenuItem};
#[cfg(not(target_os = "linux"))]
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

#[cfg(not(target_os = "linux"))]
use crate::global_constants::APPLICATION_NAME;
use crate::global_constants::{MENU_CLEAR_CLIPBOARD, MENU_QUIT, MENU_SHOW_WINDOW};

const TRAY_ICON_SIZE: u32 = 32;
const TRAY_ICON_RGBA: [u8; 4] = [0x3d, 0x8b, 0xfd, 0xff];

#[cfg(not(target_os = "linux"))]
pub struct SystemTray {
    _tray_icon: TrayIcon,
    _menu: Menu,
    _clear_item: MenuItem,
    _show_window_item: MenuItem,
    _quit_item: MenuItem,
}

/// tray-icon needs a GTK main loop on Linux, which iced does not run.
#[cfg(target_os = "linux")]
pub struct SystemTray;

#[derive(Debug, Clone, PartialEq)]
pub enum TrayEvent {
    ClearClipboard,
    ShowWindow,
    Quit,
}

#[cfg(not(target_os = "linux"))]
impl SystemTray {
    pub fn build() -> anyhow::Result<Self> {
        log::info!("[SYSTEM_TRAY] Initializing system tray");

        let icon = Icon::from_rgba(build_icon_pixels(), TRAY_ICON_SIZE, TRAY_ICON_SIZE)?;

        let menu = Menu::new();
        let clear_item = MenuItem::with_id(MENU_CLEAR_CLIPBOARD, MENU_CLEAR_CLIPBOARD, true, None);
        let show_window_item = MenuItem::with_id(MENU_SHOW_WINDOW, MENU_SHOW_WINDOW, true, None);
        let quit_item = MenuItem::with_id(MENU_QUIT, MENU_QUIT, true, None);

        menu.append(&clear_item)?;
        menu.append(&show_window_item)?;
        menu.append(&quit_item)?;

        let tray_icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu.clone()))
            .with_tooltip(APPLICATION_NAME)
            .with_icon(icon)
            .build()?;

        log::info!("[SYSTEM_TRAY] System tray initialized successfully");

        Ok(Self {
            _tray_icon: tray_icon,
            _menu: menu,
            _clear_item: clear_item,
            _show_window_item: show_window_item,
            _quit_item: quit_item,
        })
    }

    pub fn poll_events() -> Option<TrayEvent> {
        if let Ok(event) = MenuEvent::receiver().try_recv() {
            log::debug!("[SYSTEM_TRAY] Received menu event: {:?}", event.id);
            return TrayEvent::from_menu_id(event.id.0.as_ref());
        }
        None
    }
}

#[cfg(target_os = "linux")]
impl SystemTray {
    pub fn build() -> anyhow::Result<Self> {
        anyhow::bail!("system tray is not supported on Linux")
    }

    pub fn poll_events() -> Option<TrayEvent> {
        None
    }
}

impl TrayEvent {
    #[cfg_attr(target_os = "linux", allow(dead_code))]
    fn from_menu_id(menu_id: &str) -> Option<Self> {
        match menu_id {
            MENU_CLEAR_CLIPBOARD => Some(TrayEvent::ClearClipboard),
            MENU_SHOW_WINDOW => Some(TrayEvent::ShowWindow),
            MENU_QUIT => Some(TrayEvent::Quit),
            unknown => {
                log::warn!("[SYSTEM_TRAY] Unknown menu event: {}", unknown);
                None
            }
        }
    }
}

#[cfg_attr(target_os = "linux", allow(dead_code))]
fn build_icon_pixels() -> Vec<u8> {
    let pixel_count = (TRAY_ICON_SIZE * TRAY_ICON_SIZE) as usize;
    TRAY_ICON_RGBA.repeat(pixel_count)
}
