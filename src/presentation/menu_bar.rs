use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use crate::global_constants::{MENU_CLEAR_CLIPBOARD, MENU_CLIPBOARD};
use crate::presentation::app_theme;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuBarMessage {
    ToggleClipboardMenu,
    ClearClipboard,
}

#[derive(Debug, Default)]
pub struct MenuBar {
    clipboard_menu_open: bool,
}

impl MenuBar {
    pub fn is_open(&self) -> bool {
        self.clipboard_menu_open
    }

    pub fn close(&mut self) {
        self.clipboard_menu_open = false;
    }

    pub fn update(&mut self, message: &MenuBarMessage) {
        match message {
            MenuBarMessage::ToggleClipboardMenu => {
                self.clipboard_menu_open = !self.clipboard_menu_open;
            }
            MenuBarMessage::ClearClipboard => self.close(),
        }
    }

    pub fn render_ui(&self) -> Element<'_, MenuBarMessage> {
        let clipboard_menu = button(text(MENU_CLIPBOARD).size(13))
            .padding([4, 10])
            .style(app_theme::menu_button_style)
            .on_press(MenuBarMessage::ToggleClipboardMenu);

        let bar = container(row![clipboard_menu].spacing(4))
            .width(Length::Fill)
            .padding(2)
            .style(app_theme::menu_surface_style);

        if !self.clipboard_menu_open {
            return bar.into();
        }

        let clear_item = button(text(MENU_CLEAR_CLIPBOARD).size(13))
            .width(Length::Fixed(180.0))
            .padding([6, 12])
            .style(app_theme::danger_menu_item_style)
            .on_press(MenuBarMessage::ClearClipboard);

        let dropdown = container(clear_item)
            .padding(4)
            .style(app_theme::menu_surface_style);

        column![bar, dropdown].spacing(2).into()
    }
}
