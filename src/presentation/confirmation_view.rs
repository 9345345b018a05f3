use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::global_constants::{CONFIRMATION_DISMISS_SECONDS, MESSAGE_CLIPBOARD_CLEARED};
use crate::presentation::app_theme;

pub fn render_confirmation<'a, Message: 'a>() -> Element<'a, Message> {
    let title = text(MESSAGE_CLIPBOARD_CLEARED).size(18);
    let hint = text(format!(
        "This window closes in {} seconds",
        CONFIRMATION_DISMISS_SECONDS
    ))
    .size(12)
    .style(|theme: &iced::Theme| iced::widget::text::Style {
        color: Some(app_theme::status_text_color(theme)),
    });

    container(column![title, hint].spacing(8).align_x(Alignment::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
