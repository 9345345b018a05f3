use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Mirror Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.11, 0.12, 0.14),
                text: Color::from_rgb(0.92, 0.92, 0.94),
                primary: Color::from_rgb(0.24, 0.55, 0.99),
                success: Color::from_rgb(0.2, 0.8, 0.45),
                danger: Color::from_rgb(0.95, 0.35, 0.35),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Mirror Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.97, 0.97, 0.98),
                text: Color::from_rgb(0.12, 0.12, 0.14),
                primary: Color::from_rgb(0.15, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.65, 0.3),
                danger: Color::from_rgb(0.85, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn flat_button(background: Option<Color>, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

/// Top-level entry in the menu bar ("Clipboard").
pub fn menu_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    match status {
        button::Status::Active => flat_button(None, palette.text, false),
        button::Status::Hovered => flat_button(
            Some(Color {
                a: 0.15,
                ..palette.primary
            }),
            palette.text,
            false,
        ),
        button::Status::Pressed => flat_button(
            Some(Color {
                a: 0.3,
                ..palette.primary
            }),
            palette.text,
            true,
        ),
        button::Status::Disabled => flat_button(
            None,
            Color {
                a: 0.4,
                ..palette.text
            },
            false,
        ),
    }
}

/// Destructive entry inside an open menu ("Clear Clipboard").
pub fn danger_menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    match status {
        button::Status::Active => flat_button(None, palette.danger, false),
        button::Status::Hovered => flat_button(Some(palette.danger), Color::WHITE, false),
        button::Status::Pressed => flat_button(
            Some(Color {
                a: 0.8,
                ..palette.danger
            }),
            Color::WHITE,
            true,
        ),
        button::Status::Disabled => flat_button(
            None,
            Color {
                a: 0.4,
                ..palette.danger
            },
            false,
        ),
    }
}

pub fn window_background_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    container::Style {
        background: Some(Background::Color(palette.background)),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

pub fn menu_surface_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.06,
            ..palette.text
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color {
                a: 0.12,
                ..palette.text
            },
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn status_text_color(theme: &Theme) -> Color {
    Color {
        a: 0.6,
        ..theme.palette().text
    }
}
