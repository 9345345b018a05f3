use iced::widget::{column, container, scrollable, text, text_editor};
use iced::{Element, Length};

use crate::global_constants::MESSAGE_EMPTY_PLACEHOLDER;
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum ClipboardViewMessage {
    Editor(text_editor::Action),
}

/// Scrollable mirror of the clipboard text.
///
/// The editor accepts cursor movement, selection and scrolling, but edits
/// are dropped: only [`ClipboardView::replace_text`] and
/// [`ClipboardView::clear`] change what is shown.
pub struct ClipboardView {
    content: text_editor::Content,
    displayed_text: String,
    char_count: usize,
    applied_updates: u64,
}

impl ClipboardView {
    pub fn build() -> Self {
        Self {
            content: text_editor::Content::new(),
            displayed_text: String::new(),
            char_count: 0,
            applied_updates: 0,
        }
    }

    pub fn replace_text(&mut self, value: &str) {
        log::debug!(
            "[CLIPBOARD_VIEW] Replacing displayed text ({} bytes)",
            value.len()
        );
        self.content = text_editor::Content::with_text(value);
        self.displayed_text = value.to_string();
        self.char_count = value.chars().count();
        self.applied_updates += 1;
    }

    pub fn clear(&mut self) {
        self.replace_text("");
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed_text
    }

    /// Number of times the displayed text has been replaced.
    pub fn applied_updates(&self) -> u64 {
        self.applied_updates
    }

    pub fn update(&mut self, message: ClipboardViewMessage) {
        match message {
            ClipboardViewMessage::Editor(action) => {
                if action.is_edit() {
                    log::debug!("[CLIPBOARD_VIEW] Ignoring edit action");
                    return;
                }
                self.content.perform(action);
            }
        }
    }

    fn status_line(&self) -> String {
        match self.char_count {
            0 => "Clipboard is empty".to_string(),
            1 => "1 character".to_string(),
            count => format!("{} characters", count),
        }
    }

    pub fn render_ui(&self) -> Element<'_, ClipboardViewMessage> {
        let editor = text_editor(&self.content)
            .placeholder(MESSAGE_EMPTY_PLACEHOLDER)
            .on_action(ClipboardViewMessage::Editor)
            .padding(12)
            .size(14);

        let status = text(self.status_line())
            .size(12)
            .style(|theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::status_text_color(theme)),
            });

        column![
            scrollable(editor).height(Length::Fill),
            container(status).padding([4, 8]),
        ]
        .spacing(4)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text_editor::{Action, Edit, Motion};

    #[test]
    fn test_new_view_is_empty() {
        let view = ClipboardView::build();

        assert_eq!(view.displayed_text(), "");
        assert_eq!(view.applied_updates(), 0);
        assert_eq!(view.status_line(), "Clipboard is empty");
    }

    #[test]
    fn test_replace_text_overwrites_instead_of_appending() {
        let mut view = ClipboardView::build();

        view.replace_text("first");
        view.replace_text("second");

        assert_eq!(view.displayed_text(), "second");
        assert_eq!(view.applied_updates(), 2);
    }

    #[test]
    fn test_status_line_counts_characters_not_bytes() {
        let mut view = ClipboardView::build();

        view.replace_text("héllo");
        assert_eq!(view.status_line(), "5 characters");

        view.replace_text("é");
        assert_eq!(view.status_line(), "1 character");
    }

    #[test]
    fn test_clear_empties_display() {
        let mut view = ClipboardView::build();
        view.replace_text("something");

        view.clear();

        assert_eq!(view.displayed_text(), "");
        assert_eq!(view.status_line(), "Clipboard is empty");
    }

    #[test]
    fn test_edit_actions_are_ignored() {
        let mut view = ClipboardView::build();
        view.replace_text("mirror");

        view.update(ClipboardViewMessage::Editor(Action::Edit(Edit::Insert('x'))));
        view.update(ClipboardViewMessage::Editor(Action::Edit(Edit::Backspace)));

        assert_eq!(view.displayed_text(), "mirror");
        assert_eq!(view.content.text().trim_end(), "mirror");
    }

    #[test]
    fn test_navigation_actions_are_applied() {
        let mut view = ClipboardView::build();
        view.replace_text("line one\nline two");

        view.update(ClipboardViewMessage::Editor(Action::Move(Motion::DocumentEnd)));
        view.update(ClipboardViewMessage::Editor(Action::SelectAll));

        assert_eq!(view.displayed_text(), "line one\nline two");
        assert!(view.content.selection().is_some());
    }

    #[test]
    fn test_large_text_is_displayed() {
        let mut view = ClipboardView::build();
        let large = "line of clipboard text\n".repeat(20_000);

        view.replace_text(&large);

        assert_eq!(view.displayed_text().len(), large.len());
    }
}
