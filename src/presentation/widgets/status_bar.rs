use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::status_bar::StatusBar;

/// Two-line footer: key hints for the mounted screen, then the latest message
pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
    hints: &'a str,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status_bar: &'a StatusBar, hints: &'a str) -> Self {
        Self { status_bar, hints }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [hints_area, message_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let hints = Span::styled(self.hints, Style::default().fg(Color::Gray).italic());
        Paragraph::new(hints)
            .style(Style::default().bg(Color::Black))
            .render(hints_area, buf);

        Paragraph::new(self.status_bar.message().unwrap_or_default()).render(message_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::buffer_lines;
    use crate::model::status_bar::Message;

    #[test]
    fn test_render_hints_only() {
        let status_bar = StatusBar::default();
        let area = Rect::new(0, 0, 20, 2);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(&status_bar, "q: quit").render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert_eq!(lines[0].trim_end(), "q: quit");
        assert_eq!(lines[1].trim_end(), "");
    }

    #[test]
    fn test_render_with_error_message() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::Failed {
            label: "Terminal".to_string(),
            message: "Connection failed".to_string(),
        });
        let area = Rect::new(0, 0, 80, 2);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(&status_bar, "").render(area, &mut buffer);

        assert!(buffer_lines(&buffer)[1].contains("[ERR: Terminal] Connection failed"));
    }
}
