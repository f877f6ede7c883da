use ratatui::prelude::*;
use ratatui::widgets::{Tabs, Widget};

#[derive(Clone)]
pub struct TabBarWidget<'a> {
    titles: &'a [&'a str],
    selected: Option<usize>,
}

impl<'a> TabBarWidget<'a> {
    pub fn new(titles: &'a [&'a str], selected: usize) -> Self {
        Self {
            titles,
            selected: Some(selected),
        }
    }

    /// Tab bar with no highlighted entry
    pub fn plain(titles: &'a [&'a str]) -> Self {
        Self {
            titles,
            selected: None,
        }
    }
}

impl Widget for TabBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = Tabs::new(self.titles.iter().copied()).style(Style::default().bg(Color::Black));
        let tabs = match self.selected {
            Some(selected) => tabs
                .select(selected)
                .highlight_style(Style::default().reversed()),
            None => tabs.highlight_style(Style::default()),
        };

        tabs.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::buffer_lines;

    #[test]
    fn test_render_titles() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buffer = Buffer::empty(area);

        TabBarWidget::new(&["어디가 좋을까?", "여기에 뭐할까?"], 0).render(area, &mut buffer);

        let line = &buffer_lines(&buffer)[0];
        assert!(line.contains("어디가 좋을까?"));
        assert!(line.contains("여기에 뭐할까?"));
    }

    #[test]
    fn test_selected_tab_is_reversed() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buffer = Buffer::empty(area);

        TabBarWidget::new(&["A", "B"], 1).render(area, &mut buffer);

        // " A │ B ": the second title sits at column 5
        assert!(buffer[(5, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(1, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_plain_has_no_highlight() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buffer = Buffer::empty(area);

        TabBarWidget::plain(&["A", "B"]).render(area, &mut buffer);

        assert!(!buffer[(1, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(5, 0)].modifier.contains(Modifier::REVERSED));
    }
}
