use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::domain::{card::Card, text::fit_width};

/// Colored card face in the carousel. The centered card gets a heavy border
/// and shows its category.
pub struct CardWidget<'a> {
    card: &'a Card,
    centered: bool,
}

impl<'a> CardWidget<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            centered: false,
        }
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_type = if self.centered {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let block = Block::bordered()
            .border_type(border_type)
            .style(Style::default().bg(self.card.fill()).fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.centered || inner.height == 0 {
            return;
        }
        if let Some(category) = self.card.category() {
            let [_, row, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(inner);
            Paragraph::new(fit_width(category.display_name(), inner.width as usize))
                .bold()
                .centered()
                .render(row, buf);
        }
    }
}
