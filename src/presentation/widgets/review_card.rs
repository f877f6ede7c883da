use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::domain::{
    review::Review,
    text::{fit_width, truncate_text, wrap_text},
};

pub struct ReviewCardWidget<'a> {
    review: &'a Review,
}

impl<'a> ReviewCardWidget<'a> {
    pub fn new(review: &'a Review) -> Self {
        Self { review }
    }
}

impl Widget for ReviewCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let title_width = area.width.saturating_sub(2) as usize;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(fit_width(&self.review.author, title_width).bold());
        let inner = block.inner(area);
        block.render(area, buf);

        let body = truncate_text(
            &wrap_text(&self.review.text, inner.width as usize),
            inner.height as usize,
        );
        Paragraph::new(body).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::buffer_lines;

    #[test]
    fn test_render_review() {
        let review = Review::new("너무편하고좋아요");
        let area = Rect::new(0, 0, 8, 5);
        let mut buffer = Buffer::empty(area);

        ReviewCardWidget::new(&review).render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert_eq!(lines[1], "│너무편│");
        assert_eq!(lines[2], "│하고좋│");
        assert_eq!(lines[3], "│아요  │");
    }

    #[test]
    fn test_long_review_is_truncated() {
        let review = Review::new("가나다라마바사아자차카타파하");
        let area = Rect::new(0, 0, 6, 4);
        let mut buffer = Buffer::empty(area);

        ReviewCardWidget::new(&review).render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert_eq!(lines[1], "│가나│");
        assert_eq!(lines[2], "│... │");
    }
}
