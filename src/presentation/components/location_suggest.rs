//! Location suggestion component
//!
//! Category prompt, the card carousel and the (inert) search bar.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    domain::{card::ALL_CATEGORIES_LABEL, text::fit_width},
    model::carousel::{Carousel, SWIPE_THRESHOLD},
    presentation::{
        layout::LocationLayout,
        widgets::{card::CardWidget, tab_bar::TabBarWidget},
    },
};

pub const TOP_TABS: [&str; 2] = ["어디가 좋을까?", "여기에 뭐할까?"];
pub const BOTTOM_TABS: [&str; 5] = ["🏠", "🏪", "🏢", "💬", "👤"];
pub const PROMPT: &str = "매장 콘셉트를 골라주세요!";
pub const SEARCH_PLACEHOLDER: &str = "고기 커스텀 국밥집";

#[derive(Debug, Default)]
pub struct LocationSuggestComponent;

impl LocationSuggestComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, carousel: &Carousel, frame: &mut Frame, area: Rect) {
        let layout = LocationLayout::new(area);

        frame.render_widget(TabBarWidget::new(&TOP_TABS, 0), layout.tabs);
        frame.render_widget(Paragraph::new(PROMPT).bold(), layout.prompt);
        frame.render_widget(
            Paragraph::new(format!("{ALL_CATEGORIES_LABEL} ▾")).fg(Color::Gray),
            layout.category,
        );

        self.render_carousel(carousel, frame, &layout);

        let search = Paragraph::new(SEARCH_PLACEHOLDER)
            .fg(Color::DarkGray)
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(search, layout.search);
        frame.render_widget(TabBarWidget::plain(&BOTTOM_TABS), layout.bottom_tabs);
    }

    fn render_carousel(&self, carousel: &Carousel, frame: &mut Frame, layout: &LocationLayout) {
        let neighbors = carousel.neighbors();

        frame.render_widget(button("◀"), layout.prev);
        frame.render_widget(CardWidget::new(carousel.card(neighbors.left)), layout.left);
        frame.render_widget(
            CardWidget::new(carousel.card(neighbors.center)).centered(true),
            layout.center,
        );
        frame.render_widget(CardWidget::new(carousel.card(neighbors.right)), layout.right);
        frame.render_widget(button("▶"), layout.next);

        let label = fit_width(&carousel.current_card().label, layout.label.width as usize);
        frame.render_widget(Paragraph::new(label).centered().bold(), layout.label);

        frame.render_widget(indicator(carousel), layout.indicator);
    }
}

fn button(symbol: &str) -> Paragraph<'_> {
    Paragraph::new(symbol)
        .centered()
        .block(Block::bordered().border_type(BorderType::Rounded))
}

/// Drag distance while a gesture is in progress, position dots otherwise
fn indicator(carousel: &Carousel) -> Paragraph<'static> {
    if carousel.is_dragging() {
        let delta = carousel.drag_delta();
        let text = match delta.signum() {
            -1 => format!("◀ {}px", delta.abs()),
            1 => format!("{delta}px ▶"),
            _ => "·".to_string(),
        };
        let style = if delta.abs() >= SWIPE_THRESHOLD {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(text).style(style).centered()
    } else {
        let dots: Vec<&str> = (0..carousel.len())
            .map(|i| if i == carousel.current() { "●" } else { "○" })
            .collect();
        Paragraph::new(dots.join(" ")).fg(Color::DarkGray).centered()
    }
}
