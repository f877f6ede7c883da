//! Home component
//!
//! Landing screen with the review strip and the start button.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    model::reviews::ReviewStrip,
    presentation::{layout::HomeLayout, widgets::review_card::ReviewCardWidget},
};

pub const SUBTITLE: &str = "AI 추천 상권과 창업 아이템은";
pub const LOGO: &str = "자리잡다";
pub const SECTION_TITLE: &str = "솔직후기";
pub const CTA_LABEL: &str = "간편 로그인하고 픽업하기";
pub const SIGNUP_LABEL: &str = "회원이 아니신가요? 회원가입하기";

#[derive(Debug, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, reviews: &ReviewStrip, frame: &mut Frame, area: Rect) {
        let layout = HomeLayout::new(area);

        frame.render_widget(
            Paragraph::new(SUBTITLE).centered().fg(Color::Gray),
            layout.subtitle,
        );
        frame.render_widget(
            Paragraph::new(LOGO).centered().bold().fg(Color::Magenta),
            layout.logo,
        );
        frame.render_widget(Paragraph::new(SECTION_TITLE).bold(), layout.section_title);

        let visible = reviews.visible();
        for (review, slot) in visible.iter().zip(layout.review_slots(visible.len())) {
            frame.render_widget(ReviewCardWidget::new(review), slot);
        }

        let cta = Paragraph::new(CTA_LABEL)
            .centered()
            .bold()
            .block(Block::bordered().border_type(BorderType::Rounded))
            .style(Style::default().bg(Color::Magenta).fg(Color::White));
        frame.render_widget(cta, layout.cta);

        frame.render_widget(
            Paragraph::new(SIGNUP_LABEL)
                .centered()
                .fg(Color::DarkGray)
                .underlined(),
            layout.signup,
        );
    }
}
