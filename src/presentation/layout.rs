//! Screen geometry
//!
//! The renderer and the mouse translator both derive their rectangles from
//! these types, so a click is always tested against what was drawn.

use ratatui::layout::Flex;
use ratatui::prelude::*;

/// Rows reserved for the status bar at the bottom of the terminal
pub const STATUS_BAR_HEIGHT: u16 = 2;
pub const REVIEW_CARD_WIDTH: u16 = 24;
pub const REVIEW_CARD_HEIGHT: u16 = 7;
pub const CAROUSEL_CARD_HEIGHT: u16 = 7;
pub const CAROUSEL_BUTTON_WIDTH: u16 = 3;
const CTA_WIDTH: u16 = 32;
const SEARCH_WIDTH: u16 = 40;

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub main: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(area);
        Self { main, status }
    }

    pub fn from_size(width: u16, height: u16) -> Self {
        Self::new(Rect::new(0, 0, width, height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub subtitle: Rect,
    pub logo: Rect,
    pub section_title: Rect,
    pub reviews: Rect,
    pub cta: Rect,
    pub signup: Rect,
}

impl HomeLayout {
    pub fn new(area: Rect) -> Self {
        let [_, subtitle, logo, _, section_title, reviews, _, cta, signup] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(REVIEW_CARD_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            subtitle,
            logo,
            section_title,
            reviews,
            cta: centered(cta, CTA_WIDTH),
            signup,
        }
    }

    /// Rectangles of the review cards that fit in the strip, left to right
    pub fn review_slots(&self, count: usize) -> Vec<Rect> {
        let mut slots = Vec::new();
        let mut x = self.reviews.x;
        let right = self.reviews.right();
        while slots.len() < count && x < right {
            let width = REVIEW_CARD_WIDTH.min(right - x);
            slots.push(Rect::new(x, self.reviews.y, width, self.reviews.height));
            x = x.saturating_add(REVIEW_CARD_WIDTH + 1);
        }
        slots
    }
}

/// Part of the carousel row under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselTarget {
    PrevButton,
    LeftCard,
    CenterCard,
    RightCard,
    NextButton,
    /// Inside the carousel row but between the parts above
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationLayout {
    pub tabs: Rect,
    pub prompt: Rect,
    pub category: Rect,
    /// Interactive region: a drag ends as soon as the pointer leaves it
    pub carousel: Rect,
    pub prev: Rect,
    pub left: Rect,
    pub center: Rect,
    pub right: Rect,
    pub next: Rect,
    pub label: Rect,
    pub indicator: Rect,
    pub search: Rect,
    pub bottom_tabs: Rect,
}

impl LocationLayout {
    pub fn new(area: Rect) -> Self {
        let [tabs, _, prompt, category, _, carousel, label_row, indicator, _, search, bottom_tabs] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(CAROUSEL_CARD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(area);

        // Equal-width cards; leftover columns are split around the row
        let fixed = 2 * CAROUSEL_BUTTON_WIDTH + 4;
        let card_width = carousel.width.saturating_sub(fixed) / 3;
        let used = fixed + 3 * card_width;
        let x0 = carousel.x + carousel.width.saturating_sub(used) / 2;
        let at = |x: u16, width: u16| {
            Rect::new(x, carousel.y, width, carousel.height).intersection(carousel)
        };
        let prev = at(x0, CAROUSEL_BUTTON_WIDTH);
        let left = at(prev.right() + 1, card_width);
        let center = at(left.right() + 1, card_width);
        let right = at(center.right() + 1, card_width);
        let next = at(right.right() + 1, CAROUSEL_BUTTON_WIDTH);

        Self {
            tabs,
            prompt,
            category,
            carousel,
            prev,
            left,
            center,
            right,
            next,
            label: Rect::new(center.x, label_row.y, center.width, label_row.height),
            indicator,
            search: centered(search, SEARCH_WIDTH),
            bottom_tabs,
        }
    }

    pub fn in_carousel(&self, column: u16, row: u16) -> bool {
        contains(self.carousel, column, row)
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<CarouselTarget> {
        if !self.in_carousel(column, row) {
            return None;
        }
        let target = [
            (self.prev, CarouselTarget::PrevButton),
            (self.left, CarouselTarget::LeftCard),
            (self.center, CarouselTarget::CenterCard),
            (self.right, CarouselTarget::RightCard),
            (self.next, CarouselTarget::NextButton),
        ]
        .into_iter()
        .find(|(rect, _)| contains(*rect, column, row))
        .map_or(CarouselTarget::Gap, |(_, target)| target);
        Some(target)
    }
}

fn centered(area: Rect, width: u16) -> Rect {
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    rect
}
