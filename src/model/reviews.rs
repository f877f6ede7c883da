use serde::{Deserialize, Serialize};

use crate::domain::review::Review;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    ScrollLeft,
    ScrollRight,
}

/// Horizontally scrollable strip of review cards on the home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewStrip {
    reviews: Vec<Review>,
    offset: usize,
}

impl ReviewStrip {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews, offset: 0 }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Index of the leftmost visible review
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible(&self) -> &[Review] {
        self.reviews.get(self.offset..).unwrap_or_default()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ScrollLeft => {
                self.offset = self.offset.saturating_sub(1);
            }
            Message::ScrollRight => {
                if self.offset + 1 < self.reviews.len() {
                    self.offset += 1;
                }
            }
        }
    }
}

impl Default for ReviewStrip {
    fn default() -> Self {
        Self::new(Review::defaults())
    }
}
