use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Label shown on the category filter button
pub const ALL_CATEGORIES_LABEL: &str = "전체";

/// A single business-concept card shown in the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub label: String,
    /// Display color token, e.g. `#FF00A8`
    pub color: String,
}

impl Card {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }

    /// Terminal color for the card face. Unparseable tokens render gray.
    pub fn fill(&self) -> Color {
        Color::from_str(&self.color).unwrap_or(Color::Gray)
    }

    pub fn category(&self) -> Option<Category> {
        Category::from_token(&self.color)
    }

    pub fn defaults() -> Vec<Card> {
        vec![
            Card::new("레코드카페", "#FF00A8"),
            Card::new("헤나카페", "#FF6B00"),
            Card::new("실내보드", "#A020F0"),
            Card::new("캠핑 바", "#FF00A8"),
            Card::new("헬스장", "#FF6B00"),
            Card::new("복싱클럽", "#A020F0"),
            Card::new("VR FPS", "#7ED957"),
        ]
    }
}

/// Concept category keyed by the card color token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Pink,
    Orange,
    Purple,
    Green,
}

impl Category {
    pub fn token(&self) -> &'static str {
        match self {
            Category::Pink => "#FF00A8",
            Category::Orange => "#FF6B00",
            Category::Purple => "#A020F0",
            Category::Green => "#7ED957",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Pink | Category::Orange => "카페 / 음식",
            Category::Purple => "취미 / 문화",
            Category::Green => "키즈 / 반려",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Category::iter().find(|category| category.token().eq_ignore_ascii_case(token))
    }
}

/// Fixed, non-empty, cyclic list of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    /// Returns `None` for an empty list; every index arithmetic on the deck
    /// relies on `len() > 0`.
    pub fn new(cards: Vec<Card>) -> Option<Self> {
        if cards.is_empty() {
            None
        } else {
            Some(Self { cards })
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Card at `index`, wrapped into range.
    pub fn card(&self, index: usize) -> &Card {
        &self.cards[index % self.cards.len()]
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for CardDeck {
    fn default() -> Self {
        Self {
            cards: Card::defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_deck_is_rejected() {
        assert_eq!(CardDeck::new(vec![]), None);
    }

    #[test]
    fn test_default_deck() {
        let deck = CardDeck::default();
        assert_eq!(deck.len(), 7);
        assert_eq!(deck.position("캠핑 바"), Some(3));
        assert_eq!(deck.position("없는 카드"), None);
    }

    #[test]
    fn test_card_fill_parses_hex() {
        let card = Card::new("헬스장", "#FF6B00");
        assert_eq!(card.fill(), Color::Rgb(0xFF, 0x6B, 0x00));
    }

    #[test]
    fn test_card_fill_falls_back_to_gray() {
        let card = Card::new("?", "not-a-color");
        assert_eq!(card.fill(), Color::Gray);
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(Category::from_token("#a020f0"), Some(Category::Purple));
        assert_eq!(Category::from_token("#000000"), None);
        assert_eq!(Category::Green.display_name(), "키즈 / 반려");
        assert_eq!(Category::Pink.to_string(), "pink");
    }

    #[test]
    fn test_default_cards_all_have_categories() {
        assert!(Card::defaults().iter().all(|card| card.category().is_some()));
    }
}
