//! Carousel selection and swipe interpretation
//!
//! The carousel keeps one card centered and shows its two neighbors. The
//! centered index cycles through the deck in both directions. Horizontal drags
//! are tracked as a gesture and, when released, turned into a step to the
//! previous or next card if the drag covered at least [`SWIPE_THRESHOLD`].
//!
//! Direction convention: dragging left (negative delta) moves to the previous
//! card, dragging right moves to the next card.

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardDeck};

/// Minimum horizontal travel, in pixels, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD: i32 = 40;

/// How the initially centered card is chosen when the carousel is mounted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialSelection {
    Index(usize),
    Label(String),
}

impl InitialSelection {
    /// Resolves to a valid index into `deck`, falling back to 0.
    pub fn resolve(&self, deck: &CardDeck) -> usize {
        match self {
            InitialSelection::Index(index) if *index < deck.len() => *index,
            InitialSelection::Index(index) => {
                tracing::warn!(
                    index,
                    len = deck.len(),
                    "initial card index out of range, using 0"
                );
                0
            }
            InitialSelection::Label(label) => deck.position(label).unwrap_or_else(|| {
                tracing::warn!(label = label.as_str(), "initial card not found, using 0");
                0
            }),
        }
    }
}

/// "캠핑 바" in the built-in deck
pub const DEFAULT_INITIAL_INDEX: usize = 3;

impl Default for InitialSelection {
    fn default() -> Self {
        InitialSelection::Index(DEFAULT_INITIAL_INDEX)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        origin_x: i32,
        delta_x: i32,
    },
}

/// Result of finishing a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No gesture was in progress
    Ignored,
    Retreated,
    Advanced,
    /// Released inside the dead zone; the selection did not move
    Tapped,
}

/// Indices of the three visible cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub left: usize,
    pub center: usize,
    pub right: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    Advance,
    Retreat,
    GestureBegin { x: i32 },
    GestureUpdate { x: i32 },
    GestureEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    deck: CardDeck,
    current: usize,
    gesture: Gesture,
}

fn wrap_index(index: i64, len: usize) -> usize {
    let len = len as i64;
    index.rem_euclid(len) as usize
}

impl Carousel {
    pub fn new(deck: CardDeck, initial: &InitialSelection) -> Self {
        let current = initial.resolve(&deck);
        Self {
            deck,
            current,
            gesture: Gesture::Idle,
        }
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn card(&self, index: usize) -> &Card {
        self.deck.card(index)
    }

    pub fn current_card(&self) -> &Card {
        self.card(self.current)
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Signed displacement of the gesture in progress, 0 when idle.
    pub fn drag_delta(&self) -> i32 {
        match self.gesture {
            Gesture::Idle => 0,
            Gesture::Dragging { delta_x, .. } => delta_x,
        }
    }

    pub fn advance(&mut self) {
        self.current = wrap_index(self.current as i64 + 1, self.deck.len());
    }

    pub fn retreat(&mut self) {
        self.current = wrap_index(self.current as i64 - 1, self.deck.len());
    }

    pub fn neighbors(&self) -> Neighbors {
        let len = self.deck.len();
        Neighbors {
            left: wrap_index(self.current as i64 - 1, len),
            center: self.current,
            right: wrap_index(self.current as i64 + 1, len),
        }
    }

    /// Starts tracking a drag at `x`. Restarts any gesture already in progress.
    pub fn begin_gesture(&mut self, x: i32) {
        self.gesture = Gesture::Dragging {
            origin_x: x,
            delta_x: 0,
        };
    }

    pub fn update_gesture(&mut self, x: i32) {
        if let Gesture::Dragging { origin_x, .. } = self.gesture {
            self.gesture = Gesture::Dragging {
                origin_x,
                delta_x: x.saturating_sub(origin_x),
            };
        }
    }

    pub fn end_gesture(&mut self) -> GestureOutcome {
        let Gesture::Dragging { delta_x, .. } = self.gesture else {
            return GestureOutcome::Ignored;
        };

        let outcome = if delta_x <= -SWIPE_THRESHOLD {
            self.retreat();
            GestureOutcome::Retreated
        } else if delta_x >= SWIPE_THRESHOLD {
            self.advance();
            GestureOutcome::Advanced
        } else {
            GestureOutcome::Tapped
        };
        self.gesture = Gesture::Idle;

        tracing::debug!(delta_x, ?outcome, current = self.current, "gesture ended");
        outcome
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Advance => self.advance(),
            Message::Retreat => self.retreat(),
            Message::GestureBegin { x } => self.begin_gesture(x),
            Message::GestureUpdate { x } => self.update_gesture(x),
            Message::GestureEnd => {
                self.end_gesture();
            }
        }
    }
}
