use serde::{Deserialize, Serialize};

pub mod system;

use crate::domain::route::Route;
use crate::model::{carousel, reviews, status_bar};
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Switch the mounted screen
    Navigate(Route),

    // Screen-local operations, dropped when the screen is not mounted
    Carousel(carousel::Message),
    Reviews(reviews::Message),

    StatusBar(status_bar::Message),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            Msg::Carousel(carousel::Message::GestureUpdate { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Carousel(carousel::Message::GestureUpdate { x: 10 }).is_frequent());
        assert!(!Msg::Carousel(carousel::Message::GestureEnd).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Navigate(Route::Home).is_frequent());
    }

    #[test]
    fn test_msg_serialization() -> serde_json::Result<()> {
        let msg = Msg::Navigate(Route::LocationSuggest);
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
