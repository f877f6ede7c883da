pub mod system;

use crate::{
    domain::route::Route,
    infrastructure::config::Config,
    model::{carousel::Carousel, reviews::ReviewStrip, status_bar::StatusBar},
};
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub status_bar: StatusBar,
    pub system: SystemState,
    pub config: Config,
}

/// The mounted screen together with its screen-local state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home(ReviewStrip),
    LocationSuggest(Carousel),
}

impl Screen {
    /// Builds a freshly initialized screen for `route`
    pub fn mount(route: Route, config: &Config) -> Self {
        match route {
            Route::Home => Screen::Home(ReviewStrip::new(config.home.reviews.clone())),
            Route::LocationSuggest => Screen::LocationSuggest(Carousel::new(
                config.carousel.deck(),
                &config.carousel.initial,
            )),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Home(_) => Route::Home,
            Screen::LocationSuggest(_) => Route::LocationSuggest,
        }
    }
}

impl AppState {
    pub fn new(config: Config, route: Route) -> Self {
        Self {
            screen: Screen::mount(route, &config),
            status_bar: StatusBar::default(),
            system: SystemState::default(),
            config,
        }
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        match &self.screen {
            Screen::LocationSuggest(carousel) => Some(carousel),
            Screen::Home(_) => None,
        }
    }

    pub fn reviews(&self) -> Option<&ReviewStrip> {
        match &self.screen {
            Screen::Home(reviews) => Some(reviews),
            Screen::LocationSuggest(_) => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default(), Route::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::carousel::InitialSelection;

    #[test]
    fn test_default_state_is_home() {
        let state = AppState::default();
        assert_eq!(state.route(), Route::Home);
        assert!(state.carousel().is_none());
        assert_eq!(state.reviews().map(|r| r.reviews().len()), Some(5));
    }

    #[test]
    fn test_default_config_matches_embedded_config() -> Result<(), config::ConfigError> {
        let built_in = AppState::new(Config::default(), Route::LocationSuggest);
        let embedded = AppState::new(Config::from_defaults()?, Route::LocationSuggest);

        assert_eq!(built_in.carousel().map(|c| c.current()), Some(3));
        assert_eq!(built_in.screen, embedded.screen);

        Ok(())
    }

    #[test]
    fn test_mount_location_suggest_uses_initial_selection() {
        let mut config = Config::default();
        config.carousel.initial = InitialSelection::Label("헬스장".to_string());

        let state = AppState::new(config, Route::LocationSuggest);
        let carousel = state.carousel().expect("carousel mounted");
        assert_eq!(carousel.current_card().label, "헬스장");
        assert!(!carousel.is_dragging());
    }
}
