//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::{AppState, Screen},
    domain::route::Route,
    presentation::{layout::AppLayout, widgets::status_bar::StatusBarWidget},
};

pub mod home;
pub mod location_suggest;

pub use home::HomeComponent;
pub use location_suggest::LocationSuggestComponent;

/// Key hints shown above the status message
pub fn hints(route: Route) -> &'static str {
    match route {
        Route::Home => "Enter: 시작  ←/→: 후기 넘기기  q: 종료",
        Route::LocationSuggest => "←/→ 또는 드래그: 넘기기  Esc: 뒤로  q: 종료",
    }
}

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub home: HomeComponent,
    pub location_suggest: LocationSuggestComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the mounted screen and the status bar
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = AppLayout::new(frame.area());

        match &state.screen {
            Screen::Home(reviews) => self.home.view(reviews, frame, layout.main),
            Screen::LocationSuggest(carousel) => {
                self.location_suggest.view(carousel, frame, layout.main)
            }
        }

        let status_bar = StatusBarWidget::new(&state.status_bar, hints(state.route()));
        frame.render_widget(status_bar, layout.status);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::infrastructure::{config::Config, tui::test::buffer_lines};

    fn render(state: &AppState) -> color_eyre::Result<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
        let components = Components::new();
        terminal.draw(|frame| components.render(frame, state))?;
        Ok(buffer_lines(terminal.backend().buffer()))
    }

    #[test]
    fn test_render_home() -> color_eyre::Result<()> {
        let state = AppState::new(Config::from_defaults()?, Route::Home);
        let lines = render(&state)?;

        assert!(lines[1].contains(home::SUBTITLE));
        assert!(lines[2].contains(home::LOGO));
        assert!(lines[4].contains(home::SECTION_TITLE));
        assert!(lines[6].contains("자리잡다의"));
        assert!(lines[19].contains(home::CTA_LABEL));
        assert!(lines[22].starts_with("Enter: 시작"));

        Ok(())
    }

    #[test]
    fn test_render_location_suggest() -> color_eyre::Result<()> {
        let state = AppState::new(Config::from_defaults()?, Route::LocationSuggest);
        let lines = render(&state)?;

        assert!(lines[0].contains("어디가 좋을까?"));
        assert!(lines[2].contains(location_suggest::PROMPT));
        assert!(lines[3].contains("전체 ▾"));
        assert!(lines[12].contains("캠핑 바"));
        assert!(lines[19].contains(location_suggest::SEARCH_PLACEHOLDER));
        for icon in location_suggest::BOTTOM_TABS {
            assert!(lines[21].contains(icon));
        }
        assert_eq!(lines[23].trim(), "");

        Ok(())
    }
}
