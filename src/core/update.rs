use crate::{
    core::cmd::Cmd,
    core::msg::Msg,
    core::state::{AppState, Screen},
    domain::route::Route,
    model::status_bar,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Navigate(route) => navigate(route, state),

        Msg::Carousel(carousel_msg) => {
            match &mut state.screen {
                Screen::LocationSuggest(carousel) => carousel.update(carousel_msg),
                Screen::Home(_) => log::debug!("carousel message without carousel: {carousel_msg:?}"),
            }
            (state, vec![])
        }

        Msg::Reviews(reviews_msg) => {
            match &mut state.screen {
                Screen::Home(reviews) => reviews.update(reviews_msg),
                Screen::LocationSuggest(_) => {
                    log::debug!("reviews message without reviews: {reviews_msg:?}")
                }
            }
            (state, vec![])
        }

        Msg::StatusBar(status_bar_msg) => {
            let commands = match &status_bar_msg {
                status_bar::Message::Failed { label, message } => vec![Cmd::LogError {
                    message: format!("{label}: {message}"),
                }],
                _ => vec![],
            };
            state.status_bar.update(status_bar_msg);
            (state, commands)
        }
    }
}

/// Mounts a fresh screen for `route`; staying on the current route keeps its state
fn navigate(route: Route, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if state.route() == route {
        return (state, vec![]);
    }

    state.screen = Screen::mount(route, &state.config);
    state.status_bar.update(status_bar::Message::Notified {
        label: "Navigate".to_string(),
        message: route.path().to_string(),
    });
    let commands = vec![Cmd::LogInfo {
        message: format!("navigated to {}", route.path()),
    }];
    (state, commands)
}
