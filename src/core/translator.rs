use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::route::Route,
    model::{
        carousel::{self, Carousel, Gesture, SWIPE_THRESHOLD},
        reviews, status_bar,
    },
    presentation::{
        config::keybindings::Action,
        layout::{contains, AppLayout, CarouselTarget, HomeLayout, LocationLayout},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on the mounted screen
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        RawMsg::Error(error) => vec![Msg::StatusBar(status_bar::Message::Failed {
            label: "Terminal".to_string(),
            message: error,
        })],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.config.keybindings.action_for(state.route(), key) {
        Some(action) => translate_action_to_msg(action, state.route()),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action, route: Route) -> Vec<Msg> {
    match (action, route) {
        (Action::Quit, _) => vec![Msg::System(SystemMsg::Quit)],
        (Action::Suspend, _) => vec![Msg::System(SystemMsg::Suspend)],
        (Action::Start, Route::Home) => vec![Msg::Navigate(Route::LocationSuggest)],
        (Action::Back, Route::LocationSuggest) => vec![Msg::Navigate(Route::Home)],
        (Action::Previous, _) => vec![Msg::Carousel(carousel::Message::Retreat)],
        (Action::Next, _) => vec![Msg::Carousel(carousel::Message::Advance)],
        (Action::ScrollLeft, _) => vec![Msg::Reviews(reviews::Message::ScrollLeft)],
        (Action::ScrollRight, _) => vec![Msg::Reviews(reviews::Message::ScrollRight)],
        (Action::Start | Action::Back, _) => vec![],
    }
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    // Nothing has been laid out before the first resize
    let Some((width, height)) = state.system.terminal_size else {
        return vec![];
    };
    let main = AppLayout::from_size(width, height).main;

    if let Some(carousel) = state.carousel() {
        let cell_width = i32::from(state.config.carousel.cell_width);
        translate_carousel_mouse(mouse, carousel, &LocationLayout::new(main), cell_width)
    } else {
        translate_home_mouse(mouse, &HomeLayout::new(main))
    }
}

fn translate_home_mouse(mouse: MouseEvent, layout: &HomeLayout) -> Vec<Msg> {
    let MouseEvent {
        kind, column, row, ..
    } = mouse;
    match kind {
        MouseEventKind::Up(MouseButton::Left) if contains(layout.cta, column, row) => {
            vec![Msg::Navigate(Route::LocationSuggest)]
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft
            if contains(layout.reviews, column, row) =>
        {
            vec![Msg::Reviews(reviews::Message::ScrollLeft)]
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight
            if contains(layout.reviews, column, row) =>
        {
            vec![Msg::Reviews(reviews::Message::ScrollRight)]
        }
        _ => vec![],
    }
}

/// Maps terminal mouse input onto the carousel gesture protocol.
///
/// Columns are converted to pixels with `cell_width`. Leaving the carousel
/// region while dragging ends the gesture just like releasing the button.
/// A release that stays under the swipe threshold is also a click when it
/// lands on the same card or button as the press.
fn translate_carousel_mouse(
    mouse: MouseEvent,
    carousel: &Carousel,
    layout: &LocationLayout,
    cell_width: i32,
) -> Vec<Msg> {
    let MouseEvent {
        kind, column, row, ..
    } = mouse;
    let x = i32::from(column) * cell_width;
    let inside = layout.in_carousel(column, row);

    match kind {
        MouseEventKind::Down(MouseButton::Left) if inside => {
            vec![Msg::Carousel(carousel::Message::GestureBegin { x })]
        }
        MouseEventKind::Drag(_) | MouseEventKind::Moved if carousel.is_dragging() => {
            if inside {
                vec![Msg::Carousel(carousel::Message::GestureUpdate { x })]
            } else {
                vec![Msg::Carousel(carousel::Message::GestureEnd)]
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Gesture::Dragging { origin_x, .. } = carousel.gesture() else {
                return vec![];
            };
            if !inside {
                return vec![Msg::Carousel(carousel::Message::GestureEnd)];
            }

            let mut msgs = vec![
                Msg::Carousel(carousel::Message::GestureUpdate { x }),
                Msg::Carousel(carousel::Message::GestureEnd),
            ];
            let is_tap = x.saturating_sub(origin_x).abs() < SWIPE_THRESHOLD;
            let release_target = layout.target_at(column, row);
            let press_target = origin_x
                .checked_div(cell_width)
                .and_then(|origin_column| u16::try_from(origin_column).ok())
                .and_then(|origin_column| layout.target_at(origin_column, row));
            if is_tap && press_target == release_target {
                match release_target {
                    Some(CarouselTarget::PrevButton | CarouselTarget::LeftCard) => {
                        msgs.push(Msg::Carousel(carousel::Message::Retreat));
                    }
                    Some(CarouselTarget::NextButton | CarouselTarget::RightCard) => {
                        msgs.push(Msg::Carousel(carousel::Message::Advance));
                    }
                    _ => {}
                }
            }
            msgs
        }
        _ => vec![],
    }
}
