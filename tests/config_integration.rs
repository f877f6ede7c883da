use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use jarijapda::domain::route::Route;
use jarijapda::infrastructure::config::Config;
use jarijapda::infrastructure::tui::{Event, TestTui};
use jarijapda::integration::app_runner::AppRunner;
use jarijapda::presentation::config::keybindings::Action;

fn scratch_dir(name: &str) -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!(
        "jarijapda-it-{name}-{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[tokio::test]
async fn test_user_config_changes_deck_and_bindings() -> Result<()> {
    let dir = scratch_dir("deck")?;
    fs::write(
        dir.join("config.json5"),
        r##"{
          keybindings: { LocationSuggest: { "<n>": "Next" } },
          carousel: {
            cards: [
              { label: "A", color: "#FF00A8" },
              { label: "B", color: "#7ED957" },
            ],
            initial: "B",
          },
        }"##,
    )?;
    let config = Config::load_from(&dir, &dir)?;

    assert_eq!(
        config.keybindings.action_for(
            Route::LocationSuggest,
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE)
        ),
        Some(Action::Next)
    );

    let events = vec![Event::Key(KeyEvent::new(
        KeyCode::Char('n'),
        KeyModifiers::NONE,
    ))];
    let tui = TestTui::with_events(80, 24, events)?;
    let mut runner = AppRunner::new(config, tui, Route::LocationSuggest);
    runner.run().await?;

    // B -> A
    assert_eq!(runner.state().carousel().map(|c| c.current()), Some(0));
    assert!(runner.tui().screen_lines()[12].contains('A'));

    Ok(())
}

#[test]
fn test_empty_deck_is_rejected() -> Result<()> {
    let dir = scratch_dir("empty-deck")?;
    fs::write(dir.join("config.json5"), r#"{ carousel: { cards: [] } }"#)?;

    assert!(Config::load_from(&dir, &dir).is_err());

    Ok(())
}
