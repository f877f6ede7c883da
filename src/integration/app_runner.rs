use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::TuiCommand, cmd_executor::CmdExecutor, raw_msg::RawMsg, state::AppState,
    },
    domain::route::Route,
    infrastructure::{
        config::Config,
        tui::{Event, Frame, TuiLike},
    },
    integration::runtime::ElmRuntime,
    presentation::components::Components,
};

/// Drives the Elm runtime from terminal events and renders the result.
/// Generic over the terminal so tests can run it against a `TestTui`.
pub struct AppRunner<T: TuiLike> {
    runtime: ElmRuntime,
    tui: T,
    components: Components,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(config: Config, tui: T, start: Route) -> Self {
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tui_tx);

        let runtime = ElmRuntime::new_with_executor(AppState::new(config, start), executor);
        log::info!("starting at {}", start.path());

        Self {
            runtime,
            tui,
            components: Components::new(),
            tui_rx,
        }
    }

    pub fn runtime(&self) -> &ElmRuntime {
        &self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    pub fn tui_mut(&mut self) -> &mut T {
        &mut self.tui
    }

    /// Run until quit is requested or the event source closes
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        let size = self.tui.size()?;
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        self.update_and_render(true)?;

        while !self.state().system.should_quit {
            let Some(event) = self.tui.next().await else {
                log::info!("event source closed");
                break;
            };
            self.handle_event(event)?;
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Feed one terminal event through translate, update, commands and render
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let render = !matches!(event, Event::Tick);
        match event {
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("failed to read terminal event".to_string())),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Render => self.runtime.send_raw_msg(RawMsg::Render),
            Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }
        self.update_and_render(render)
    }

    fn update_and_render(&mut self, render: bool) -> Result<()> {
        self.update_cycle();
        self.apply_tui_commands()?;

        if self.state().system.should_suspend {
            self.tui.suspend()?;
            self.runtime.send_raw_msg(RawMsg::Resume);
            self.update_cycle();
            self.tui.resume()?;
        }

        if render {
            self.render()?;
        }
        Ok(())
    }

    fn update_cycle(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("ElmRuntime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("ElmRuntime error: {e}")));
        }
    }

    fn apply_tui_commands(&mut self) -> Result<()> {
        while let Ok(cmd) = self.tui_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui.resize(Rect::new(0, 0, width, height))?;
                }
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))
    }
}
