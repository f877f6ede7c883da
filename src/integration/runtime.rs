use std::collections::VecDeque;
use std::mem;

use color_eyre::eyre::{eyre, Result};

use crate::core::{
    cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};

/// Queues raw messages, domain messages and commands, and drains them in
/// arrival order on each update cycle
pub struct ElmRuntime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: Option<CmdExecutor>,
}

impl ElmRuntime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor: None,
        }
    }

    pub fn new_with_executor(initial_state: AppState, executor: CmdExecutor) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(executor);
        runtime
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Take the commands produced since the last call
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let state = mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate queued raw messages, then process every queued message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Each raw message is translated against the state left by the previous one
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            if !raw_msg.is_frequent() {
                log::trace!("raw: {raw_msg:?}");
            }
            self.msg_queue
                .extend(translate_raw_to_domain(raw_msg, &self.state));
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        let Some(executor) = &self.cmd_executor else {
            return Err(eyre!(
                "No command executor available. Use new_with_executor() to configure."
            ));
        };
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        Ok(executor.execute_commands(&commands))
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        self.process_all_messages();
        self.execute_pending_commands()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;
    use crate::{
        core::cmd::TuiCommand, core::msg::system::SystemMsg, domain::route::Route,
        infrastructure::config::Config, model::carousel,
    };

    fn create_test_runtime(route: Route) -> ElmRuntime {
        let config = Config::from_defaults().expect("embedded config");
        ElmRuntime::new(AppState::new(config, route))
    }

    #[test]
    fn test_process_message() {
        let mut runtime = create_test_runtime(Route::Home);

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_raw_messages_are_translated_in_order() {
        let mut runtime = create_test_runtime(Route::Home);

        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)));
        runtime.process_all_messages();

        // Right is translated after Enter mounted the carousel
        assert_eq!(runtime.state().route(), Route::LocationSuggest);
        assert_eq!(runtime.state().carousel().map(|c| c.current()), Some(4));
    }

    #[test]
    fn test_commands_are_queued() {
        let mut runtime = create_test_runtime(Route::Home);
        runtime.send_msg(Msg::System(SystemMsg::Resize(80, 24)));
        runtime.process_all_messages();

        assert_eq!(
            runtime.pending_commands(),
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
        assert!(runtime.pending_commands().is_empty());
    }

    #[test]
    fn test_terminal_error_is_logged_and_shown() -> Result<()> {
        let config = Config::from_defaults()?;
        let mut runtime =
            ElmRuntime::new_with_executor(AppState::new(config, Route::Home), CmdExecutor::new());

        runtime.send_raw_msg(RawMsg::Error("read failed".to_string()));
        let log = runtime.run_update_cycle()?;

        assert_eq!(log, vec!["✓ Executed: LogError".to_string()]);
        assert_eq!(
            runtime.state().status_bar.message(),
            Some("[ERR: Terminal] read failed")
        );

        Ok(())
    }

    #[test]
    fn test_run_update_cycle_requires_executor() {
        let mut runtime = create_test_runtime(Route::Home);
        assert!(runtime.run_update_cycle().is_err());
    }

    #[test]
    fn test_run_update_cycle_executes_commands() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tx);
        let config = Config::from_defaults()?;
        let mut runtime =
            ElmRuntime::new_with_executor(AppState::new(config, Route::LocationSuggest), executor);

        runtime.send_msg(Msg::System(SystemMsg::Resize(100, 30)));
        runtime.send_msg(Msg::Carousel(carousel::Message::Retreat));
        let log = runtime.run_update_cycle()?;

        assert_eq!(log, vec!["✓ Executed: Tui(Resize)".to_string()]);
        assert_eq!(
            rx.try_recv()?,
            TuiCommand::Resize {
                width: 100,
                height: 30
            }
        );
        assert_eq!(runtime.state().carousel().map(|c| c.current()), Some(2));

        Ok(())
    }
}
