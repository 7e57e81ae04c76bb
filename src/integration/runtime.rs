use std::collections::VecDeque;

use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};

/// Owns the application state and feeds queued messages through `update`
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::debug!("raw message: {raw_msg:?}");
        }
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;
        commands
    }

    /// Translates queued raw messages, then applies every domain message in order
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    pub fn stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::{dashboard::DashboardMsg, system::SystemMsg},
        domain::RegionId,
        infrastructure::config::Config,
    };

    fn create_test_runtime() -> Runtime {
        Runtime::new(AppState::new_with_config(
            Config::defaults().expect("defaults"),
        ))
    }

    #[test]
    fn test_raw_messages_are_translated_and_applied() {
        let mut runtime = create_test_runtime();
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('4'),
            KeyModifiers::NONE,
        )));
        runtime.send_raw_msg(RawMsg::Tick);
        assert_eq!(
            runtime.stats(),
            RuntimeStats {
                queued_messages: 0,
                queued_raw_messages: 2
            }
        );

        let commands = runtime.process_all_messages();

        assert_eq!(runtime.state().dashboard.active_region, RegionId::Asia);
        assert_eq!(commands, vec![Cmd::RequestRender]);
        assert_eq!(
            runtime.stats(),
            RuntimeStats {
                queued_messages: 0,
                queued_raw_messages: 0
            }
        );
    }

    #[test]
    fn test_messages_apply_in_order() {
        let mut runtime = create_test_runtime();
        runtime.send_msg(Msg::Dashboard(DashboardMsg::SelectRegion(RegionId::Africa)));
        runtime.send_msg(Msg::Dashboard(DashboardMsg::SelectNextRegion));
        runtime.send_msg(Msg::System(SystemMsg::Quit));

        runtime.process_all_messages();

        assert_eq!(runtime.state().dashboard.active_region, RegionId::Oceania);
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_no_messages_no_commands() {
        let mut runtime = create_test_runtime();
        assert!(runtime.process_all_messages().is_empty());
    }
}
