use ratatui::layout::Rect;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Last known terminal area, used for mouse hit testing
    pub viewport: Rect,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![Cmd::Tui(TuiCommand::Suspend)]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                vec![Cmd::resize(width, height)]
            }

            SystemMsg::ReportError(error) => {
                log::error!("terminal error: {error}");
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);
        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        assert_eq!(cmds, vec![Cmd::Tui(TuiCommand::Suspend)]);

        let cmds = system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(120, 40));

        assert_eq!(system.viewport, Rect::new(0, 0, 120, 40));
        assert_eq!(cmds, vec![Cmd::resize(120, 40)]);
    }

    #[test]
    fn test_report_error_changes_nothing() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::ReportError("boom".to_string()));

        assert!(cmds.is_empty());
        assert!(!system.should_quit);
    }
}
