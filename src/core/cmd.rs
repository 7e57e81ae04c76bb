use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    Suspend,
}

/// Elm-like command definitions
/// Represents side effects the runner performs after an update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Tui(TuiCommand),
    /// Redraw immediately instead of waiting for the next render tick
    RequestRender,
}

impl Cmd {
    pub fn resize(width: u16, height: u16) -> Cmd {
        Cmd::Tui(TuiCommand::Resize { width, height })
    }
}
