use crate::core::{cmd::Cmd, msg::Msg, state::AppState};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        // Dashboard messages (delegated to DashboardState)
        Msg::Dashboard(dashboard_msg) => state.dashboard.update(dashboard_msg),
    };
    (state, commands)
}
