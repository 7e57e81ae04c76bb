use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{dashboard::DashboardMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::{
        config::Action,
        layout::{DashboardLayout, HitTarget},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ReportError(error))],

        // Rendering is driven by the runner, not by state
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Looks the key up in the configured bindings
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let Some(action) = state.config.config.keybindings.action_for(&key) else {
        return vec![];
    };

    let msg = match action {
        Action::NextRegion => Msg::Dashboard(DashboardMsg::SelectNextRegion),
        Action::PrevRegion => Msg::Dashboard(DashboardMsg::SelectPrevRegion),
        Action::OpenChat => Msg::Dashboard(DashboardMsg::OpenChat),
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::Suspend => Msg::System(SystemMsg::Suspend),
        region_action => match region_action.region() {
            Some(region) => Msg::Dashboard(DashboardMsg::SelectRegion(region)),
            None => return vec![],
        },
    };
    vec![msg]
}

/// Left clicks on a region button or the chat launcher
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let layout = DashboardLayout::new(state.system.viewport);
    match layout.hit_test(state.dashboard.active_region, mouse.column, mouse.row) {
        Some(HitTarget::Region(region)) => {
            vec![Msg::Dashboard(DashboardMsg::SelectRegion(region))]
        }
        Some(HitTarget::ChatLauncher) => vec![Msg::Dashboard(DashboardMsg::OpenChat)],
        None => vec![],
    }
}
