use crate::core::{cmd::Cmd, msg::dashboard::DashboardMsg};
use crate::domain::RegionId;

/// The root view's local state: 6 regions × chat open/closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub active_region: RegionId,
    pub chat_open: bool,
}

impl DashboardState {
    pub fn is_active(&self, region: RegionId) -> bool {
        self.active_region == region
    }

    /// Dashboard-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: DashboardMsg) -> Vec<Cmd> {
        let before = *self;

        match msg {
            DashboardMsg::SelectRegion(region) => self.active_region = region,
            DashboardMsg::SelectNextRegion => self.active_region = self.active_region.next(),
            DashboardMsg::SelectPrevRegion => self.active_region = self.active_region.prev(),
            DashboardMsg::OpenChat => self.chat_open = true,
        }

        if *self == before {
            return vec![];
        }

        log::debug!(
            "dashboard: region={} chat_open={}",
            self.active_region,
            self.chat_open
        );
        vec![Cmd::RequestRender]
    }
}
