use serde::{Deserialize, Serialize};

pub mod dashboard;
pub mod system;

use dashboard::DashboardMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Dashboard operations (delegated to DashboardState)
    Dashboard(DashboardMsg),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegionId;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_eq!(
            Msg::Dashboard(DashboardMsg::OpenChat),
            Msg::Dashboard(DashboardMsg::OpenChat)
        );
        assert_ne!(
            Msg::Dashboard(DashboardMsg::SelectRegion(RegionId::Asia)),
            Msg::Dashboard(DashboardMsg::SelectRegion(RegionId::Africa))
        );
    }

    #[test]
    fn test_msg_serialization() -> color_eyre::Result<()> {
        let msg = Msg::Dashboard(DashboardMsg::SelectRegion(RegionId::Americas));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
