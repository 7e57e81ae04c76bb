use serde::{Deserialize, Serialize};

use crate::domain::RegionId;

/// Messages for DashboardState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardMsg {
    SelectRegion(RegionId),
    SelectNextRegion,
    SelectPrevRegion,
    // The launcher only opens; nothing closes the chat.
    OpenChat,
}

#[cfg(test)]
mod tests {
    use super::*;

    use color_eyre::Result;

    #[test]
    fn dashboard_msg_serde() -> Result<()> {
        let msg = DashboardMsg::SelectRegion(RegionId::Europe);
        let s = serde_json::to_string(&msg)?;
        assert_eq!(s, r#"{"SelectRegion":"europe"}"#);
        let back: DashboardMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }
}
