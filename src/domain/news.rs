use serde::{Deserialize, Serialize};

/// Urgency of a news update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    Breaking,
    #[default]
    Update,
}

/// One entry of the breaking updates feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsUpdate {
    pub country: String,
    pub title: String,
    /// Display string such as `10 minutes ago`.
    pub time: String,
    #[serde(rename = "type", default)]
    pub kind: NewsKind,
}

impl NewsUpdate {
    pub fn new(
        country: impl Into<String>,
        title: impl Into<String>,
        time: impl Into<String>,
        kind: NewsKind,
    ) -> Self {
        Self {
            country: country.into(),
            title: title.into(),
            time: time.into(),
            kind,
        }
    }

    pub fn is_breaking(&self) -> bool {
        self.kind == NewsKind::Breaking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_breaking() {
        let breaking = NewsUpdate::new("Brazil", "Title", "now", NewsKind::Breaking);
        let update = NewsUpdate::new("France", "Title", "now", NewsKind::Update);

        assert!(breaking.is_breaking());
        assert!(!update.is_breaking());
    }

    #[test]
    fn test_deserialize_type_field() -> Result<(), serde_json::Error> {
        let json = r#"{"country":"Brazil","title":"T","time":"1 hour ago","type":"breaking"}"#;
        let news: NewsUpdate = serde_json::from_str(json)?;
        assert_eq!(news.kind, NewsKind::Breaking);

        let json = r#"{"country":"France","title":"T","time":"1 hour ago"}"#;
        let news: NewsUpdate = serde_json::from_str(json)?;
        assert_eq!(news.kind, NewsKind::Update);
        Ok(())
    }
}
