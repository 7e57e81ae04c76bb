use serde::{Deserialize, Serialize};

use crate::domain::{
    feed::{PressRelease, TimelineEntry, UpcomingEvent},
    news::{NewsKind, NewsUpdate},
    president::{President, PresidentStatus},
};

/// Everything the dashboard panels display.
///
/// The default value is the built-in sample data. A configuration file may
/// replace it under the `content` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardContent {
    pub news: Vec<NewsUpdate>,
    pub presidents: Vec<President>,
    pub timeline: Vec<TimelineEntry>,
    pub press_releases: Vec<PressRelease>,
    pub events: Vec<UpcomingEvent>,
}

impl Default for DashboardContent {
    fn default() -> Self {
        Self::sample()
    }
}

impl DashboardContent {
    pub fn sample() -> Self {
        Self {
            news: vec![
                NewsUpdate::new(
                    "Brazil",
                    "President's New Economic Policy Announcement",
                    "10 minutes ago",
                    NewsKind::Breaking,
                ),
                NewsUpdate::new(
                    "France",
                    "Presidential Address on Climate Initiative",
                    "1 hour ago",
                    NewsKind::Update,
                ),
            ],
            presidents: vec![
                President::new("Emmanuel Macron", "France", "2017", PresidentStatus::Active),
                President::new(
                    "Luiz Inácio Lula da Silva",
                    "Brazil",
                    "2023",
                    PresidentStatus::Active,
                ),
            ],
            timeline: vec![
                TimelineEntry::new("2 hours ago", "German President meets with EU delegates"),
                TimelineEntry::new(
                    "5 hours ago",
                    "South Korean President announces tech initiative",
                ),
            ],
            press_releases: vec![PressRelease::new(
                "Office of the President - Argentina",
                "Economic cooperation agreement signed",
            )],
            events: vec![UpcomingEvent::new(
                "Oct 30, 2024",
                "G20 Summit - Presidential Meeting",
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sample_counts() {
        let content = DashboardContent::default();
        assert_eq!(content.news.len(), 2);
        assert_eq!(content.presidents.len(), 2);
        assert_eq!(content.timeline.len(), 2);
        assert_eq!(content.press_releases.len(), 1);
        assert_eq!(content.events.len(), 1);
    }

    #[test]
    fn test_sample_news_kinds() {
        let content = DashboardContent::sample();
        assert!(content.news[0].is_breaking());
        assert!(!content.news[1].is_breaking());
    }

    #[test]
    fn test_partial_content_falls_back_to_sample() -> Result<(), serde_json::Error> {
        let json = r#"{"events":[{"date":"Jan 1, 2025","description":"Inauguration"}]}"#;
        let content: DashboardContent = serde_json::from_str(json)?;

        assert_eq!(content.events, vec![UpcomingEvent::new("Jan 1, 2025", "Inauguration")]);
        assert_eq!(content.timeline, DashboardContent::sample().timeline);
        Ok(())
    }
}
