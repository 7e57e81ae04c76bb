//! Static feed entries rendered by the secondary panels.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Relative time such as `2 hours ago`.
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressRelease {
    /// Issuing office, e.g. `Office of the President - Argentina`.
    pub office: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    pub date: String,
    pub description: String,
}

impl TimelineEntry {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

impl PressRelease {
    pub fn new(office: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            office: office.into(),
            description: description.into(),
        }
    }
}

impl UpcomingEvent {
    pub fn new(date: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
        }
    }
}
