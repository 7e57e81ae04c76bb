use serde::{Deserialize, Serialize};

pub const AVATAR_SIZE: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresidentStatus {
    #[default]
    Active,
    Former,
}

/// A sitting head of state shown in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct President {
    pub name: String,
    pub country: String,
    /// Year the term started, kept as display text.
    pub since: String,
    // Not rendered anywhere yet.
    #[serde(default)]
    pub status: PresidentStatus,
}

impl President {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        since: impl Into<String>,
        status: PresidentStatus,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            since: since.into(),
            status,
        }
    }

    /// `France (Since 2017)`
    pub fn subtitle(&self) -> String {
        format!("{} (Since {})", self.country, self.since)
    }

    pub fn avatar_src(&self) -> String {
        placeholder_path(AVATAR_SIZE, AVATAR_SIZE)
    }
}

/// Path of the placeholder image service for the given size.
pub fn placeholder_path(width: u16, height: u16) -> String {
    format!("/api/placeholder/{width}/{height}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_subtitle() {
        let president = President::new("Emmanuel Macron", "France", "2017", PresidentStatus::Active);
        assert_eq!(president.subtitle(), "France (Since 2017)");
    }

    #[test]
    fn test_placeholder_path() {
        assert_eq!(placeholder_path(40, 40), "/api/placeholder/40/40");
        assert_eq!(placeholder_path(64, 32), "/api/placeholder/64/32");
    }

    #[test]
    fn test_avatar_src() {
        let president = President::new("A", "B", "2020", PresidentStatus::Active);
        assert_eq!(president.avatar_src(), "/api/placeholder/40/40");
    }
}
