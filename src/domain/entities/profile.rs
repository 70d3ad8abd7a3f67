//! Creator profile entity.

use serde::{Deserialize, Serialize};

use super::design::DesignId;

/// Aggregate numbers shown on a creator's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub designs_count: u32,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub sales: u32,
    /// Lifetime royalties in cents.
    #[serde(default)]
    pub earnings_cents: u64,
}

impl ProfileStats {
    /// Earnings formatted as dollars, e.g. `$246.80`.
    #[must_use]
    pub fn earnings_display(&self) -> String {
        format!(
            "${}.{:02}",
            self.earnings_cents / 100,
            self.earnings_cents % 100
        )
    }
}

/// The signed-in creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub stats: ProfileStats,
    /// Designs published by this creator, in display order.
    #[serde(default)]
    pub design_ids: Vec<DesignId>,
}

impl CreatorProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            bio: String::new(),
            avatar: None,
            stats: ProfileStats::default(),
            design_ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earnings_display() {
        let stats = ProfileStats {
            earnings_cents: 24_680,
            ..ProfileStats::default()
        };
        assert_eq!(stats.earnings_display(), "$246.80");

        let stats = ProfileStats {
            earnings_cents: 5,
            ..ProfileStats::default()
        };
        assert_eq!(stats.earnings_display(), "$0.05");
    }
}
