//! Built-in catalog used when no catalog file is configured.

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::domain::entities::{
    ActivityKind, ActivityNotification, CreatorProfile, DesignRecord, ProfileStats, TagSet,
};
use crate::domain::errors::CatalogError;
use crate::domain::ports::{CatalogPort, CatalogSnapshot};

const PHOTOS: &str = "https://images.pexels.com/photos";

fn tags(names: &[&str]) -> TagSet {
    names.iter().copied().collect()
}

fn photo(path: &str) -> String {
    format!("{PHOTOS}/{path}")
}

fn seed_designs() -> Vec<DesignRecord> {
    vec![
        DesignRecord::new("1", "Neon Dreams", "Sarah Johnson")
            .with_tags(tags(&["neon", "retro", "abstract", "urban", "geometric"]))
            .with_likes(342, false)
            .with_description(
                "A vibrant exploration of neon colors and geometric shapes that capture the \
                 essence of urban nightlife.",
            )
            .with_images(
                photo("4641825/pexels-photo-4641825.jpeg"),
                Some(photo("6347193/pexels-photo-6347193.jpeg")),
            )
            .with_created("2 weeks ago"),
        DesignRecord::new("2", "Cosmic Waves", "Michael Chen")
            .with_tags(tags(&["space", "galaxy", "abstract", "cosmic", "blue"]))
            .with_likes(256, true)
            .with_description(
                "Inspired by the mysteries of the cosmos, this design depicts the flowing \
                 energy waves of distant galaxies.",
            )
            .with_images(
                photo("8532616/pexels-photo-8532616.jpeg"),
                Some(photo("7691441/pexels-photo-7691441.jpeg")),
            )
            .with_created("1 month ago"),
        DesignRecord::new("3", "Desert Bloom", "Jessica Smith")
            .with_tags(tags(&["nature", "floral", "minimal", "desert", "botanical"]))
            .with_likes(189, false)
            .with_description(
                "A delicate portrayal of desert flora, showcasing the resilience and beauty \
                 of nature in harsh environments.",
            )
            .with_images(
                photo("7147449/pexels-photo-7147449.jpeg"),
                Some(photo("6348101/pexels-photo-6348101.jpeg")),
            )
            .with_created("3 weeks ago"),
        DesignRecord::new("4", "Urban Jungle", "David Wong")
            .with_tags(tags(&["urban", "geometric", "modern", "tropical", "green"]))
            .with_likes(421, false)
            .with_description(
                "A bold collision of city architecture and lush tropical elements, \
                 representing the balance between urban life and nature.",
            )
            .with_images(
                photo("5698853/pexels-photo-5698853.jpeg"),
                Some(photo("8985493/pexels-photo-8985493.jpeg")),
            )
            .with_created("2 months ago"),
        DesignRecord::new("5", "Retro Wave", "Emma Davis")
            .with_tags(tags(&["retro", "wave", "vintage", "80s", "sunset"]))
            .with_likes(315, false)
            .with_description(
                "A nostalgic throwback to 80s aesthetics with a modern twist, featuring bold \
                 patterns and sunset gradients.",
            )
            .with_images(
                photo("5698851/pexels-photo-5698851.jpeg"),
                Some(photo("7691401/pexels-photo-7691401.jpeg")),
            )
            .with_created("1 week ago"),
        DesignRecord::new("6", "Mountain Echo", "Alex Thompson")
            .with_tags(tags(&["nature", "landscape", "minimal"]))
            .with_images(photo("9754/mountains-clouds-forest-fog.jpg"), None),
        DesignRecord::new("7", "Ocean Vibes", "Olivia Wilson")
            .with_tags(tags(&["ocean", "blue", "minimal"]))
            .with_images(photo("1295138/pexels-photo-1295138.jpeg"), None),
    ]
}

fn seed_activity() -> Vec<ActivityNotification> {
    let now = Utc::now();
    vec![
        ActivityNotification::new(
            "1",
            ActivityKind::Approval,
            "Design Approved!",
            "Your \"Neon Dreams\" design has been approved and is now live.",
            now - Duration::hours(2),
        )
        .with_design("1"),
        ActivityNotification::new(
            "2",
            ActivityKind::Sale,
            "New Sale",
            "Someone purchased a t-shirt with your \"Cosmic Waves\" design.",
            now - Duration::days(1),
        )
        .with_design("2")
        .with_read(true),
        ActivityNotification::new(
            "3",
            ActivityKind::Payout,
            "Royalty Payment",
            "You received a payout of $45.60 for April sales.",
            now - Duration::days(3),
        )
        .with_read(true),
        ActivityNotification::new(
            "4",
            ActivityKind::Alert,
            "Trending Design",
            "Your \"Urban Jungle\" design is trending with 200+ likes today!",
            now - Duration::weeks(1),
        )
        .with_design("4")
        .with_read(true),
    ]
}

fn seed_profile() -> CreatorProfile {
    let mut profile = CreatorProfile::new("Jessica Smith", "@jessicasmith");
    profile.bio = "Graphic designer passionate about minimal aesthetics and bold colors.".into();
    profile.avatar = Some(photo("415829/pexels-photo-415829.jpeg"));
    profile.stats = ProfileStats {
        designs_count: 8,
        likes_count: 423,
        sales: 35,
        earnings_cents: 24_680,
    };
    profile.design_ids = vec!["3".into(), "5".into()];
    profile
}

/// Catalog source backed by the built-in mock data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalogSource;

impl SeedCatalogSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogPort for SeedCatalogSource {
    async fn load(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(CatalogSnapshot {
            designs: seed_designs(),
            activity: seed_activity(),
            profile: Some(seed_profile()),
        })
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_seed_is_consistent() {
        let snapshot = SeedCatalogSource::new().load().await.unwrap();

        assert_eq!(snapshot.designs.len(), 7);
        assert_eq!(snapshot.activity.len(), 4);

        let ids: HashSet<_> = snapshot.designs.iter().map(|d| d.id().clone()).collect();
        assert_eq!(ids.len(), snapshot.designs.len());

        for n in &snapshot.activity {
            if let Some(design_id) = &n.design_id {
                assert!(ids.contains(design_id));
            }
        }

        let profile = snapshot.profile.unwrap();
        assert!(profile.design_ids.iter().all(|id| ids.contains(id)));
    }

    #[tokio::test]
    async fn test_seed_tags_are_lowercase() {
        let snapshot = SeedCatalogSource::new().load().await.unwrap();
        for design in &snapshot.designs {
            for tag in design.tags() {
                assert_eq!(tag.as_str(), tag.as_str().to_lowercase());
            }
        }
    }
}
