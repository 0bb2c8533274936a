/// Shared data structures for the application state
///
/// Plain records that flow between the persistence layer and the UI layer,
/// plus the closed set of navigable views. All persisted records serialize
/// with camelCase field names so the stored JSON matches the established
/// collection format.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Produce an RFC 3339 UTC timestamp with millisecond precision.
/// Used both as record id and as creation time for posts and images.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The closed set of product categories shown in the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioCategory {
    #[serde(rename = "Team Uniforms")]
    TeamUniforms,
    #[serde(rename = "Sublimation")]
    Sublimation,
    #[serde(rename = "Gym & Training")]
    GymTraining,
    #[serde(rename = "Martial Arts")]
    MartialArts,
    #[serde(rename = "Other")]
    Other,
}

impl PortfolioCategory {
    pub const ALL: [PortfolioCategory; 5] = [
        PortfolioCategory::TeamUniforms,
        PortfolioCategory::Sublimation,
        PortfolioCategory::GymTraining,
        PortfolioCategory::MartialArts,
        PortfolioCategory::Other,
    ];

    /// Match a display string back to a category. Used for AI analysis
    /// results, which return the category as free text.
    pub fn from_label(label: &str) -> Option<PortfolioCategory> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label.trim()))
    }

    /// The display string, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            PortfolioCategory::TeamUniforms => "Team Uniforms",
            PortfolioCategory::Sublimation => "Sublimation",
            PortfolioCategory::GymTraining => "Gym & Training",
            PortfolioCategory::MartialArts => "Martial Arts",
            PortfolioCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for PortfolioCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The currently active view. Exactly one instance exists at a time,
/// owned by the app; navigation replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    Mockup,
    Contact,
    Resources,
    Admin,
    Category(PortfolioCategory),
}

/// A portfolio entry shown on the home page and in category galleries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    /// Unique id; doubles as the sort key for portfolio reads
    pub id: String,
    pub category: PortfolioCategory,
    pub title: String,
    pub image_url: String,
    /// Alternate image swapped in on hover
    pub hover_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A blog post drafted in the admin panel and listed on the resources page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// RFC 3339 timestamp string; doubles as uniqueness and creation time
    pub id: String,
    pub title: String,
    /// Markdown body
    pub content: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl BlogPost {
    /// Build a new post stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = timestamp_now();
        BlogPost {
            id: now.clone(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            summary: None,
        }
    }
}

/// A generated image kept in the admin media library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedImage {
    pub id: String,
    pub prompt: String,
    /// Data URI or remote URL
    pub url: String,
    pub created_at: String,
}

impl ManagedImage {
    pub fn new(prompt: impl Into<String>, url: impl Into<String>) -> Self {
        let now = timestamp_now();
        ManagedImage {
            id: now.clone(),
            prompt: prompt.into(),
            url: url.into(),
            created_at: now,
        }
    }
}

/// The six portfolio records seeded into a fresh store on first read
pub fn seed_portfolio_items() -> Vec<PortfolioItem> {
    fn item(
        id: &str,
        category: PortfolioCategory,
        title: &str,
        front: &str,
        back: &str,
    ) -> PortfolioItem {
        PortfolioItem {
            id: id.to_string(),
            category,
            title: title.to_string(),
            image_url: format!("https://picsum.photos/seed/{front}/500/700"),
            hover_image_url: format!("https://picsum.photos/seed/{back}/500/700"),
            description: None,
        }
    }

    vec![
        item("1", PortfolioCategory::TeamUniforms, "Dragons RFC Soccer Kit", "soccer1", "soccer2"),
        item("2", PortfolioCategory::Sublimation, "Vortex Cycling Jersey", "cycling1", "cycling2"),
        item("3", PortfolioCategory::MartialArts, "Kobra Kai Karate Gi", "karate1", "karate2"),
        item("4", PortfolioCategory::GymTraining, "Iron Gym Compression Set", "gym1", "gym2"),
        item("5", PortfolioCategory::TeamUniforms, "Eagles Basketball Uniform", "bball1", "bball2"),
        item("6", PortfolioCategory::Sublimation, "Cheer Elite All-Over Print", "cheer1", "cheer2"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_to_display_string() {
        let json = serde_json::to_string(&PortfolioCategory::GymTraining).unwrap();
        assert_eq!(json, "\"Gym & Training\"");

        let back: PortfolioCategory = serde_json::from_str("\"Team Uniforms\"").unwrap();
        assert_eq!(back, PortfolioCategory::TeamUniforms);
    }

    #[test]
    fn test_portfolio_item_uses_camel_case_fields() {
        let item = seed_portfolio_items().remove(0);
        let value = serde_json::to_value(&item).unwrap();

        assert!(value.get("imageUrl").is_some());
        assert!(value.get("hoverImageUrl").is_some());
        // Absent description must not appear in the stored JSON
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_blog_post_id_doubles_as_creation_time() {
        let post = BlogPost::new("Title", "Body");
        assert_eq!(post.id, post.created_at);

        let value = serde_json::to_value(&post).unwrap();
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_seed_records_match_expected_categories() {
        let seeds = seed_portfolio_items();
        assert_eq!(seeds.len(), 6);

        let team: Vec<&str> = seeds
            .iter()
            .filter(|i| i.category == PortfolioCategory::TeamUniforms)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(team, ["1", "5"]);
    }
}
