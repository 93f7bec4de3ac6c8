use serde::{Deserialize, Serialize};

/// A fixed catalog category. Tags are matched against `id` after slugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "hooks",
        label: "Hooks",
    },
    Category {
        id: "ui-components",
        label: "UI Components",
    },
    Category {
        id: "state-management",
        label: "State Management",
    },
    Category {
        id: "forms",
        label: "Forms & Validation",
    },
    Category {
        id: "animation",
        label: "Animation",
    },
    Category {
        id: "api-integration",
        label: "API Integration",
    },
];

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Lower-cases a tag and joins its whitespace-separated words with single hyphens
pub fn slugify(tag: &str) -> String {
    tag.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Catalog ordering. Every variant sorts descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortKey {
    #[default]
    Popularity,
    Newest,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Popularity, SortKey::Newest, SortKey::Rating];

    pub fn id(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Newest => "newest",
            SortKey::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Popularity => "Popularity",
            SortKey::Newest => "Newest First",
            SortKey::Rating => "Highest Rated",
        }
    }

    /// Unrecognized identifiers fall back to popularity
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "newest" => SortKey::Newest,
            "rating" => SortKey::Rating,
            _ => SortKey::Popularity,
        }
    }

    /// Next option in selector order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            SortKey::Popularity => SortKey::Newest,
            SortKey::Newest => SortKey::Rating,
            SortKey::Rating => SortKey::Popularity,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            SortKey::Popularity => SortKey::Rating,
            SortKey::Newest => SortKey::Popularity,
            SortKey::Rating => SortKey::Newest,
        }
    }
}

impl From<String> for SortKey {
    fn from(id: String) -> Self {
        SortKey::from_id(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("State Management"), "state-management");
        assert_eq!(slugify("UI   Components"), "ui-components");
        assert_eq!(slugify("Drag & Drop"), "drag-&-drop");
        assert_eq!(slugify("React"), "react");
    }

    #[test]
    fn category_ids_are_already_slugs() {
        for category in CATEGORIES {
            assert_eq!(slugify(category.label.replace(" & Validation", "").as_str()), category.id);
        }
    }

    #[test]
    fn unknown_sort_ids_fall_back_to_popularity() {
        assert_eq!(SortKey::from_id("newest"), SortKey::Newest);
        assert_eq!(SortKey::from_id("RATING"), SortKey::Rating);
        assert_eq!(SortKey::from_id("alphabetical"), SortKey::Popularity);
        assert_eq!(SortKey::from_id(""), SortKey::Popularity);
    }

    #[test]
    fn deserializing_unknown_keys_falls_back() {
        let key: SortKey = serde_json::from_str("\"newest\"").unwrap();
        assert_eq!(key, SortKey::Newest);
        let key: SortKey = serde_json::from_str("\"trending\"").unwrap();
        assert_eq!(key, SortKey::Popularity);
        assert_eq!(serde_json::to_string(&SortKey::Rating).unwrap(), "\"rating\"");
    }

    #[test]
    fn sort_selector_cycles() {
        let mut key = SortKey::default();
        for _ in 0..SortKey::ALL.len() {
            key = key.next();
        }
        assert_eq!(key, SortKey::Popularity);
        assert_eq!(SortKey::Popularity.previous(), SortKey::Rating);
    }

    #[test]
    fn find_category_by_id() {
        assert_eq!(find_category("forms").map(|c| c.label), Some("Forms & Validation"));
        assert!(find_category("nope").is_none());
    }
}
