use crate::models::SampleRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

impl SocialLinks {
    /// (label, url) pairs for the links that are set
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", self.github.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
            ("Website", self.website.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| (label, url)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub bio: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
    pub social_links: SocialLinks,
    pub submitted: Vec<SampleRecord>,
    pub bookmarked: Vec<SampleRecord>,
}

impl UserProfile {
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn joined_label(&self) -> String {
        format!("Joined {}", self.joined_at.format("%B %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile() -> UserProfile {
        UserProfile {
            username: "dev".into(),
            name: "alex johnson".into(),
            bio: String::new(),
            email: String::new(),
            joined_at: Utc.with_ymd_and_hms(2022, 5, 15, 0, 0, 0).unwrap(),
            social_links: SocialLinks {
                github: Some("https://github.com/x".into()),
                linkedin: None,
                website: Some("https://x.dev".into()),
            },
            submitted: Vec::new(),
            bookmarked: Vec::new(),
        }
    }

    #[test]
    fn initials_and_labels() {
        let p = profile();
        assert_eq!(p.initials(), "AJ");
        assert_eq!(p.handle(), "@dev");
        assert_eq!(p.joined_label(), "Joined May 2022");
    }

    #[test]
    fn only_present_links_are_listed() {
        let links = profile().social_links;
        let labels: Vec<_> = links.entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["GitHub", "Website"]);
    }
}
