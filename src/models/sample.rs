use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest value a rating can take
pub const MAX_RATING: f32 = 5.0;

/// One catalog entry: a shared code sample and its headline metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<u32>,
}

impl SampleRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            author: None,
            views: None,
            rating: None,
            comments_count: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = Some(views);
        self
    }

    /// Ratings outside [0, 5] are clamped into range
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(clamp_rating(rating));
        self
    }

    pub fn with_comments(mut self, comments_count: u32) -> Self {
        self.comments_count = Some(comments_count);
        self
    }

    pub fn views_or_zero(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    pub fn rating_or_zero(&self) -> f32 {
        self.rating.unwrap_or(0.0)
    }

    /// Numeric value of the identifier, used for "newest first" ordering
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.trim().parse().ok()
    }
}

pub fn clamp_rating(rating: f32) -> f32 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleLanguage {
    TypeScript,
    JavaScript,
    Tsx,
    Jsx,
    Css,
    Html,
    Json,
    Text,
    Other(String),
}

impl SampleLanguage {
    /// Parses a language name or file extension, case-insensitively
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "typescript" | "ts" => SampleLanguage::TypeScript,
            "javascript" | "js" | "mjs" => SampleLanguage::JavaScript,
            "tsx" => SampleLanguage::Tsx,
            "jsx" => SampleLanguage::Jsx,
            "css" => SampleLanguage::Css,
            "html" | "htm" => SampleLanguage::Html,
            "json" => SampleLanguage::Json,
            "" | "text" | "txt" | "plaintext" => SampleLanguage::Text,
            other => SampleLanguage::Other(other.to_string()),
        }
    }

    /// Language of a file, judged by its extension
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rsplit_once('.') {
            Some((_, extension)) => Self::parse(extension),
            None => SampleLanguage::Text,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SampleLanguage::TypeScript => "TypeScript",
            SampleLanguage::JavaScript => "JavaScript",
            SampleLanguage::Tsx => "TSX",
            SampleLanguage::Jsx => "JSX",
            SampleLanguage::Css => "CSS",
            SampleLanguage::Html => "HTML",
            SampleLanguage::Json => "JSON",
            SampleLanguage::Text => "Text",
            SampleLanguage::Other(name) => name,
        }
    }

    /// Name of the syntect syntax used to highlight this language.
    /// The default syntax set has no TypeScript grammar, JavaScript is the closest match.
    pub fn syntax_name(&self) -> &'static str {
        match self {
            SampleLanguage::TypeScript
            | SampleLanguage::JavaScript
            | SampleLanguage::Tsx
            | SampleLanguage::Jsx => "JavaScript",
            SampleLanguage::Css => "CSS",
            SampleLanguage::Html => "HTML",
            SampleLanguage::Json => "JSON",
            SampleLanguage::Text | SampleLanguage::Other(_) => "Plain Text",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SampleLanguage::TypeScript | SampleLanguage::Tsx => "",
            SampleLanguage::JavaScript | SampleLanguage::Jsx => "",
            SampleLanguage::Css => "",
            SampleLanguage::Html => "",
            SampleLanguage::Json => "",
            SampleLanguage::Text | SampleLanguage::Other(_) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorCard {
    pub name: String,
    pub bio: String,
}

impl AuthorCard {
    /// Profile path slug, e.g. "Jane Developer" -> "jane-developer"
    pub fn profile_slug(&self) -> String {
        crate::models::category::slugify(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedSample {
    pub id: String,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub user: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub likes: u32,
}

impl Comment {
    /// A new comment by the current user, posted now
    pub fn new_local(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user: user.into(),
            text: text.into(),
            date: Utc::now(),
            likes: 0,
        }
    }

    pub fn formatted_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Everything the detail view shows for one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDetail {
    pub record: SampleRecord,
    pub long_description: String,
    pub code: String,
    pub language: SampleLanguage,
    pub file_name: Option<String>,
    pub author: AuthorCard,
    pub total_ratings: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub related: Vec<RelatedSample>,
    pub faq: Vec<FaqEntry>,
    pub comments: Vec<Comment>,
}

impl SampleDetail {
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        let count = self.record.comments_count.unwrap_or(0);
        self.record.comments_count = Some(count.saturating_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_clamped_on_construction() {
        let record = SampleRecord::new("1", "t", "d").with_rating(7.5);
        assert_eq!(record.rating, Some(5.0));
        let record = SampleRecord::new("1", "t", "d").with_rating(-1.0);
        assert_eq!(record.rating, Some(0.0));
    }

    #[test]
    fn missing_metrics_default_to_zero() {
        let record = SampleRecord::new("1", "t", "d");
        assert_eq!(record.views_or_zero(), 0);
        assert_eq!(record.rating_or_zero(), 0.0);
    }

    #[test]
    fn numeric_id_parses_only_numbers() {
        assert_eq!(SampleRecord::new("104", "t", "d").numeric_id(), Some(104));
        assert_eq!(SampleRecord::new("abc", "t", "d").numeric_id(), None);
    }

    #[test]
    fn language_parsing_falls_back_to_other() {
        assert_eq!(SampleLanguage::parse("TypeScript"), SampleLanguage::TypeScript);
        assert_eq!(SampleLanguage::parse("tsx"), SampleLanguage::Tsx);
        assert_eq!(SampleLanguage::parse(""), SampleLanguage::Text);
        assert_eq!(
            SampleLanguage::parse("Elixir"),
            SampleLanguage::Other("elixir".to_string())
        );
    }

    #[test]
    fn language_follows_the_file_extension() {
        assert_eq!(SampleLanguage::from_file_name("useFetcher.ts"), SampleLanguage::TypeScript);
        assert_eq!(SampleLanguage::from_file_name("Modal.tsx"), SampleLanguage::Tsx);
        assert_eq!(SampleLanguage::from_file_name("Makefile"), SampleLanguage::Text);
    }

    #[test]
    fn adding_a_comment_bumps_the_count() {
        let record = SampleRecord::new("1", "t", "d").with_comments(2);
        let mut detail = SampleDetail {
            record,
            long_description: String::new(),
            code: String::new(),
            language: SampleLanguage::Text,
            file_name: None,
            author: AuthorCard {
                name: "A".into(),
                bio: String::new(),
            },
            total_ratings: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            related: Vec::new(),
            faq: Vec::new(),
            comments: Vec::new(),
        };
        detail.add_comment(Comment::new_local("me", "nice"));
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.record.comments_count, Some(3));
    }
}
