//! Placeholder catalog data.
//!
//! Every screen reads from a [`SampleStore`] built from the literals below. Nothing here
//! is ever written back anywhere.

use crate::models::{
    AuthorCard, Comment, FaqEntry, RelatedSample, SampleDetail, SampleLanguage, SampleRecord,
    SocialLinks, UserProfile,
};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

const FETCHER_CODE: &str = r#"import { useState, useCallback, useEffect } from 'react';

interface FetcherOptions<TData> {
  initialUrl?: string;
  initialOptions?: RequestInit;
  manual?: boolean; // If true, won't fetch on mount
  cacheKey?: string;
  cacheDuration?: number; // in milliseconds
}

interface FetcherState<TData> {
  data: TData | null;
  loading: boolean;
  error: Error | null;
}

function useFetcher<TData = any>(options: FetcherOptions<TData> = {}) {
  const { initialUrl, initialOptions, manual = false } = options;
  const [state, setState] = useState<FetcherState<TData>>({
    data: null,
    loading: !manual && !!initialUrl,
    error: null,
  });

  const fetchData = useCallback(async (url?: string, fetchOptions?: RequestInit) => {
    const currentUrl = url || initialUrl;
    if (!currentUrl) {
      return;
    }
    setState(prev => ({ ...prev, loading: true, error: null }));
    try {
      const response = await fetch(currentUrl, { ...initialOptions, ...fetchOptions });
      if (!response.ok) {
        throw new Error(`HTTP error! status: ${response.status}`);
      }
      const result = await response.json();
      setState({ data: result as TData, loading: false, error: null });
    } catch (err) {
      setState({ data: null, loading: false, error: err as Error });
    }
  }, [initialUrl, initialOptions]);

  useEffect(() => {
    if (!manual && initialUrl) {
      fetchData();
    }
  }, [manual, initialUrl, fetchData]);

  return { ...state, fetchData, revalidate: () => fetchData() };
}

export default useFetcher;
"#;

const FETCHER_LONG_DESCRIPTION: &str = "\
This comprehensive custom hook simplifies data fetching in React applications. \
It handles loading states, error catching, and caching strategies.

Features:
- Automatic loading and error state management
- Optional response caching keyed by request
- Manual mode for fetching on demand
- Written in TypeScript for type safety

Usage:
  const { data, loading, error, fetchData } = useFetcher();
  useEffect(() => { fetchData('/api/users'); }, [fetchData]);";

/// The in-memory sample catalog plus the demo user profile
#[derive(Debug, Clone)]
pub struct SampleStore {
    records: Vec<SampleRecord>,
    featured: Vec<String>,
    profile: UserProfile,
}

impl SampleStore {
    /// Builds a store, dropping records whose id was already seen
    pub fn new(records: Vec<SampleRecord>, featured: Vec<String>, profile: UserProfile) -> Self {
        let mut seen = HashSet::new();
        let records: Vec<SampleRecord> = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id.clone());
                if !fresh {
                    warn!(id = %record.id, "dropping sample with duplicate id");
                }
                fresh
            })
            .collect();

        debug!(count = records.len(), "sample store ready");

        Self {
            records,
            featured,
            profile,
        }
    }

    pub fn seeded() -> Self {
        let records = seed_records();
        let find = |id: &str| records.iter().find(|r| r.id == id).cloned();

        let profile = UserProfile {
            username: "DevExtraordinaire".to_string(),
            name: "Alex Johnson".to_string(),
            bio: "Full-stack developer with a passion for React, Node.js, and building scalable \
                  web applications. Always learning and exploring new technologies. Cat person."
                .to_string(),
            email: "alex.johnson.dev@example.com".to_string(),
            joined_at: at(2022, 5, 15, 0, 0),
            social_links: SocialLinks {
                github: Some("https://github.com/alexj-dev".to_string()),
                linkedin: Some("https://linkedin.com/in/alexj-dev".to_string()),
                website: Some("https://alexj-dev.com".to_string()),
            },
            submitted: ["301", "302"].into_iter().filter_map(find).collect(),
            bookmarked: ["1", "104"].into_iter().filter_map(find).collect(),
        };

        Self::new(
            records,
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
            profile,
        )
    }

    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, id: &str) -> Option<&SampleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Samples highlighted on the home screen, in display order
    pub fn featured(&self) -> Vec<&SampleRecord> {
        self.featured.iter().filter_map(|id| self.get(id)).collect()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Resolves the full detail for a sample, or `None` for unknown ids
    pub fn detail(&self, id: &str) -> Option<SampleDetail> {
        let record = self.get(id)?.clone();

        if record.id == "1" {
            let related = self.related_to(&record, 2);
            return Some(fetcher_detail(record, related));
        }

        let author_name = record
            .author
            .clone()
            .unwrap_or_else(|| "Anonymous".to_string());
        let related = self.related_to(&record, 2);
        let file_name = format!("{}.tsx", component_name(&record.title));

        Some(SampleDetail {
            long_description: record.description.clone(),
            code: placeholder_code(&record),
            language: SampleLanguage::from_file_name(&file_name),
            file_name: Some(file_name),
            author: AuthorCard {
                bio: format!("{} shares React samples with the community.", author_name),
                name: author_name,
            },
            total_ratings: record.comments_count.unwrap_or(0) * 3,
            created_at: at(2023, 9, 1, 9, 0),
            updated_at: at(2023, 10, 1, 9, 0),
            related,
            faq: Vec::new(),
            comments: Vec::new(),
            record,
        })
    }

    /// Up to `limit` other samples sharing at least one tag, in catalog order
    fn related_to(&self, record: &SampleRecord, limit: usize) -> Vec<RelatedSample> {
        let tags: HashSet<String> = record.tags.iter().map(|t| t.to_lowercase()).collect();
        self.records
            .iter()
            .filter(|other| other.id != record.id)
            .filter(|other| {
                other
                    .tags
                    .iter()
                    .any(|t| tags.contains(&t.to_lowercase()) && t.to_lowercase() != "react")
            })
            .take(limit)
            .map(|other| RelatedSample {
                id: other.id.clone(),
                title: other.title.clone(),
                author: other.author.clone().unwrap_or_default(),
            })
            .collect()
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn component_name(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .take(3)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn placeholder_code(record: &SampleRecord) -> String {
    let name = component_name(&record.title);
    format!(
        "import React from 'react';\n\
         \n\
         // {title}\n\
         // {description}\n\
         const {name}: React.FC = () => {{\n\
         \x20 return (\n\
         \x20   <div className=\"{class}\">\n\
         \x20     {{/* implementation */}}\n\
         \x20   </div>\n\
         \x20 );\n\
         }};\n\
         \n\
         export default {name};\n",
        title = record.title,
        description = record.description,
        name = name,
        class = crate::models::category::slugify(&record.title),
    )
}

const FETCHER_FILE_NAME: &str = "useFetcher.ts";

fn fetcher_detail(record: SampleRecord, related: Vec<RelatedSample>) -> SampleDetail {
    SampleDetail {
        record,
        long_description: FETCHER_LONG_DESCRIPTION.to_string(),
        code: FETCHER_CODE.to_string(),
        language: SampleLanguage::from_file_name(FETCHER_FILE_NAME),
        file_name: Some(FETCHER_FILE_NAME.to_string()),
        author: AuthorCard {
            name: "Jane Developer".to_string(),
            bio: "Senior React Developer passionate about clean code and reusable components."
                .to_string(),
        },
        total_ratings: 125,
        created_at: at(2023, 10, 26, 10, 0),
        updated_at: at(2023, 11, 5, 14, 30),
        related,
        faq: vec![
            FaqEntry {
                question: "Can I use this with GraphQL?".to_string(),
                answer: "While primarily designed for REST APIs, you could adapt the fetching \
                         logic for GraphQL queries with some modifications to how the request \
                         body and headers are handled."
                    .to_string(),
            },
            FaqEntry {
                question: "How do I handle authentication?".to_string(),
                answer: "You can pass authentication tokens in the `fetchOptions` (e.g., in \
                         headers). For more complex scenarios, consider wrapping this hook with \
                         an auth-aware layer."
                    .to_string(),
            },
        ],
        comments: vec![
            Comment {
                id: "c1".to_string(),
                user: "CodeNinja".to_string(),
                text: "This is amazing! Saved me so much time. Thanks for sharing!".to_string(),
                date: at(2023, 10, 27, 12, 0),
                likes: 15,
            },
            Comment {
                id: "c2".to_string(),
                user: "ReactFan".to_string(),
                text: "Great hook. One suggestion: add support for AbortController to cancel \
                       requests?"
                    .to_string(),
                date: at(2023, 10, 28, 9, 30),
                likes: 8,
            },
        ],
    }
}

fn seed_records() -> Vec<SampleRecord> {
    vec![
        SampleRecord::new(
            "1",
            "React Custom Hook for API Calls",
            "A flexible custom hook for fetching data with loading and error states.",
        )
        .with_tags(["React", "Hooks", "API Integration"])
        .with_author("DevUser1")
        .with_views(1200)
        .with_rating(4.8)
        .with_comments(15),
        SampleRecord::new(
            "2",
            "Animated Sidebar Component with Framer Motion",
            "Smoothly animated sidebar for navigation, built with Tailwind CSS and Framer Motion.",
        )
        .with_tags(["React", "Animation", "UI Components"])
        .with_author("CreativeCoder")
        .with_views(850)
        .with_rating(4.5)
        .with_comments(9),
        SampleRecord::new(
            "3",
            "Efficient Data Table with Sorting and Pagination",
            "A reusable data table component featuring client-side sorting and pagination for large datasets.",
        )
        .with_tags(["React", "Table", "Performance"])
        .with_author("DataGuru")
        .with_views(950)
        .with_rating(4.7)
        .with_comments(12),
        SampleRecord::new(
            "101",
            "Advanced Form Handling with Zod",
            "Robust form validation and management using React Hook Form and Zod.",
        )
        .with_tags(["React", "Forms", "Validation", "Zod"])
        .with_author("FormMaster")
        .with_views(750)
        .with_rating(4.9)
        .with_comments(22),
        SampleRecord::new(
            "102",
            "Context API State Management Example",
            "A clear example of using React Context API for global state management.",
        )
        .with_tags(["React", "State Management", "Context API"])
        .with_author("StateSavvy")
        .with_views(620)
        .with_rating(4.6)
        .with_comments(18),
        SampleRecord::new(
            "103",
            "Responsive Navbar with Tailwind CSS",
            "A fully responsive navigation bar component styled with Tailwind CSS.",
        )
        .with_tags(["React", "UI Components", "TailwindCSS", "Responsive"])
        .with_author("TailwindFan")
        .with_views(900)
        .with_rating(4.7)
        .with_comments(11),
        SampleRecord::new(
            "104",
            "Image Upload with Preview Component",
            "React component for image uploading with client-side preview functionality.",
        )
        .with_tags(["React", "File Upload", "UI Components"])
        .with_author("MediaMogul")
        .with_views(500)
        .with_rating(4.4)
        .with_comments(7),
        SampleRecord::new(
            "105",
            "Draggable Kanban Board",
            "A simple Kanban board with draggable cards for task management.",
        )
        .with_tags(["React", "Drag & Drop", "UI Components"])
        .with_author("ProjectPro")
        .with_views(1100)
        .with_rating(4.8)
        .with_comments(25),
        SampleRecord::new(
            "106",
            "Infinite Scroll Component",
            "Implement infinite scrolling for lists of data with React.",
        )
        .with_tags(["React", "Performance", "UI Components"])
        .with_author("ScrollKing")
        .with_views(800)
        .with_rating(4.5)
        .with_comments(14),
        SampleRecord::new(
            "301",
            "Reusable Modal Component with Portals",
            "A fully accessible and customizable modal component using React Portals.",
        )
        .with_tags(["React", "UI Components", "Modal", "Accessibility"])
        .with_author("Alex Johnson")
        .with_views(1500)
        .with_rating(4.9)
        .with_comments(25),
        SampleRecord::new(
            "302",
            "useDebounce Hook for Input Fields",
            "Optimize performance by debouncing input changes with this simple custom hook.",
        )
        .with_tags(["React", "Hooks", "Performance"])
        .with_author("Alex Johnson")
        .with_views(980)
        .with_rating(4.7)
        .with_comments(12),
    ]
}
