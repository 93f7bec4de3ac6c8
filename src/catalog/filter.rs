use crate::models::SampleRecord;
use crate::models::category::slugify;
use std::collections::BTreeSet;

/// Keeps records whose title or description contains `keyword` (case-insensitive)
/// and, when categories are selected, that carry at least one tag in the selection.
/// Input order is preserved.
pub fn filter<'a>(
    records: &'a [SampleRecord],
    keyword: &str,
    selected_categories: &BTreeSet<String>,
) -> Vec<&'a SampleRecord> {
    let keyword = keyword.to_lowercase();

    records
        .iter()
        .filter(|record| matches_keyword(record, &keyword))
        .filter(|record| matches_categories(record, selected_categories))
        .collect()
}

/// `keyword` must already be lower-cased
fn matches_keyword(record: &SampleRecord, keyword: &str) -> bool {
    keyword.is_empty()
        || record.title.to_lowercase().contains(keyword)
        || record.description.to_lowercase().contains(keyword)
}

fn matches_categories(record: &SampleRecord, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || record.tags.iter().any(|tag| selected.contains(&slugify(tag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn fixture() -> Vec<SampleRecord> {
        vec![
            SampleRecord::new("1", "React hooks primer", "Custom hooks in depth")
                .with_tags(["React", "Hooks"]),
            SampleRecord::new("2", "Navbar", "Responsive navbar built with React")
                .with_tags(["React", "UI Components"]),
            SampleRecord::new("3", "Kanban board", "Drag cards between columns")
                .with_tags(["Drag & Drop", "UI   Components"]),
            SampleRecord::new("4", "Untagged snippet", "Plain React snippet"),
        ]
    }

    fn ids(records: &[&SampleRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn keyword_matching_ignores_case() {
        let records = fixture();
        let upper = filter(&records, "REACT", &BTreeSet::new());
        let lower = filter(&records, "react", &BTreeSet::new());
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&lower), vec!["1", "2", "4"]);
    }

    #[test]
    fn keyword_matches_title_or_description() {
        let records = fixture();
        assert_eq!(ids(&filter(&records, "kanban", &BTreeSet::new())), vec!["3"]);
        assert_eq!(ids(&filter(&records, "columns", &BTreeSet::new())), vec!["3"]);
    }

    #[test]
    fn empty_keyword_and_categories_is_identity() {
        let records = fixture();
        let all: Vec<&SampleRecord> = records.iter().collect();
        assert_eq!(filter(&records, "", &BTreeSet::new()), all);
    }

    #[test]
    fn untagged_records_never_match_a_category() {
        let records = vec![SampleRecord::new("1", "t", "d")];
        assert!(filter(&records, "", &set(&["ui"])).is_empty());
    }

    #[test]
    fn keyword_and_category_are_combined_with_and() {
        let records = fixture();
        let selected = set(&["ui-components"]);
        assert_eq!(ids(&filter(&records, "", &selected)), vec!["2", "3"]);
        assert_eq!(ids(&filter(&records, "react", &selected)), vec!["2"]);
        assert!(filter(&records, "primer", &selected).is_empty());
    }

    #[test]
    fn any_selected_category_is_enough() {
        let records = fixture();
        let selected = set(&["hooks", "drag-&-drop"]);
        assert_eq!(ids(&filter(&records, "", &selected)), vec!["1", "3"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let records = fixture();
        let before = records.clone();
        let _ = filter(&records, "react", &set(&["hooks"]));
        assert_eq!(records, before);
    }
}
