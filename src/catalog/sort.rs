use crate::models::{SampleRecord, SortKey};
use std::cmp::Ordering;

/// Returns a new ordering of `records`, highest first under `sort_key`.
/// The sort is stable: records comparing equal keep their relative order.
pub fn sort<'a>(records: &[&'a SampleRecord], sort_key: SortKey) -> Vec<&'a SampleRecord> {
    let compare = comparator(sort_key);
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| compare(a, b));
    ordered
}

fn comparator(sort_key: SortKey) -> fn(&SampleRecord, &SampleRecord) -> Ordering {
    match sort_key {
        SortKey::Popularity => by_views,
        SortKey::Newest => by_numeric_id,
        SortKey::Rating => by_rating,
    }
}

fn by_views(a: &SampleRecord, b: &SampleRecord) -> Ordering {
    b.views_or_zero().cmp(&a.views_or_zero())
}

fn by_rating(a: &SampleRecord, b: &SampleRecord) -> Ordering {
    b.rating_or_zero().total_cmp(&a.rating_or_zero())
}

/// Non-numeric identifiers sort after every numeric one
fn by_numeric_id(a: &SampleRecord, b: &SampleRecord) -> Ordering {
    b.numeric_id().cmp(&a.numeric_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[&SampleRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    fn fixture() -> Vec<SampleRecord> {
        vec![
            SampleRecord::new("3", "a", "").with_views(100).with_rating(4.0),
            SampleRecord::new("10", "b", "").with_views(900),
            SampleRecord::new("7", "c", "").with_views(100).with_rating(4.9),
            SampleRecord::new("2", "d", "").with_rating(4.0),
        ]
    }

    #[test]
    fn newest_compares_ids_numerically() {
        let records = vec![
            SampleRecord::new("1", "", "").with_views(500),
            SampleRecord::new("2", "", "").with_views(900),
        ];
        let refs: Vec<_> = records.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Newest)), vec!["2", "1"]);

        let records = fixture();
        let refs: Vec<_> = records.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Newest)), vec!["10", "7", "3", "2"]);
    }

    #[test]
    fn non_numeric_ids_sort_last_without_panicking() {
        let records = vec![
            SampleRecord::new("abc", "", ""),
            SampleRecord::new("5", "", ""),
        ];
        let refs: Vec<_> = records.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Newest)), vec!["5", "abc"]);
    }

    #[test]
    fn popularity_is_descending_views_and_stable() {
        let records = fixture();
        let refs: Vec<_> = records.iter().collect();
        // "3" and "7" tie on views and keep input order; "2" has no views
        assert_eq!(ids(&sort(&refs, SortKey::Popularity)), vec!["10", "3", "7", "2"]);
    }

    #[test]
    fn rating_never_places_lower_before_higher() {
        let records = fixture();
        let refs: Vec<_> = records.iter().collect();
        let sorted = sort(&refs, SortKey::Rating);
        for pair in sorted.windows(2) {
            assert!(pair[0].rating_or_zero() >= pair[1].rating_or_zero());
        }
        // missing rating counts as zero
        assert_eq!(sorted.last().map(|r| r.id.as_str()), Some("10"));
    }

    #[test]
    fn sorting_is_idempotent() {
        let records = fixture();
        let refs: Vec<_> = records.iter().collect();
        for key in SortKey::ALL {
            let once = sort(&refs, key);
            let twice = sort(&once, key);
            assert_eq!(ids(&once), ids(&twice), "{:?}", key);
        }
    }

    #[test]
    fn input_order_is_not_modified() {
        let records = fixture();
        let refs: Vec<_> = records.iter().collect();
        let _ = sort(&refs, SortKey::Rating);
        assert_eq!(ids(&refs), vec!["3", "10", "7", "2"]);
    }
}
