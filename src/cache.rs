//! Detail cache with timestamp-based eviction.
//!
//! Owned by the `App` and passed the current time on every call, so expiry is a
//! plain comparison against the stored timestamp.

use crate::models::SampleDetail;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Debug, Clone)]
struct CacheEntry {
    detail: SampleDetail,
    stored_at: Instant,
}

#[derive(Debug, Clone)]
pub struct DetailCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl DetailCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.stored_at) < self.ttl
    }

    /// Returns a fresh entry. An expired entry is evicted and `None` is returned.
    pub fn get(&mut self, id: &str, now: Instant) -> Option<&SampleDetail> {
        let fresh = self.entries.get(id).map(|e| self.is_fresh(e, now))?;
        if !fresh {
            trace!(id, "detail cache entry expired");
            self.entries.remove(id);
            return None;
        }
        self.entries.get(id).map(|e| &e.detail)
    }

    pub fn get_mut(&mut self, id: &str, now: Instant) -> Option<&mut SampleDetail> {
        self.get(id, now)?;
        self.entries.get_mut(id).map(|e| &mut e.detail)
    }

    pub fn insert(&mut self, id: impl Into<String>, detail: SampleDetail, now: Instant) {
        self.entries.insert(
            id.into(),
            CacheEntry {
                detail,
                stored_at: now,
            },
        );
    }

    /// Drops every expired entry, returning how many were removed
    pub fn evict_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) < ttl);
        before - self.entries.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SampleStore;

    fn detail(id: &str) -> SampleDetail {
        SampleStore::seeded().detail(id).expect("seeded id")
    }

    #[test]
    fn fresh_entries_are_returned() {
        let mut cache = DetailCache::new(Duration::from_secs(10));
        let now = Instant::now();
        cache.insert("1", detail("1"), now);
        let hit = cache.get("1", now + Duration::from_secs(9));
        assert_eq!(hit.map(|d| d.record.id.as_str()), Some("1"));
    }

    #[test]
    fn expired_entries_are_evicted_on_access() {
        let mut cache = DetailCache::new(Duration::from_secs(10));
        let now = Instant::now();
        cache.insert("1", detail("1"), now);
        assert!(cache.get("1", now + Duration::from_secs(10)).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn evict_expired_keeps_fresh_entries() {
        let mut cache = DetailCache::new(Duration::from_secs(10));
        let now = Instant::now();
        cache.insert("1", detail("1"), now);
        cache.insert("101", detail("101"), now + Duration::from_secs(5));
        assert_eq!(cache.evict_expired(now + Duration::from_secs(12)), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("101", now + Duration::from_secs(12)).is_some());
    }

    #[test]
    fn missing_ids_miss() {
        let mut cache = DetailCache::new(Duration::from_secs(300));
        assert!(cache.get("nope", Instant::now()).is_none());
    }
}
