use std::{collections::HashMap, hash::Hash, sync::Arc};

use crate::data::FetchError;

/// Receipt for one dispatched request. Only the newest ticket of a key may
/// write to that key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    pub key: K,
    pub generation: u64,
}

/// What a view sees for one key.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Never requested.
    Idle,
    /// Requested, nothing received yet.
    Loading,
    /// Data present. A refresh may be running in the background.
    Ready(Arc<T>),
    /// No data and the last request failed.
    Failed(FetchError),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn data(&self) -> Option<&Arc<T>> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

struct Entry<T> {
    data: Option<Arc<T>>,
    error: Option<FetchError>,
    in_flight: Option<u64>,
    latest: u64,
    stale: bool,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: None,
            latest: 0,
            stale: false,
        }
    }
}

/// Results of one resource kind, keyed by identifier.
///
/// Entries are never evicted. Switching to another key leaves the old entry
/// in place so coming back is instant.
pub struct QueryCache<K, T> {
    entries: HashMap<K, Entry<T>>,
    next_generation: u64,
}

impl<K, T> Default for QueryCache<K, T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_generation: 1,
        }
    }
}

impl<K: Eq + Hash + Clone, T> QueryCache<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a request should be dispatched for `key` now.
    /// Failed entries wait for an explicit `invalidate`.
    pub fn needs_fetch(&self, key: &K) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(entry) => entry.stale && entry.in_flight.is_none(),
        }
    }

    pub fn is_fetching(&self, key: &K) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| entry.in_flight.is_some())
    }

    /// Record a dispatch and hand out its ticket.
    pub fn begin(&mut self, key: &K) -> Ticket<K> {
        let generation = self.next_generation;
        self.next_generation += 1;

        let entry = self.entries.entry(key.clone()).or_default();
        entry.in_flight = Some(generation);
        entry.latest = generation;
        entry.stale = false;

        Ticket {
            key: key.clone(),
            generation,
        }
    }

    /// Apply a result. Returns `false` when the ticket was superseded and the
    /// result was dropped.
    pub fn resolve(&mut self, ticket: Ticket<K>, result: Result<T, FetchError>) -> bool {
        let Some(entry) = self.entries.get_mut(&ticket.key) else {
            return false;
        };
        if entry.latest != ticket.generation {
            return false;
        }

        entry.in_flight = None;
        match result {
            Ok(data) => {
                entry.data = Some(Arc::new(data));
                entry.error = None;
            }
            Err(err) => entry.error = Some(err),
        }
        true
    }

    /// Force the next `needs_fetch` to return true. Data is kept until replaced.
    pub fn invalidate(&mut self, key: &K) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stale = true;
            entry.error = None;
        }
    }

    pub fn state(&self, key: &K) -> QueryState<T> {
        let Some(entry) = self.entries.get(key) else {
            return QueryState::Idle;
        };
        match (&entry.data, &entry.error) {
            (Some(data), _) => QueryState::Ready(Arc::clone(data)),
            (None, Some(err)) if entry.in_flight.is_none() => QueryState::Failed(err.clone()),
            (None, _) if entry.in_flight.is_some() || entry.stale => QueryState::Loading,
            (None, _) => QueryState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn unseen_key_is_idle_and_needs_fetch() {
        let cache: QueryCache<String, u32> = QueryCache::new();
        assert!(cache.needs_fetch(&key("a")));
        assert_eq!(cache.state(&key("a")), QueryState::Idle);
    }

    #[test]
    fn in_flight_key_is_shared_not_refetched() {
        let mut cache: QueryCache<String, u32> = QueryCache::new();
        cache.begin(&key("a"));
        assert!(!cache.needs_fetch(&key("a")));
        assert!(cache.is_fetching(&key("a")));
        assert_eq!(cache.state(&key("a")), QueryState::Loading);
    }

    #[test]
    fn resolved_key_stays_cached() {
        let mut cache = QueryCache::new();
        let ticket = cache.begin(&key("a"));
        assert!(cache.resolve(ticket, Ok(7_u32)));
        assert!(!cache.needs_fetch(&key("a")));
        assert_eq!(cache.state(&key("a")).data().map(|d| **d), Some(7));
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let mut cache = QueryCache::new();
        let old = cache.begin(&key("a"));
        cache.invalidate(&key("a"));
        let new = cache.begin(&key("a"));

        assert!(cache.resolve(new, Ok(2_u32)));
        assert!(!cache.resolve(old, Ok(1_u32)));
        assert_eq!(cache.state(&key("a")).data().map(|d| **d), Some(2));
    }

    #[test]
    fn keys_do_not_leak_into_each_other() {
        let mut cache = QueryCache::new();
        let a = cache.begin(&key("a"));
        let b = cache.begin(&key("b"));
        assert!(cache.resolve(b, Ok("B")));
        assert!(cache.resolve(a, Ok("A")));
        assert_eq!(cache.state(&key("b")).data().map(|d| **d), Some("B"));
        assert_eq!(cache.state(&key("a")).data().map(|d| **d), Some("A"));
    }

    #[test]
    fn failure_without_data_is_failed_and_not_retried_automatically() {
        let mut cache: QueryCache<String, u32> = QueryCache::new();
        let ticket = cache.begin(&key("a"));
        cache.resolve(ticket, Err(FetchError::Network("timeout".into())));

        assert_eq!(
            cache.state(&key("a")),
            QueryState::Failed(FetchError::Network("timeout".into()))
        );
        assert!(!cache.needs_fetch(&key("a")));

        cache.invalidate(&key("a"));
        assert!(cache.needs_fetch(&key("a")));
        assert_eq!(cache.state(&key("a")), QueryState::Loading);
    }

    #[test]
    fn failed_refresh_keeps_previous_data() {
        let mut cache = QueryCache::new();
        let first = cache.begin(&key("a"));
        cache.resolve(first, Ok(1_u32));
        cache.invalidate(&key("a"));
        let second = cache.begin(&key("a"));
        cache.resolve(second, Err(FetchError::Decode("bad".into())));

        assert_eq!(cache.state(&key("a")).data().map(|d| **d), Some(1));
        assert!(!cache.needs_fetch(&key("a")));
    }
}
