use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default validity window for cached reads.
pub const DEFAULT_VALIDITY: Duration = Duration::from_secs(300);

/// Time source for cache aging, injectable so tests can move the hand.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Time-boxed read cache keyed by range spec. Entries age out after the
/// validity window; a successful write clears the whole cache, with no
/// partial invalidation.
pub struct ReadCache {
    validity: Duration,
    clock: Box<dyn Clock>,
    entries: HashMap<String, Entry>,
}

struct Entry {
    fetched_at: Instant,
    rows: Vec<Vec<String>>,
}

impl ReadCache {
    pub fn new(validity: Duration) -> ReadCache {
        ReadCache::with_clock(validity, Box::new(SystemClock))
    }

    pub fn with_clock(validity: Duration, clock: Box<dyn Clock>) -> ReadCache {
        ReadCache {
            validity,
            clock,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, range: &str) -> Option<&[Vec<String>]> {
        let entry = self.entries.get(range)?;
        if self.clock.now().duration_since(entry.fetched_at) < self.validity {
            Some(&entry.rows)
        } else {
            None
        }
    }

    pub fn put(&mut self, range: &str, rows: Vec<Vec<String>>) {
        let fetched_at = self.clock.now();
        self.entries
            .insert(range.to_string(), Entry { fetched_at, rows });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
