//! Bookkeeping for visibility watchers that fire at most once per element.

use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, STATS_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

pub const STATS_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: STATS_THRESHOLD,
    root_margin: "0px",
};

pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: REVEAL_THRESHOLD,
    root_margin: REVEAL_ROOT_MARGIN,
};

/// Tracks which watched elements already fired.
#[derive(Clone, Debug)]
pub struct OnceRegistry<K> {
    entries: Vec<(K, bool)>,
}

impl<K> Default for OnceRegistry<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> OnceRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&mut self, key: K) {
        if !self.entries.iter().any(|(k, _)| *k == key) {
            self.entries.push((key, false));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|(_, fired)| !fired).count()
    }

    /// Returns true exactly once per watched key: on the first report that
    /// it is intersecting. Unknown keys never fire.
    pub fn trigger(&mut self, key: &K, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, fired)) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }
}
