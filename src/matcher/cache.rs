use super::types::{Group, Match, Opcode};
use crate::index::Index;
use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use tracing::{debug, trace};

/// What a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Changed {
    A,
    B,
    Config,
    All,
}

/// Lazily computed results for the current `(a, b, config)`.
///
/// Every mutation goes through [`Cache::invalidate`], which bumps the revision
/// and drops whatever the change made stale.
pub(crate) struct Cache<T> {
    revision: u64,
    pub(crate) index: OnceCell<Index<T>>,
    pub(crate) b_counts: OnceCell<HashMap<T, usize>>,
    pub(crate) blocks: OnceCell<Vec<Match>>,
    pub(crate) opcodes: OnceCell<Vec<Opcode>>,
    pub(crate) ratio: OnceCell<f64>,
    grouped: RefCell<HashMap<usize, Vec<Group>>>,
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Cache {
            revision: 0,
            index: OnceCell::new(),
            b_counts: OnceCell::new(),
            blocks: OnceCell::new(),
            opcodes: OnceCell::new(),
            ratio: OnceCell::new(),
            grouped: RefCell::new(HashMap::new()),
        }
    }
}

impl<T> Cache<T> {
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn invalidate(&mut self, changed: Changed) {
        self.revision += 1;
        self.blocks.take();
        self.opcodes.take();
        self.ratio.take();
        self.grouped.get_mut().clear();
        match changed {
            Changed::A => {}
            // element counts ignore junk
            Changed::Config => {
                self.index.take();
            }
            Changed::B | Changed::All => {
                self.index.take();
                self.b_counts.take();
            }
        }
        debug!(revision = self.revision, ?changed, "invalidated cached results");
    }

    pub(crate) fn grouped_or_insert_with<F>(&self, context: usize, compute: F) -> Vec<Group>
    where
        F: FnOnce() -> Vec<Group>,
    {
        if let Some(groups) = self.grouped.borrow().get(&context) {
            return groups.clone();
        }
        let groups = compute();
        trace!(context, groups = groups.len(), "grouped opcodes");
        self.grouped.borrow_mut().insert(context, groups.clone());
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatcherConfig;

    fn filled() -> Cache<char> {
        let cache = Cache::default();
        let _ = cache.index.set(Index::build(&['a'][..], &MatcherConfig::default()));
        let _ = cache.b_counts.set(HashMap::from([('a', 1)]));
        let _ = cache.blocks.set(vec![Match::new(1, 1, 0)]);
        let _ = cache.opcodes.set(vec![]);
        let _ = cache.ratio.set(0.5);
        cache.grouped_or_insert_with(3, Vec::new);
        cache
    }

    #[test]
    fn test_changing_a_keeps_the_index() {
        let mut cache = filled();
        cache.invalidate(Changed::A);
        assert_eq!(cache.revision(), 1);
        assert!(cache.index.get().is_some());
        assert!(cache.b_counts.get().is_some());
        assert!(cache.blocks.get().is_none());
        assert!(cache.opcodes.get().is_none());
        assert!(cache.ratio.get().is_none());
        assert!(cache.grouped.borrow().is_empty());
    }

    #[test]
    fn test_changing_config_keeps_counts() {
        let mut cache = filled();
        cache.invalidate(Changed::Config);
        assert!(cache.index.get().is_none());
        assert!(cache.b_counts.get().is_some());
    }

    #[test]
    fn test_changing_b_clears_everything() {
        let mut cache = filled();
        cache.invalidate(Changed::B);
        cache.invalidate(Changed::All);
        assert_eq!(cache.revision(), 2);
        assert!(cache.index.get().is_none());
        assert!(cache.b_counts.get().is_none());
        assert!(cache.blocks.get().is_none());
    }

    #[test]
    fn test_grouped_is_computed_once_per_context() {
        let cache = Cache::<char>::default();
        let mut calls = 0;
        cache.grouped_or_insert_with(3, || {
            calls += 1;
            vec![]
        });
        cache.grouped_or_insert_with(3, || {
            calls += 1;
            vec![]
        });
        cache.grouped_or_insert_with(0, || {
            calls += 1;
            vec![]
        });
        assert_eq!(calls, 2);
    }
}
