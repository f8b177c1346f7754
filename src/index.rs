use crate::config::MatcherConfig;
use crate::junk::{ElementClass, JunkRules};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::debug;

/// Positions of every element of `b`, split by how the element may be used.
#[derive(Debug, Clone)]
pub struct Index<T> {
    seeds: HashMap<T, Vec<usize>>,
    junk: HashSet<T>,
    popular: HashSet<T>,
}

impl<T: Eq + Hash + Clone> Index<T> {
    /// Indexes `b`, sorting each distinct element into seed, junk or popular.
    ///
    /// # Arguments
    ///
    /// * `b` - The sequence matches are searched in
    /// * `config` - Junk predicate and popularity settings
    pub fn build(b: &[T], config: &MatcherConfig<T>) -> Self {
        let mut positions: HashMap<T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            positions.entry(elt.clone()).or_default().push(j);
        }

        let rules = JunkRules::new(config, b.len());
        let mut seeds = HashMap::with_capacity(positions.len());
        let mut junk = HashSet::new();
        let mut popular = HashSet::new();
        for (elt, js) in positions {
            match rules.classify(&elt, js.len()) {
                ElementClass::Seed => {
                    seeds.insert(elt, js);
                }
                ElementClass::Junk => {
                    junk.insert(elt);
                }
                ElementClass::Popular => {
                    popular.insert(elt);
                }
            }
        }

        debug!(
            b_len = b.len(),
            seeds = seeds.len(),
            junk = junk.len(),
            popular = popular.len(),
            "built index"
        );
        Index {
            seeds,
            junk,
            popular,
        }
    }

    /// Ascending positions in `b` where `elt` may seed a match.
    pub fn seed_positions(&self, elt: &T) -> &[usize] {
        self.seeds.get(elt).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_junk(&self, elt: &T) -> bool {
        self.junk.contains(elt)
    }

    pub fn junk(&self) -> &HashSet<T> {
        &self.junk
    }

    pub fn popular(&self) -> &HashSet<T> {
        &self.popular
    }
}
