use crate::config::MatcherConfig;

/// How an element of `b` takes part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    /// May seed a match.
    Seed,
    /// Rejected by the junk predicate.
    Junk,
    /// Too frequent in `b` to seed a match.
    Popular,
}

/// Decides, once per distinct element of `b`, whether it may seed a match.
///
/// The predicate and the popularity heuristic are independent: an element is
/// excluded if either applies, and the predicate is consulted first.
pub struct JunkRules<T> {
    config: MatcherConfig<T>,
    b_len: usize,
}

impl<T> JunkRules<T> {
    pub fn new(config: &MatcherConfig<T>, b_len: usize) -> Self {
        JunkRules {
            config: config.clone(),
            b_len,
        }
    }

    pub fn classify(&self, element: &T, occurrences: usize) -> ElementClass {
        if self.config.junk.as_ref().is_some_and(|p| p(element)) {
            return ElementClass::Junk;
        }
        if self.config.is_popular(self.b_len, occurrences) {
            return ElementClass::Popular;
        }
        ElementClass::Seed
    }
}
