mod blocks;
mod cache;
mod opcodes;
mod ratio;
pub mod types;
pub use types::*;

use crate::config::MatcherConfig;
use crate::error::ConfigError;
use crate::index::Index;
use cache::{Cache, Changed};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Lines of context around each change in a group, unless told otherwise.
pub const DEFAULT_CONTEXT: usize = 3;

/// Compares two sequences `a` and `b` of hashable elements.
///
/// Matching blocks, opcodes, grouped opcodes and the ratio are computed on
/// first request and kept until `a`, `b` or the configuration change. The
/// index over `b` survives changes to `a`, so comparing many sequences
/// against one fixed `b` should go through [`set_seq1`](Self::set_seq1).
///
/// # Examples
///
/// ```
/// use seqmatch::{Match, Opcode, SequenceMatcher, Tag};
///
/// let matcher = SequenceMatcher::new(vec!["a", "b", "c"], vec!["a", "b", "d", "c"]);
/// assert_eq!(
///     matcher.matching_blocks(),
///     &[Match::new(0, 0, 2), Match::new(2, 3, 1), Match::new(3, 4, 0)]
/// );
/// assert_eq!(
///     matcher.opcodes(),
///     &[
///         Opcode::new(Tag::Equal, 0, 2, 0, 2),
///         Opcode::new(Tag::Insert, 2, 2, 2, 3),
///         Opcode::new(Tag::Equal, 2, 3, 3, 4),
///     ]
/// );
/// assert_eq!(matcher.ratio(), 6.0 / 7.0);
/// ```
pub struct SequenceMatcher<T> {
    a: Vec<T>,
    b: Vec<T>,
    config: MatcherConfig<T>,
    cache: Cache<T>,
}

impl<T: Eq + Hash + Clone> Default for SequenceMatcher<T> {
    fn default() -> Self {
        SequenceMatcher {
            a: Vec::new(),
            b: Vec::new(),
            config: MatcherConfig::default(),
            cache: Cache::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceMatcher")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("config", &self.config)
            .field("revision", &self.cache.revision())
            .finish()
    }
}

impl SequenceMatcher<String> {
    /// Compares two texts line by line.
    pub fn from_lines(old: &str, new: &str) -> Self {
        SequenceMatcher::new(
            old.lines().map(ToString::to_string),
            new.lines().map(ToString::to_string),
        )
    }
}

impl<T: Eq + Hash + Clone> SequenceMatcher<T> {
    /// Compares `a` against `b` with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `a` - The first sequence
    /// * `b` - The second sequence, indexed for matching
    pub fn new<A, B>(a: A, b: B) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        SequenceMatcher {
            a: a.into_iter().collect(),
            b: b.into_iter().collect(),
            ..Default::default()
        }
    }

    /// # Arguments
    ///
    /// * `a` - The first sequence
    /// * `b` - The second sequence, indexed for matching
    /// * `config` - Junk predicate and popularity settings, validated before use
    pub fn with_config<A, B>(a: A, b: B, config: MatcherConfig<T>) -> Result<Self, ConfigError>
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        config.validate()?;
        Ok(SequenceMatcher {
            config,
            ..SequenceMatcher::new(a, b)
        })
    }

    /// Swaps the configuration and drops every cached result.
    ///
    /// # Arguments
    ///
    /// * `config` - The new configuration; on error the old one stays in place
    pub fn set_config(&mut self, config: MatcherConfig<T>) -> Result<&mut Self, ConfigError> {
        config.validate()?;
        self.config = config;
        self.cache.invalidate(Changed::Config);
        Ok(self)
    }

    pub fn config(&self) -> &MatcherConfig<T> {
        &self.config
    }

    /// Drops every cached result, including the index over `b`.
    pub fn reset_caches(&mut self) -> &mut Self {
        self.cache.invalidate(Changed::All);
        self
    }

    /// # Arguments
    ///
    /// * `a` - The new first sequence
    /// * `b` - The new second sequence
    pub fn set_seqs<A, B>(&mut self, a: A, b: B) -> &mut Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        self.a = a.into_iter().collect();
        self.b = b.into_iter().collect();
        self.cache.invalidate(Changed::B);
        self
    }

    /// Replaces `a`, keeping the index over `b`.
    ///
    /// # Arguments
    ///
    /// * `a` - The new first sequence
    pub fn set_seq1<A: IntoIterator<Item = T>>(&mut self, a: A) -> &mut Self {
        self.a = a.into_iter().collect();
        self.cache.invalidate(Changed::A);
        self
    }

    /// Replaces `b`; the index is rebuilt on the next read.
    ///
    /// # Arguments
    ///
    /// * `b` - The new second sequence
    pub fn set_seq2<B: IntoIterator<Item = T>>(&mut self, b: B) -> &mut Self {
        self.b = b.into_iter().collect();
        self.cache.invalidate(Changed::B);
        self
    }

    pub fn a(&self) -> &[T] {
        &self.a
    }

    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Bumped by every mutation; results read at the same revision are identical.
    pub fn revision(&self) -> u64 {
        self.cache.revision()
    }

    /// Elements of `b` rejected by the junk predicate.
    pub fn junk(&self) -> &HashSet<T> {
        self.index().junk()
    }

    /// Elements of `b` too frequent to seed a match.
    pub fn popular(&self) -> &HashSet<T> {
        self.index().popular()
    }

    fn index(&self) -> &Index<T> {
        self.cache
            .index
            .get_or_init(|| Index::build(&self.b, &self.config))
    }

    fn b_counts(&self) -> &HashMap<T, usize> {
        self.cache
            .b_counts
            .get_or_init(|| ratio::element_counts(&self.b))
    }

    /// Longest block of `a[alo..ahi]` equal to a block of `b[blo..bhi]`.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    /// Junk never starts a block but is absorbed at its edges. Inverted
    /// ranges are treated as empty and produce a zero-size match at
    /// `(alo, blo)`.
    ///
    /// # Arguments
    ///
    /// * `alo` - Start of the searched range of `a`
    /// * `ahi` - End of the searched range of `a`, clamped to `a.len()`
    /// * `blo` - Start of the searched range of `b`
    /// * `bhi` - End of the searched range of `b`, clamped to `b.len()`
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        blocks::longest_match(&self.a, &self.b, self.index(), alo, ahi, blo, bhi)
    }

    /// Sorted, non-overlapping matches ending with the `(len(a), len(b), 0)` sentinel.
    pub fn matching_blocks(&self) -> &[Match] {
        self.cache
            .blocks
            .get_or_init(|| blocks::matching_blocks(&self.a, &self.b, self.index()))
    }

    /// Edit operations partitioning `a` and `b`.
    pub fn opcodes(&self) -> &[Opcode] {
        self.cache
            .opcodes
            .get_or_init(|| opcodes::opcodes(self.matching_blocks()))
    }

    /// Opcodes grouped into hunks with at most `context` equal elements on
    /// either side of a change.
    ///
    /// When nothing changed, the result is a single group holding the last
    /// `context` elements, or no group at all when `context` is 0 or both
    /// sequences are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqmatch::{Opcode, SequenceMatcher, Tag};
    ///
    /// let matcher = SequenceMatcher::new(vec![1, 2, 3, 4, 5], vec![1, 2, 3, 4, 5]);
    /// assert_eq!(
    ///     matcher.grouped_opcodes(3),
    ///     vec![vec![Opcode::new(Tag::Equal, 2, 5, 2, 5)]]
    /// );
    /// assert!(matcher.grouped_opcodes(0).is_empty());
    /// ```
    ///
    /// # Arguments
    ///
    /// * `context` - Maximum number of equal elements kept around each change
    pub fn grouped_opcodes(&self, context: usize) -> Vec<Group> {
        self.cache
            .grouped_or_insert_with(context, || opcodes::group(self.opcodes(), context))
    }

    /// `2 * M / T` where `M` is the number of matched elements and `T` the
    /// total number of elements in both sequences.
    pub fn ratio(&self) -> f64 {
        *self.cache.ratio.get_or_init(|| {
            let matches = ratio::block_matches(self.matching_blocks());
            ratio::similarity(matches, self.a.len() + self.b.len())
        })
    }

    /// Upper bound on [`ratio`](Self::ratio) from element counts alone.
    pub fn quick_ratio(&self) -> f64 {
        let matches = ratio::multiset_matches(&self.a, self.b_counts());
        ratio::similarity(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        ratio::similarity(la.min(lb), la + lb)
    }
}
