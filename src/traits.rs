use crate::matcher::{Group, Match, Opcode, SequenceMatcher, Tag};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Element counts per kind of edit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditStats {
    pub equal: usize,
    pub inserted: usize,
    pub deleted: usize,
    /// Elements of `a` replaced.
    pub replaced_a: usize,
    /// Elements of `b` replacing them.
    pub replaced_b: usize,
}

/// Read side of a sequence comparison.
///
/// Consumers such as renderers only need these results, so they can be
/// written against this trait and fed canned opcodes in tests.
pub trait Matcher {
    fn matching_blocks(&self) -> &[Match];
    fn opcodes(&self) -> &[Opcode];
    fn grouped_opcodes(&self, context: usize) -> Vec<Group>;
    fn ratio(&self) -> f64;
    fn quick_ratio(&self) -> f64;
    fn real_quick_ratio(&self) -> f64;

    fn edit_stats(&self) -> EditStats {
        self.opcodes()
            .iter()
            .fold(EditStats::default(), |mut stats, op| {
                match op.tag {
                    Tag::Equal => stats.equal += op.a_len(),
                    Tag::Insert => stats.inserted += op.b_len(),
                    Tag::Delete => stats.deleted += op.a_len(),
                    Tag::Replace => {
                        stats.replaced_a += op.a_len();
                        stats.replaced_b += op.b_len();
                    }
                }
                stats
            })
    }

    fn is_identical(&self) -> bool {
        self.opcodes().iter().all(Opcode::is_equal)
    }
}

impl<T: Eq + Hash + Clone> Matcher for SequenceMatcher<T> {
    fn matching_blocks(&self) -> &[Match] {
        SequenceMatcher::matching_blocks(self)
    }

    fn opcodes(&self) -> &[Opcode] {
        SequenceMatcher::opcodes(self)
    }

    fn grouped_opcodes(&self, context: usize) -> Vec<Group> {
        SequenceMatcher::grouped_opcodes(self, context)
    }

    fn ratio(&self) -> f64 {
        SequenceMatcher::ratio(self)
    }

    fn quick_ratio(&self) -> f64 {
        SequenceMatcher::quick_ratio(self)
    }

    fn real_quick_ratio(&self) -> f64 {
        SequenceMatcher::real_quick_ratio(self)
    }
}
