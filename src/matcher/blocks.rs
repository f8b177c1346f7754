use super::types::Match;
use crate::index::Index;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Finds the longest block of `a[alo..ahi]` equal to a block of `b[blo..bhi]`.
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`. Only
/// seed elements can start a block; once chosen, the block is widened over
/// equal neighbours, first non-junk ones and then junk ones. Inverted ranges
/// are empty and yield `Match { a: alo, b: blo, size: 0 }`.
pub(crate) fn longest_match<T: Eq + Hash + Clone>(
    a: &[T],
    b: &[T],
    index: &Index<T>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> Match {
    let ahi = ahi.min(a.len());
    let bhi = bhi.min(b.len());
    let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);

    // run_ending_at[j] is the length of the common run ending at a[i - 1], b[j]
    let mut run_ending_at: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next: HashMap<usize, usize> = HashMap::new();
        for &j in index.seed_positions(&a[i]) {
            if j < blo {
                continue;
            }
            if j >= bhi {
                break;
            }
            let k = match j.checked_sub(1) {
                Some(prev) => run_ending_at.get(&prev).copied().unwrap_or(0) + 1,
                None => 1,
            };
            next.insert(j, k);
            if k > bestsize {
                besti = i + 1 - k;
                bestj = j + 1 - k;
                bestsize = k;
            }
        }
        run_ending_at = next;
    }

    for junk in [false, true] {
        while besti > alo
            && bestj > blo
            && index.is_junk(&b[bestj - 1]) == junk
            && a[besti - 1] == b[bestj - 1]
        {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && index.is_junk(&b[bestj + bestsize]) == junk
            && a[besti + bestsize] == b[bestj + bestsize]
        {
            bestsize += 1;
        }
    }

    Match::new(besti, bestj, bestsize)
}

/// Covers `a` and `b` with non-overlapping, non-adjacent matches, terminated
/// by the `(a.len(), b.len(), 0)` sentinel.
pub(crate) fn matching_blocks<T: Eq + Hash + Clone>(
    a: &[T],
    b: &[T],
    index: &Index<T>,
) -> Vec<Match> {
    let (la, lb) = (a.len(), b.len());

    let mut pending = vec![(0, la, 0, lb)];
    let mut found = Vec::new();
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let m = longest_match(a, b, index, alo, ahi, blo, bhi);
        if m.size == 0 {
            continue;
        }
        if alo < m.a && blo < m.b {
            pending.push((alo, m.a, blo, m.b));
        }
        if m.a_end() < ahi && m.b_end() < bhi {
            pending.push((m.a_end(), ahi, m.b_end(), bhi));
        }
        found.push(m);
    }
    found.sort();

    let mut blocks: Vec<Match> = Vec::with_capacity(found.len() + 1);
    for m in found {
        match blocks.last_mut() {
            Some(last) if last.a_end() == m.a && last.b_end() == m.b => last.size += m.size,
            _ => blocks.push(m),
        }
    }
    debug!(a_len = la, b_len = lb, blocks = blocks.len(), "assembled matching blocks");

    blocks.push(Match::new(la, lb, 0));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatcherConfig;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn longest(a: &str, b: &str, config: &MatcherConfig<char>) -> Match {
        let (a, b) = (chars(a), chars(b));
        let index = Index::build(&b, config);
        longest_match(&a, &b, &index, 0, a.len(), 0, b.len())
    }

    #[test]
    fn test_longest_match_prefers_longest() {
        let m = longest("abxcd", "abcd", &MatcherConfig::default());
        assert_eq!(m, Match::new(0, 0, 2));

        let m = longest("xabcd", "abcd", &MatcherConfig::default());
        assert_eq!(m, Match::new(1, 0, 4));

        // the earlier single 'x' loses to the later, longer run
        let m = longest("xabcd", "abcdx", &MatcherConfig::default());
        assert_eq!(m, Match::new(1, 0, 4));
    }

    #[test]
    fn test_longest_match_tie_breaks_earliest() {
        // "ab" and "cd" are both length 2, "ab" starts first in a
        let m = longest("ab-cd", "cd+ab", &MatcherConfig::default());
        assert_eq!(m, Match::new(0, 3, 2));

        // same start in a, earliest in b
        let m = longest("ab", "abab", &MatcherConfig::default());
        assert_eq!(m, Match::new(0, 0, 2));
    }

    #[test]
    fn test_junk_never_seeds_but_extends() {
        let config = MatcherConfig::builder()
            .junk(|c: &char| *c == ' ')
            .build()
            .unwrap();

        // classic example: the space cannot anchor " abcd"
        let m = longest(" abcd", "abcd abcd", &config);
        assert_eq!(m, Match::new(1, 0, 4));

        let m = longest(" abcd", "abcd abcd", &MatcherConfig::default());
        assert_eq!(m, Match::new(0, 4, 5));

        // junk on the boundary is absorbed once a real element anchors
        let m = longest("x ab y", "- ab -", &config);
        assert_eq!(m, Match::new(1, 1, 4));
    }

    #[test]
    fn test_popular_elements_are_absorbed_without_seeding() {
        let mut b = vec!['x'; 10];
        b.extend((0..190).map(|i| char::from_u32(0x100 + i).unwrap()));
        let index = Index::build(&b, &MatcherConfig::default());
        assert!(index.popular().contains(&'x'));

        let a = vec!['x'; 4];
        let m = longest_match(&a, &b, &index, 0, a.len(), 0, b.len());
        assert_eq!(m, Match::new(0, 0, 4));
    }

    #[test]
    fn test_inverted_ranges_are_empty() {
        let (a, b) = (chars("abc"), chars("abc"));
        let index = Index::build(&b, &MatcherConfig::default());
        assert_eq!(longest_match(&a, &b, &index, 2, 1, 0, 3), Match::new(2, 0, 0));
        assert_eq!(longest_match(&a, &b, &index, 0, 3, 3, 0), Match::new(0, 3, 0));
        assert_eq!(longest_match(&a, &b, &index, 1, 1, 1, 1), Match::new(1, 1, 0));
    }

    #[test]
    fn test_subrange_is_respected() {
        let (a, b) = (chars("abcabc"), chars("abc"));
        let index = Index::build(&b, &MatcherConfig::default());
        assert_eq!(longest_match(&a, &b, &index, 3, 6, 0, 3), Match::new(3, 0, 3));
        assert_eq!(longest_match(&a, &b, &index, 0, 6, 1, 3), Match::new(1, 1, 2));
    }

    #[test]
    fn test_matching_blocks_concrete() {
        let (a, b) = (vec!["a", "b", "c"], vec!["a", "b", "d", "c"]);
        let index = Index::build(&b, &MatcherConfig::default());
        assert_eq!(
            matching_blocks(&a, &b, &index),
            vec![Match::new(0, 0, 2), Match::new(2, 3, 1), Match::new(3, 4, 0)]
        );
    }

    #[test]
    fn test_matching_blocks_disjoint() {
        let (a, b) = (chars("abc"), chars("xyz"));
        let index = Index::build(&b, &MatcherConfig::default());
        assert_eq!(matching_blocks(&a, &b, &index), vec![Match::new(3, 3, 0)]);
    }

    #[test]
    fn test_matching_blocks_empty() {
        let (a, b): (Vec<char>, Vec<char>) = (vec![], vec![]);
        let index = Index::build(&b, &MatcherConfig::default());
        assert_eq!(matching_blocks(&a, &b, &index), vec![Match::new(0, 0, 0)]);
    }

    #[test]
    fn test_no_common_elements_on_long_input() {
        let a: Vec<u32> = (0..50_000).collect();
        let b: Vec<u32> = (50_000..100_000).collect();
        let index = Index::build(&b, &MatcherConfig::default());
        assert_eq!(
            matching_blocks(&a, &b, &index),
            vec![Match::new(50_000, 50_000, 0)]
        );
    }

    proptest! {
        #[test]
        fn test_blocks_are_sorted_disjoint_and_equal(
            a in prop::collection::vec(0u8..4, 0..40),
            b in prop::collection::vec(0u8..4, 0..40),
        ) {
            let index = Index::build(&b, &MatcherConfig::default());
            let blocks = matching_blocks(&a, &b, &index);

            let sentinel = blocks.last().copied().unwrap();
            prop_assert_eq!(sentinel, Match::new(a.len(), b.len(), 0));

            for m in &blocks {
                prop_assert_eq!(&a[m.a..m.a_end()], &b[m.b..m.b_end()]);
            }
            for pair in blocks.windows(2) {
                prop_assert!(pair[0].a_end() <= pair[1].a);
                prop_assert!(pair[0].b_end() <= pair[1].b);
                prop_assert!(!(pair[0].a_end() == pair[1].a && pair[0].b_end() == pair[1].b && pair[1].size > 0));
            }
            for m in &blocks[..blocks.len() - 1] {
                prop_assert!(m.size > 0);
            }
        }
    }
}
