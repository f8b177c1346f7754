use crate::error::CloseMatchError;
use crate::matcher::SequenceMatcher;

/// Returns up to `n` of `possibilities` that are similar enough to `word`.
///
/// Candidates are compared character by character and kept when their
/// ratio against `word` is at least `cutoff`. The result is sorted by
/// similarity, best first; equal scores put the larger string first.
///
/// # Examples
///
/// ```
/// use seqmatch::close_matches;
///
/// let found = close_matches("appel", &["ape", "apple", "peach", "puppy"], 3, 0.6).unwrap();
/// assert_eq!(found, vec!["apple", "ape"]);
/// ```
pub fn close_matches<'a>(
    word: &str,
    possibilities: &[&'a str],
    n: usize,
    cutoff: f64,
) -> Result<Vec<&'a str>, CloseMatchError> {
    if n == 0 {
        return Err(CloseMatchError::ZeroCount);
    }
    if !cutoff.is_finite() || !(0.0..=1.0).contains(&cutoff) {
        return Err(CloseMatchError::CutoffOutOfRange { value: cutoff });
    }

    let mut matcher = SequenceMatcher::new(Vec::new(), word.chars());
    let mut scored: Vec<(f64, &'a str)> = Vec::new();
    for &candidate in possibilities {
        matcher.set_seq1(candidate.chars());
        if matcher.real_quick_ratio() >= cutoff
            && matcher.quick_ratio() >= cutoff
            && matcher.ratio() >= cutoff
        {
            scored.push((matcher.ratio(), candidate));
        }
    }

    scored.sort_by(|x, y| y.0.total_cmp(&x.0).then_with(|| y.1.cmp(x.1)));
    scored.truncate(n);
    Ok(scored.into_iter().map(|(_, candidate)| candidate).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_results() {
        let found = close_matches("appel", &["ape", "apple", "peach", "puppy"], 1, 0.6).unwrap();
        assert_eq!(found, vec!["apple"]);
    }

    #[test]
    fn test_ties_put_larger_first() {
        let found = close_matches("ab", &["ax", "ay", "ab"], 3, 0.5).unwrap();
        assert_eq!(found, vec!["ab", "ay", "ax"]);
    }

    #[test]
    fn test_nothing_close() {
        let found = close_matches("hello", &["xyz", "qqq"], 3, 0.6).unwrap();
        assert!(found.is_empty());
        assert!(close_matches("hello", &[], 3, 0.0).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert_eq!(
            close_matches("a", &["a"], 0, 0.5).unwrap_err(),
            CloseMatchError::ZeroCount
        );
        assert_eq!(
            close_matches("a", &["a"], 1, 1.5).unwrap_err(),
            CloseMatchError::CutoffOutOfRange { value: 1.5 }
        );
        assert!(close_matches("a", &["a"], 1, f64::NAN).is_err());
        assert!(close_matches("a", &["a"], 1, -0.1).is_err());
    }
}
