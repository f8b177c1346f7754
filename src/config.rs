//! Configuration for the sequence matcher.
//!
//! `MatcherConfig` decides which elements of the second sequence are allowed
//! to seed a match: an optional user predicate marks elements as junk, and the
//! popularity heuristic marks very frequent elements of long sequences.

use crate::error::ConfigError;
use std::fmt;
use std::sync::Arc;

/// Predicate marking an element as junk.
pub type JunkPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub const DEFAULT_AUTO_JUNK_MIN_LEN: usize = 200;
pub const DEFAULT_POPULARITY_PERCENT: u32 = 1;

pub struct MatcherConfig<T> {
    pub junk: Option<JunkPredicate<T>>,
    pub auto_junk: bool,
    /// Length `b` must reach before the popularity heuristic kicks in.
    pub auto_junk_min_len: usize,
    /// Share of `b`, in percent, an element must exceed to be popular.
    pub popularity_percent: u32,
}

impl<T> Default for MatcherConfig<T> {
    fn default() -> Self {
        Self {
            junk: None,
            auto_junk: true,
            auto_junk_min_len: DEFAULT_AUTO_JUNK_MIN_LEN,
            popularity_percent: DEFAULT_POPULARITY_PERCENT,
        }
    }
}

impl<T> Clone for MatcherConfig<T> {
    fn clone(&self) -> Self {
        Self {
            junk: self.junk.clone(),
            auto_junk: self.auto_junk,
            auto_junk_min_len: self.auto_junk_min_len,
            popularity_percent: self.popularity_percent,
        }
    }
}

impl<T> fmt::Debug for MatcherConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherConfig")
            .field("junk", &self.junk.as_ref().map(|_| "<predicate>"))
            .field("auto_junk", &self.auto_junk)
            .field("auto_junk_min_len", &self.auto_junk_min_len)
            .field("popularity_percent", &self.popularity_percent)
            .finish()
    }
}

impl<T> MatcherConfig<T> {
    pub fn builder() -> MatcherConfigBuilder<T> {
        MatcherConfigBuilder {
            inner: MatcherConfig::default(),
        }
    }

    /// Configuration with both the predicate and the popularity heuristic off.
    pub fn exact() -> Self {
        Self {
            auto_junk: false,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.popularity_percent == 0 || self.popularity_percent > 100 {
            return Err(ConfigError::InvalidPopularityPercent {
                value: self.popularity_percent,
            });
        }
        if self.auto_junk_min_len == 0 {
            return Err(ConfigError::ZeroAutoJunkMinLen);
        }
        Ok(())
    }

    /// Whether `count` occurrences make an element of a `len`-long `b` popular:
    /// the count must exceed `popularity_percent`% of `len`.
    pub(crate) fn is_popular(&self, len: usize, count: usize) -> bool {
        self.auto_junk
            && len >= self.auto_junk_min_len
            && count * 100 > len * self.popularity_percent as usize
    }
}

pub struct MatcherConfigBuilder<T> {
    inner: MatcherConfig<T>,
}

impl<T> Default for MatcherConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MatcherConfigBuilder<T> {
    pub fn new() -> Self {
        MatcherConfig::builder()
    }

    pub fn junk<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.inner.junk = Some(Arc::new(predicate));
        self
    }

    pub fn auto_junk(mut self, value: bool) -> Self {
        self.inner.auto_junk = value;
        self
    }

    pub fn auto_junk_min_len(mut self, value: usize) -> Self {
        self.inner.auto_junk_min_len = value;
        self
    }

    pub fn popularity_percent(mut self, value: u32) -> Self {
        self.inner.popularity_percent = value;
        self
    }

    pub fn build(self) -> Result<MatcherConfig<T>, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
