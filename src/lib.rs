//! Sequence matching: longest common blocks between two sequences, the edit
//! operations they imply, hunks of those operations with bounded context,
//! and similarity ratios.
//!
//! ```
//! use seqmatch::{SequenceMatcher, Tag};
//!
//! let matcher = SequenceMatcher::from_lines("a\nb\nc", "a\nx\nc");
//! let changed: Vec<Tag> = matcher
//!     .opcodes()
//!     .iter()
//!     .map(|op| op.tag)
//!     .filter(|tag| *tag != Tag::Equal)
//!     .collect();
//! assert_eq!(changed, vec![Tag::Replace]);
//! ```

mod close;
pub mod config;
pub mod error;
mod index;
pub mod junk;
pub mod matcher;
pub mod traits;

pub use close::close_matches;
pub use config::{JunkPredicate, MatcherConfig, MatcherConfigBuilder};
pub use error::{CloseMatchError, ConfigError};
pub use matcher::{Group, Match, Opcode, SequenceMatcher, Tag, DEFAULT_CONTEXT};
pub use traits::{EditStats, Matcher};
