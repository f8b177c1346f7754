use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// `a[a..a + size]` equals `b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl Match {
    pub fn new(a: usize, b: usize, size: usize) -> Self {
        Match { a, b, size }
    }

    pub fn a_end(&self) -> usize {
        self.a + self.size
    }

    pub fn b_end(&self) -> usize {
        self.b + self.size
    }
}

/// Each opcode turns a range of `a` into a range of `b` by
/// keeping it (Equal)
/// swapping it (Replace)
/// dropping it (Delete)
/// adding to it (Insert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Equal,
    Replace,
    Delete,
    Insert,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Equal => "equal",
            Tag::Replace => "replace",
            Tag::Delete => "delete",
            Tag::Insert => "insert",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply `tag` to `a[i1..i2]` to obtain `b[j1..j2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: Tag,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

impl Opcode {
    pub fn new(tag: Tag, i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        Opcode { tag, i1, i2, j1, j2 }
    }

    pub fn a_range(&self) -> Range<usize> {
        self.i1..self.i2
    }

    pub fn b_range(&self) -> Range<usize> {
        self.j1..self.j2
    }

    pub fn a_len(&self) -> usize {
        self.i2 - self.i1
    }

    pub fn b_len(&self) -> usize {
        self.j2 - self.j1
    }

    pub fn is_equal(&self) -> bool {
        self.tag == Tag::Equal
    }
}

/// Opcodes sharing one window of context.
pub type Group = Vec<Opcode>;
