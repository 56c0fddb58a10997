//! [`ColorSet`]: the distinct colours used along a partial path.

use std::fmt;

use smallvec::SmallVec;

use crate::id::Color;

/// A sorted, deduplicated set of edge colours.
///
/// Colour budgets are small in practice (`k` is typically single digit), so
/// the set lives inline for up to 8 colours and spills to the heap beyond
/// that. Keeping the members sorted makes equality, subset tests and the
/// `Display` output independent of insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorSet {
    colors: SmallVec<[Color; 8]>,
}

impl ColorSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct colours.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no colour has been used yet.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether `color` is a member.
    pub fn contains(&self, color: Color) -> bool {
        self.colors.binary_search(&color).is_ok()
    }

    /// Insert `color`. Returns `true` if it was not already present.
    pub fn insert(&mut self, color: Color) -> bool {
        match self.colors.binary_search(&color) {
            Ok(_) => false,
            Err(pos) => {
                self.colors.insert(pos, color);
                true
            }
        }
    }

    /// A copy of this set with `color` added.
    pub fn with(&self, color: Color) -> Self {
        let mut next = self.clone();
        next.insert(color);
        next
    }

    /// Size of `self ∪ {color}` without materialising the union.
    pub fn len_with(&self, color: Color) -> usize {
        if self.contains(color) {
            self.len()
        } else {
            self.len() + 1
        }
    }

    /// Whether every member of `other` is also a member of `self`.
    pub fn is_superset(&self, other: &ColorSet) -> bool {
        if other.len() > self.len() {
            return false;
        }
        // Both sides are sorted: a single merge walk suffices.
        let mut mine = self.colors.iter();
        'outer: for theirs in &other.colors {
            for c in mine.by_ref() {
                if c == theirs {
                    continue 'outer;
                }
                if c > theirs {
                    return false;
                }
            }
            return false;
        }
        true
    }

    /// Whether `self` is a superset of `other` and strictly larger.
    pub fn is_strict_superset(&self, other: &ColorSet) -> bool {
        self.len() > other.len() && self.is_superset(other)
    }

    /// Iterate the colours in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// The colours in ascending order.
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = Self::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "}}")
    }
}
