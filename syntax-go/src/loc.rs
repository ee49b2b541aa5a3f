use serde::Serialize;
use std::cmp::{max, min};
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign};

/// A location within a source file expressed as UTF-8 byte offsets.
///
/// Synthetic nodes created after parsing may carry an approximate location, or
/// `Loc(0, 0)` when nothing better is known.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub struct Loc(pub usize, pub usize);

impl Loc {
  pub fn len(&self) -> usize {
    self.1.saturating_sub(self.0)
  }

  pub fn is_empty(&self) -> bool {
    self.0 >= self.1
  }

  /// Grows this location so that it also covers `other`.
  pub fn extend(&mut self, other: Loc) {
    self.0 = min(self.0, other.0);
    self.1 = max(self.1, other.1);
  }

  /// Creates a best-effort location for synthetic nodes where only one side of
  /// the range is known.
  ///
  /// If both bounds are missing, an empty location at offset 0 is returned.
  pub fn best_effort(start: Option<Loc>, end: Option<Loc>) -> Loc {
    match (start, end) {
      (Some(mut start), Some(end)) => {
        start.extend(end);
        start
      }
      (Some(start), None) => start,
      (None, Some(end)) => end,
      (None, None) => Loc(0, 0),
    }
  }
}

impl Add for Loc {
  type Output = Loc;

  fn add(mut self, rhs: Self) -> Self::Output {
    self.extend(rhs);
    self
  }
}

impl AddAssign for Loc {
  fn add_assign(&mut self, rhs: Self) {
    self.extend(rhs);
  }
}

impl Display for Loc {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}..{}", self.0, self.1)
  }
}
