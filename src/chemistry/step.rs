//! The four reaction stages as a bounded index.

use std::fmt;

use super::species::Species;

/// One of the four stages of the reaction sequence, always in `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Step(u8);

impl Step {
    /// Number of steps in the sequence.
    pub const COUNT: usize = 4;
    /// The first step (sodium nitrite).
    pub const FIRST: Step = Step(0);
    /// The last step (nitrosamine).
    pub const LAST: Step = Step(3);

    /// Validate a raw index. Anything outside `0..=3` is rejected.
    #[must_use]
    pub fn new(index: i64) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&i| usize::from(i) < Self::COUNT)
            .map(Step)
    }

    /// All steps in order.
    pub fn all() -> impl Iterator<Item = Step> {
        (0..Self::COUNT as u8).map(Step)
    }

    /// Zero-based index.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The following step, clamped at [`Step::LAST`].
    #[must_use]
    pub fn next(self) -> Self {
        Step((self.0 + 1).min(Self::LAST.0))
    }

    /// The preceding step, clamped at [`Step::FIRST`].
    #[must_use]
    pub fn previous(self) -> Self {
        Step(self.0.saturating_sub(1))
    }

    /// Whether this is the first step.
    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    /// Whether this is the last step.
    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// The species shown at this step (the step's data key).
    #[must_use]
    pub fn species(self) -> Species {
        Species::ALL[self.index()]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.0 + 1, Self::COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Step::new(-1), None);
        assert_eq!(Step::new(4), None);
        assert_eq!(Step::new(i64::MAX), None);
        assert_eq!(Step::new(2).map(Step::index), Some(2));
    }

    #[test]
    fn navigation_clamps_at_bounds() {
        assert_eq!(Step::LAST.next(), Step::LAST);
        assert_eq!(Step::FIRST.previous(), Step::FIRST);
        assert_eq!(Step::FIRST.next().index(), 1);
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Step::FIRST.to_string(), "1 of 4");
        assert_eq!(Step::LAST.to_string(), "4 of 4");
    }
}
