//! Distance predicates for post-filtering query results.

use std::fmt;

/// A predicate over a neighbor's distance.
///
/// All comparisons are strict. An `EqualTo` range keeps distances within
/// `epsilon` of `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceRange {
    LessThan(f32),
    BiggerThan(f32),
    Between { lower: f32, upper: f32 },
    EqualTo { value: f32, epsilon: f32 },
}

impl DistanceRange {
    /// `-0.5 < d < 0.5`.
    pub const DEFAULT: DistanceRange = DistanceRange::Between {
        lower: -0.5,
        upper: 0.5,
    };

    pub const fn less_than(limit: f32) -> Self {
        DistanceRange::LessThan(limit)
    }

    pub const fn bigger_than(limit: f32) -> Self {
        DistanceRange::BiggerThan(limit)
    }

    pub const fn between(lower: f32, upper: f32) -> Self {
        DistanceRange::Between { lower, upper }
    }

    pub const fn equal_to(value: f32, epsilon: f32) -> Self {
        DistanceRange::EqualTo { value, epsilon }
    }

    /// Returns true if `distance` satisfies this range.
    #[inline]
    pub fn in_range(&self, distance: f32) -> bool {
        match *self {
            DistanceRange::LessThan(limit) => distance < limit,
            DistanceRange::BiggerThan(limit) => distance > limit,
            DistanceRange::Between { lower, upper } => distance > lower && distance < upper,
            DistanceRange::EqualTo { value, epsilon } => (distance - value).abs() < epsilon,
        }
    }

    pub fn lower_bound(&self) -> Option<f32> {
        match *self {
            DistanceRange::LessThan(_) => None,
            DistanceRange::BiggerThan(limit) => Some(limit),
            DistanceRange::Between { lower, .. } => Some(lower),
            DistanceRange::EqualTo { value, .. } => Some(value),
        }
    }

    pub fn upper_bound(&self) -> Option<f32> {
        match *self {
            DistanceRange::LessThan(limit) => Some(limit),
            DistanceRange::BiggerThan(_) => None,
            DistanceRange::Between { upper, .. } => Some(upper),
            DistanceRange::EqualTo { value, .. } => Some(value),
        }
    }
}

impl Default for DistanceRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

struct Bound(Option<f32>);

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{:?}", v),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Display for DistanceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DistanceRange{{lowerBound={}, upperBound={}}}",
            Bound(self.lower_bound()),
            Bound(self.upper_bound())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_are_strict() {
        assert!(DistanceRange::less_than(0.5).in_range(0.4));
        assert!(!DistanceRange::less_than(0.5).in_range(0.5));
        assert!(DistanceRange::bigger_than(0.5).in_range(1.0));
        assert!(!DistanceRange::bigger_than(0.5).in_range(0.5));
        assert!(DistanceRange::between(-1.0, 1.0).in_range(0.0));
        assert!(!DistanceRange::between(-1.0, 1.0).in_range(1.0));
    }

    #[test]
    fn test_equal_to() {
        let range = DistanceRange::equal_to(0.0, 0.001);
        assert!(range.in_range(0.0));
        assert!(range.in_range(0.0005));
        assert!(!range.in_range(0.01));
        // Zero epsilon never matches.
        assert!(!DistanceRange::equal_to(1.0, 0.0).in_range(1.0));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(DistanceRange::less_than(2.0).lower_bound(), None);
        assert_eq!(DistanceRange::less_than(2.0).upper_bound(), Some(2.0));
        assert_eq!(DistanceRange::bigger_than(2.0).upper_bound(), None);
        assert_eq!(DistanceRange::DEFAULT.lower_bound(), Some(-0.5));
        assert_eq!(DistanceRange::DEFAULT.upper_bound(), Some(0.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            DistanceRange::DEFAULT.to_string(),
            "DistanceRange{lowerBound=-0.5, upperBound=0.5}"
        );
        assert_eq!(
            DistanceRange::less_than(1.0).to_string(),
            "DistanceRange{lowerBound=null, upperBound=1.0}"
        );
    }
}
