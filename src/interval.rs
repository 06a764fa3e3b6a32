use std::cmp::Ordering;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Mul, MulAssign};

use crate::Scalar;

/// A closed interval ```[lo, hi]``` on the real line.
///
/// An interval with ```lo > hi``` denotes the empty set, which is also the
/// [`Default`] value. Set operations are available through the bit operators:
/// ```|``` computes the union hull of two intervals and ```&``` their
/// intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lo: Scalar,
    hi: Scalar,
}

impl Interval {
    /// Creates a new interval from ```lo``` to ```hi```.
    pub fn new(lo: Scalar, hi: Scalar) -> Self {
        Self { lo, hi }
    }

    /// Creates a degenerate interval covering the single point ```value```.
    pub fn point(value: Scalar) -> Self {
        Self {
            lo: value,
            hi: value,
        }
    }

    /// Returns the lower endpoint.
    pub fn lo(&self) -> Scalar {
        self.lo
    }

    /// Returns the upper endpoint.
    pub fn hi(&self) -> Scalar {
        self.hi
    }

    /// Returns the span ```hi - lo```.
    ///
    /// The result is negative for the empty set; callers that need a measure
    /// should clamp it themselves.
    pub fn width(&self) -> Scalar {
        self.hi - self.lo
    }

    /// Returns the midpoint ```(lo + hi) / 2```.
    pub fn mid(&self) -> Scalar {
        (self.lo + self.hi) / 2.
    }

    /// Checks whether ```value``` lies in the interval (endpoints included).
    pub fn contains(&self, value: Scalar) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Checks whether ```other``` overlaps the interval.
    ///
    /// Despite the name this is an overlap test, not a subset test: two
    /// intervals sharing any point (endpoints included) contain each other.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

impl Default for Interval {
    /// Creates the empty interval ```[inf, -inf]```.
    fn default() -> Self {
        Self {
            lo: Scalar::INFINITY,
            hi: Scalar::NEG_INFINITY,
        }
    }
}

impl BitOr for Interval {
    type Output = Interval;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            lo: self.lo.min(rhs.lo),
            hi: self.hi.max(rhs.hi),
        }
    }
}

impl BitOrAssign for Interval {
    fn bitor_assign(&mut self, rhs: Self) {
        self.lo = self.lo.min(rhs.lo);
        self.hi = self.hi.max(rhs.hi);
    }
}

impl BitAnd for Interval {
    type Output = Interval;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            lo: self.lo.max(rhs.lo),
            hi: self.hi.min(rhs.hi),
        }
    }
}

impl BitAndAssign for Interval {
    fn bitand_assign(&mut self, rhs: Self) {
        self.lo = self.lo.max(rhs.lo);
        self.hi = self.hi.min(rhs.hi);
    }
}

impl Mul<Scalar> for Interval {
    type Output = Interval;

    /// Scales both endpoints. A negative factor leaves the endpoints
    /// swapped; re-sorting them is the caller's burden.
    fn mul(self, rhs: Scalar) -> Self::Output {
        Self {
            lo: self.lo * rhs,
            hi: self.hi * rhs,
        }
    }
}

impl MulAssign<Scalar> for Interval {
    fn mul_assign(&mut self, rhs: Scalar) {
        self.lo *= rhs;
        self.hi *= rhs;
    }
}

impl Mul<Interval> for Scalar {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Self::Output {
        rhs * self
    }
}

impl PartialOrd for Interval {
    /// Orders two intervals when they are disjoint: an interval is ```Less```
    /// when it lies entirely below the other and ```Greater``` when entirely
    /// above. Overlapping intervals with different endpoints are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.hi < other.lo {
            Some(Ordering::Less)
        } else if self.lo > other.hi {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
