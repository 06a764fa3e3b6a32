use std::ops::{BitOrAssign, Index, IndexMut};

use ndarray::{Array1, ArrayView1};

use crate::{Bound, Interval, Scalar};

/// An axis-aligned hyper-rectangle bound.
///
/// The const parameter ```P``` is the power of the underlying metric; the
/// default ```P = 2``` yields Euclidean geometry. Distance queries report
/// powered units, so for ```P = 2``` every result is a squared distance.
#[derive(Clone, Debug, Default)]
pub struct RectBound<const P: i32 = 2> {
    intervals: Vec<Interval>,
}

impl<const P: i32> RectBound<P> {
    /// Creates a bound with ```dim``` axes, each initialised to the empty
    /// interval.
    pub fn new(dim: usize) -> Self {
        Self {
            intervals: vec![Interval::default(); dim],
        }
    }
}

impl<const P: i32> Index<usize> for RectBound<P> {
    type Output = Interval;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.intervals[axis]
    }
}

impl<const P: i32> IndexMut<usize> for RectBound<P> {
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        &mut self.intervals[axis]
    }
}

impl<const P: i32> BitOrAssign<&RectBound<P>> for RectBound<P> {
    /// Grows the bound to cover ```rhs``` axis by axis.
    fn bitor_assign(&mut self, rhs: &RectBound<P>) {
        debug_assert_eq!(self.intervals.len(), rhs.intervals.len());

        for (a, b) in self.intervals.iter_mut().zip(rhs.intervals.iter()) {
            *a |= *b;
        }
    }
}

impl<const P: i32> Bound for RectBound<P> {
    fn dim(&self) -> usize {
        self.intervals.len()
    }

    fn clear(&mut self) {
        for iv in self.intervals.iter_mut() {
            *iv = Interval::default();
        }
    }

    fn centroid(&self) -> Array1<Scalar> {
        self.intervals.iter().map(|iv| iv.mid()).collect()
    }

    fn contains(&self, point: ArrayView1<'_, Scalar>) -> bool {
        debug_assert_eq!(self.intervals.len(), point.len());

        self.intervals
            .iter()
            .zip(point.iter())
            .all(|(iv, &v)| iv.contains(v))
    }

    fn expand(&mut self, point: ArrayView1<'_, Scalar>) {
        debug_assert_eq!(self.intervals.len(), point.len());

        for (iv, &v) in self.intervals.iter_mut().zip(point.iter()) {
            *iv |= Interval::point(v);
        }
    }

    fn min_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Scalar {
        debug_assert_eq!(self.intervals.len(), point.len());

        let mut sum = 0.;
        for (iv, &v) in self.intervals.iter().zip(point.iter()) {
            let lower = iv.lo() - v;
            let higher = v - iv.hi();

            // (x + |x|) doubles a positive gap and cancels a negative one,
            // so only the side the point falls outside of contributes.
            sum += ((lower + lower.abs()) + (higher + higher.abs())).powi(P);
        }

        sum.powf(2. / P as Scalar) / 4.
    }

    fn max_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Scalar {
        debug_assert_eq!(self.intervals.len(), point.len());

        let mut sum = 0.;
        for (iv, &v) in self.intervals.iter().zip(point.iter()) {
            let v = (v - iv.lo()).abs().max((iv.hi() - v).abs());
            sum += v.powi(P);
        }

        sum.powf(2. / P as Scalar)
    }

    fn range_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Interval {
        debug_assert_eq!(self.intervals.len(), point.len());

        let mut lo_sum = 0.;
        let mut hi_sum = 0.;
        for (iv, &v) in self.intervals.iter().zip(point.iter()) {
            let v1 = iv.lo() - v;
            let v2 = v - iv.hi();

            // At most one of v1 and v2 is positive; the positive one is the
            // gap to the nearer face and the negated other one the span to
            // the farther face.
            let (v_lo, v_hi) = if v1 >= v2 {
                (v1.max(0.), -v2)
            } else {
                (v2.max(0.), -v1)
            };

            lo_sum += v_lo.powi(P);
            hi_sum += v_hi.powi(P);
        }

        Interval::new(
            lo_sum.powf(2. / P as Scalar),
            hi_sum.powf(2. / P as Scalar),
        )
    }

    fn min_distance(&self, other: &Self) -> Scalar {
        debug_assert_eq!(self.intervals.len(), other.intervals.len());

        let mut sum = 0.;
        for (a, b) in self.intervals.iter().zip(other.intervals.iter()) {
            let lower = b.lo() - a.hi();
            let higher = a.lo() - b.hi();

            sum += ((lower + lower.abs()) + (higher + higher.abs())).powi(P);
        }

        sum.powf(2. / P as Scalar) / 4.
    }

    fn max_distance(&self, other: &Self) -> Scalar {
        debug_assert_eq!(self.intervals.len(), other.intervals.len());

        let mut sum = 0.;
        for (a, b) in self.intervals.iter().zip(other.intervals.iter()) {
            let v = (b.hi() - a.lo()).abs().max((a.hi() - b.lo()).abs());
            sum += v.powi(P);
        }

        sum.powf(2. / P as Scalar)
    }

    fn range_distance(&self, other: &Self) -> Interval {
        debug_assert_eq!(self.intervals.len(), other.intervals.len());

        let mut lo_sum = 0.;
        let mut hi_sum = 0.;
        for (a, b) in self.intervals.iter().zip(other.intervals.iter()) {
            let v1 = b.lo() - a.hi();
            let v2 = a.lo() - b.hi();

            let (v_lo, v_hi) = if v1 >= v2 {
                (v1.max(0.), -v2)
            } else {
                (v2.max(0.), -v1)
            };

            lo_sum += v_lo.powi(P);
            hi_sum += v_hi.powi(P);
        }

        Interval::new(
            lo_sum.powf(2. / P as Scalar),
            hi_sum.powf(2. / P as Scalar),
        )
    }
}
