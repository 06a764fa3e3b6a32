use std::ops::{BitOrAssign, Index, IndexMut};

use ndarray::{Array1, ArrayView1};

use crate::{Bound, Interval, Scalar};

/// An axis-aligned hyper-rectangle bound on a torus.
///
/// Every axis carries a period (the box size); distance queries consider the
/// query's mirrored images one period up and one period down on each axis
/// and keep the per-axis extremum. A period of ```0``` disables wrapping on
/// that axis. As with [`RectBound`](crate::RectBound), ```P``` is the metric
/// power and results are reported in powered units, with every per-axis term
/// reduced by a quarter.
#[derive(Clone, Debug)]
pub struct PeriodicBound<const P: i32 = 2> {
    intervals: Vec<Interval>,
    box_size: Array1<Scalar>,
}

impl<const P: i32> PeriodicBound<P> {
    /// Creates a bound on a torus with the given ```box_size```. The
    /// dimensionality is the length of the box and every axis starts as the
    /// empty interval.
    pub fn new(box_size: Array1<Scalar>) -> Self {
        Self {
            intervals: vec![Interval::default(); box_size.len()],
            box_size,
        }
    }

    /// Returns the period of each axis.
    pub fn box_size(&self) -> &Array1<Scalar> {
        &self.box_size
    }

    /// Replaces the periods without touching the axis intervals.
    pub fn set_box_size(&mut self, box_size: Array1<Scalar>) {
        debug_assert_eq!(self.intervals.len(), box_size.len());

        self.box_size = box_size;
    }

    fn min_gap(s: &Interval, lo: Scalar, hi: Scalar) -> Scalar {
        let lower = lo - s.hi();
        let higher = s.lo() - hi;

        ((lower + lower.abs()) + (higher + higher.abs())).powi(P)
    }

    fn max_edge(s: &Interval, lo: Scalar, hi: Scalar) -> Scalar {
        (hi - s.lo()).max(s.hi() - lo).abs().powi(P)
    }

    /// Smallest powered distance on axis ```i``` between the bound's
    /// interval and ```[lo, hi]```, taken over the three periodic images.
    fn axis_min(&self, i: usize, lo: Scalar, hi: Scalar) -> Scalar {
        let period = self.box_size[i].abs();
        let (lo, hi) = fold(lo, hi, period);

        let s = &self.intervals[i];
        let mut best = Scalar::INFINITY;
        for &shift in &[0., period, -period] {
            let (b_lo, b_hi) = (lo + shift, hi + shift);

            // An image straddling the box edge arrives inverted; split it at
            // the edge and keep the nearer piece.
            let sum = if b_hi < b_lo {
                Self::min_gap(s, shift, b_hi).min(Self::min_gap(s, b_lo, period + shift))
            } else {
                Self::min_gap(s, b_lo, b_hi)
            };

            best = best.min(sum.powf(2. / P as Scalar) / 4.);
        }

        best
    }

    /// Largest powered distance on axis ```i``` between the bound's interval
    /// and ```[lo, hi]```, taken over the three periodic images.
    fn axis_max(&self, i: usize, lo: Scalar, hi: Scalar) -> Scalar {
        let period = self.box_size[i].abs();
        let (lo, hi) = fold(lo, hi, period);

        let s = &self.intervals[i];
        let mut best: Scalar = 0.;
        for &shift in &[0., period, -period] {
            let (b_lo, b_hi) = (lo + shift, hi + shift);

            let sum = if b_hi < b_lo {
                Self::max_edge(s, shift, b_hi).min(Self::max_edge(s, b_lo, period + shift))
            } else {
                Self::max_edge(s, b_lo, b_hi)
            };

            best = best.max(sum.powf(2. / P as Scalar) / 4.);
        }

        best
    }
}

/// Folds both endpoints into the box independently. Folding an interval
/// whose endpoints land on opposite sides of the edge leaves ```hi < lo```;
/// the distance kernels split such images at the edge.
fn fold(lo: Scalar, hi: Scalar, period: Scalar) -> (Scalar, Scalar) {
    if period == 0. {
        return (lo, hi);
    }

    let lo = if lo.abs() > period { lo % period } else { lo };
    let hi = if hi.abs() > period { hi % period } else { hi };
    (lo, hi)
}

impl<const P: i32> Default for PeriodicBound<P> {
    /// Creates a bound with no dimensions and an empty box.
    fn default() -> Self {
        Self::new(Array1::zeros(0))
    }
}

impl<const P: i32> Index<usize> for PeriodicBound<P> {
    type Output = Interval;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.intervals[axis]
    }
}

impl<const P: i32> IndexMut<usize> for PeriodicBound<P> {
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        &mut self.intervals[axis]
    }
}

impl<const P: i32> BitOrAssign<&PeriodicBound<P>> for PeriodicBound<P> {
    /// Grows the bound to cover ```rhs``` axis by axis. Periods are left
    /// untouched.
    fn bitor_assign(&mut self, rhs: &PeriodicBound<P>) {
        debug_assert_eq!(self.intervals.len(), rhs.intervals.len());

        for (a, b) in self.intervals.iter_mut().zip(rhs.intervals.iter()) {
            *a |= *b;
        }
    }
}

impl<const P: i32> Bound for PeriodicBound<P> {
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

        (0..self.intervals.len())
            .map(|i| self.axis_min(i, point[i], point[i]))
            .sum()
    }

    fn max_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Scalar {
        debug_assert_eq!(self.intervals.len(), point.len());

        (0..self.intervals.len())
            .map(|i| self.axis_max(i, point[i], point[i]))
            .sum()
    }

    fn range_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Interval {
        Interval::new(
            self.min_distance_to_point(point),
            self.max_distance_to_point(point),
        )
    }

    fn min_distance(&self, other: &Self) -> Scalar {
        debug_assert_eq!(self.intervals.len(), other.intervals.len());

        (0..self.intervals.len())
            .map(|i| self.axis_min(i, other.intervals[i].lo(), other.intervals[i].hi()))
            .sum()
    }

    fn max_distance(&self, other: &Self) -> Scalar {
        debug_assert_eq!(self.intervals.len(), other.intervals.len());

        (0..self.intervals.len())
            .map(|i| self.axis_max(i, other.intervals[i].lo(), other.intervals[i].hi()))
            .sum()
    }

    fn range_distance(&self, other: &Self) -> Interval {
        Interval::new(self.min_distance(other), self.max_distance(other))
    }
}
