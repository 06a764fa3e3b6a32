use std::ops::{Index, IndexMut};

use ndarray::{Array1, ArrayView1};

use crate::{Interval, Scalar};

/// Interface for axis-aligned bounding volumes consumed by the tree and
/// search layers.
///
/// A bound is a product of per-axis [`Interval`]s, indexable by axis. All
/// distances are reported in the squared units of the bound's metric power,
/// so pruning code can compare them against squared point-to-point
/// distances without taking roots.
pub trait Bound: Clone + Index<usize, Output = Interval> + IndexMut<usize> {
    /// Returns the dimensionality of the bound.
    fn dim(&self) -> usize;

    /// Resets every axis to the empty interval, keeping the dimensionality.
    fn clear(&mut self);

    /// Returns the centre point of the bound.
    fn centroid(&self) -> Array1<Scalar>;

    /// Checks whether ```point``` lies inside the bound (faces included).
    fn contains(&self, point: ArrayView1<'_, Scalar>) -> bool;

    /// Grows the bound to cover ```point```.
    fn expand(&mut self, point: ArrayView1<'_, Scalar>);

    /// Returns the smallest distance between the bound and ```point```.
    /// A contained point is at distance zero.
    fn min_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Scalar;

    /// Returns the largest distance between the bound and ```point```.
    fn max_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Scalar;

    /// Returns the minimum and maximum distance to ```point``` as an
    /// interval.
    fn range_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Interval;

    /// Returns the smallest distance between two bounds. Overlapping bounds
    /// are at distance zero.
    fn min_distance(&self, other: &Self) -> Scalar;

    /// Returns the largest distance between two bounds.
    fn max_distance(&self, other: &Self) -> Scalar;

    /// Returns the minimum and maximum distance between two bounds as an
    /// interval.
    fn range_distance(&self, other: &Self) -> Interval;
}
