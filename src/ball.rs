use ndarray::{Array1, ArrayView1};

use crate::{Interval, Metric, Scalar};

/// A bounding ball: a centre point together with a radius.
///
/// All ball-to-ball queries reduce to the centre-to-centre distance and the
/// two radii. Every operation comes in a plain variant in metric units and a
/// ```_sq``` variant reporting its square, which for the Euclidean metric
/// matches the squared-unit convention of the rectangle bounds.
#[derive(Clone, Debug)]
pub struct BallBound {
    center: Array1<Scalar>,
    radius: Scalar,
    metric: Metric,
}

impl BallBound {
    /// Creates a ball with the Euclidean metric. A radius of ```0``` is a
    /// legal single-point ball.
    pub fn new(center: Array1<Scalar>, radius: Scalar) -> Self {
        Self::with_metric(center, radius, Metric::Euclidean)
    }

    /// Creates a ball measured by ```metric```.
    pub fn with_metric(center: Array1<Scalar>, radius: Scalar, metric: Metric) -> Self {
        Self {
            center,
            radius,
            metric,
        }
    }

    /// Returns the dimensionality of the ball.
    pub fn dim(&self) -> usize {
        self.center.len()
    }

    /// Returns the centre point.
    pub fn center(&self) -> &Array1<Scalar> {
        &self.center
    }

    /// Returns the centre point for modification.
    pub fn center_mut(&mut self) -> &mut Array1<Scalar> {
        &mut self.center
    }

    /// Returns the radius.
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    /// Sets the radius.
    pub fn set_radius(&mut self, radius: Scalar) {
        self.radius = radius;
    }

    /// Returns the metric the ball is measured by.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Checks whether ```point``` lies in the ball (surface included).
    pub fn contains(&self, point: ArrayView1<'_, Scalar>) -> bool {
        self.metric.distance(self.center.view(), point) <= self.radius
    }

    /// Checks whether ```other``` lies entirely inside the ball.
    pub fn contains_ball(&self, other: &BallBound) -> bool {
        self.metric.distance(self.center.view(), other.center.view())
            <= self.radius - other.radius
    }

    /// Returns the distance between the two centres.
    pub fn mid_distance(&self, other: &BallBound) -> Scalar {
        self.metric.distance(self.center.view(), other.center.view())
    }

    /// Returns the squared distance between the two centres.
    pub fn mid_distance_sq(&self, other: &BallBound) -> Scalar {
        self.mid_distance(other).powi(2)
    }

    /// Returns the smallest distance between the two ball surfaces, and zero
    /// when the balls overlap.
    pub fn min_distance(&self, other: &BallBound) -> Scalar {
        (self.mid_distance(other) - self.radius - other.radius).max(0.)
    }

    /// Returns the square of [`min_distance`](Self::min_distance).
    pub fn min_distance_sq(&self, other: &BallBound) -> Scalar {
        self.min_distance(other).powi(2)
    }

    /// Returns the largest distance between the two ball surfaces.
    pub fn max_distance(&self, other: &BallBound) -> Scalar {
        self.mid_distance(other) + self.radius + other.radius
    }

    /// Returns the square of [`max_distance`](Self::max_distance).
    pub fn max_distance_sq(&self, other: &BallBound) -> Scalar {
        self.max_distance(other).powi(2)
    }

    /// Returns the smallest distance between this ball's surface and the
    /// centre of ```other```, and zero when the centre lies inside.
    pub fn min_to_mid(&self, other: &BallBound) -> Scalar {
        (self.mid_distance(other) - self.radius).max(0.)
    }

    /// Returns the square of [`min_to_mid`](Self::min_to_mid).
    pub fn min_to_mid_sq(&self, other: &BallBound) -> Scalar {
        self.min_to_mid(other).powi(2)
    }

    /// Returns the largest distance from this ball's surface to any point of
    /// ```other``` under the best placement, and zero when that quantity
    /// would be negative.
    pub fn minimax_distance(&self, other: &BallBound) -> Scalar {
        (self.mid_distance(other) - self.radius + other.radius).max(0.)
    }

    /// Returns the square of [`minimax_distance`](Self::minimax_distance).
    pub fn minimax_distance_sq(&self, other: &BallBound) -> Scalar {
        self.minimax_distance(other).powi(2)
    }

    /// Returns the minimum and maximum surface distance as an interval.
    pub fn range_distance(&self, other: &BallBound) -> Interval {
        Interval::new(self.min_distance(other), self.max_distance(other))
    }

    /// Returns the squared minimum and maximum surface distance as an
    /// interval.
    pub fn range_distance_sq(&self, other: &BallBound) -> Interval {
        Interval::new(self.min_distance_sq(other), self.max_distance_sq(other))
    }

    /// Returns the smallest distance between the ball and ```point```, and
    /// zero when the point lies inside.
    pub fn min_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Scalar {
        (self.metric.distance(self.center.view(), point) - self.radius).max(0.)
    }

    /// Returns the square of
    /// [`min_distance_to_point`](Self::min_distance_to_point).
    pub fn min_distance_to_point_sq(&self, point: ArrayView1<'_, Scalar>) -> Scalar {
        self.min_distance_to_point(point).powi(2)
    }

    /// Returns the largest distance between the ball and ```point```.
    pub fn max_distance_to_point(&self, point: ArrayView1<'_, Scalar>) -> Scalar {
        self.metric.distance(self.center.view(), point) + self.radius
    }

    /// Returns the square of
    /// [`max_distance_to_point`](Self::max_distance_to_point).
    pub fn max_distance_to_point_sq(&self, point: ArrayView1<'_, Scalar>) -> Scalar {
        self.max_distance_to_point(point).powi(2)
    }
}
