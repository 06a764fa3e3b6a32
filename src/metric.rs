use crate::Scalar;
use ndarray::ArrayView1;

use ndarray_stats::DeviationExt;

/// Enum for distance functions in a metric space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// L-1 or Manhattan distance. See [\[Wikipedia\]](https://en.wikipedia.org/wiki/Taxicab_geometry).
    Manhattan,
    /// L-2 or Euclidean distance. See [\[Wikipedia\]](https://en.wikipedia.org/wiki/Euclidean_distance)
    Euclidean,
    /// L-inf or Chebyshev distance. See [\[Wikipedia\]](https://en.wikipedia.org/wiki/Chebyshev_distance)
    Chebyshev,
}

impl Metric {
    /// Calculate the distance between two points.
    pub fn distance(&self, a: ArrayView1<'_, Scalar>, b: ArrayView1<'_, Scalar>) -> Scalar {
        match self {
            Metric::Manhattan => a.l1_dist(&b).unwrap(),
            Metric::Euclidean => a.l2_dist(&b).unwrap() as Scalar,
            Metric::Chebyshev => a.linf_dist(&b).unwrap(),
        }
    }

    /// Calculate the squared distance between two points.
    ///
    /// The Euclidean metric skips the square root; the others square the
    /// plain distance.
    pub fn sq_distance(&self, a: ArrayView1<'_, Scalar>, b: ArrayView1<'_, Scalar>) -> Scalar {
        match self {
            Metric::Euclidean => a.sq_l2_dist(&b).unwrap(),
            _ => self.distance(a, b).powi(2),
        }
    }
}
