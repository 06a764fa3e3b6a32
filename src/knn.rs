use log::debug;
use ndarray::{ArrayView1, ArrayView2, Axis};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{Bound, Metric, Node, Scalar, SpaceTree};

/// A neighbour resulted from a k-nearest neighbour search.
#[derive(Clone, Copy, Debug)]
pub struct Neighbour {
    idx: usize,
    dist: Scalar,
}

impl Neighbour {
    /// Returns the index of a neighbour in the reordered dataset.
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Returns the squared distance for a neighbour to a query point.
    pub fn dist(&self) -> Scalar {
        self.dist
    }
}

/// Single-tree exact k-nearest neighbour search over a space tree.
///
/// A subtree is skipped whenever its bound cannot beat the current k-th best
/// squared distance. Distances are squared Euclidean to match the units the
/// bounds report; neighbour indices refer to the reordered dataset and map
/// back through [`SpaceTree::old_from_new`].
#[derive(Clone, Debug)]
pub struct NeighbourSearch<'a, B> {
    tree: &'a SpaceTree<B>,
    data: ArrayView2<'a, Scalar>,
}

impl<'a, B: Bound + Sync> NeighbourSearch<'a, B> {
    /// Creates a search over ```tree``` and the dataset it was built on, in
    /// reordered form.
    pub fn new(tree: &'a SpaceTree<B>, data: ArrayView2<'a, Scalar>) -> Self {
        debug_assert_eq!(tree.count(), data.nrows());

        Self { tree, data }
    }

    /// Performs the nearest neighbour search for a single query and returns
    /// up to ```k``` neighbours who are closest to the ```query``` point,
    /// nearest first.
    pub fn search(&self, query: ArrayView1<'_, Scalar>, k: usize) -> Vec<Neighbour> {
        let mut result = Vec::with_capacity(k + 1);
        if k == 0 {
            return result;
        }

        self.descend(self.tree.root(), query, k, &mut result);
        result
    }

    /// Performs the nearest neighbour search for an array of queries and
    /// returns ```k``` neighbours for each row of ```queries```, in query
    /// order.
    pub fn search2(&self, queries: ArrayView2<'_, Scalar>, k: usize) -> Vec<Vec<Neighbour>> {
        debug!("batch search: {} queries, k = {}", queries.nrows(), k);

        queries
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(|query| self.search(query, k))
            .collect()
    }

    fn descend(
        &self,
        node: &Node<B>,
        query: ArrayView1<'_, Scalar>,
        k: usize,
        result: &mut Vec<Neighbour>,
    ) {
        match (node.left(), node.right()) {
            (Some(left), Some(right)) => {
                let d_left = left.bound().min_distance_to_point(query);
                let d_right = right.bound().min_distance_to_point(query);

                let (near, d_near, far, d_far) = if d_left <= d_right {
                    (left, d_left, right, d_right)
                } else {
                    (right, d_right, left, d_left)
                };

                if Self::viable(d_near, k, result) {
                    self.descend(near, query, k, result);
                }

                if Self::viable(d_far, k, result) {
                    self.descend(far, query, k, result);
                }
            }
            _ => {
                for idx in node.begin()..node.end() {
                    let dist = Metric::Euclidean.sq_distance(query, self.data.row(idx));
                    Self::offer(Neighbour { idx, dist }, k, result);
                }
            }
        }
    }

    fn viable(min_dist: Scalar, k: usize, result: &[Neighbour]) -> bool {
        result.len() < k || min_dist <= result[result.len() - 1].dist
    }

    fn offer(candidate: Neighbour, k: usize, result: &mut Vec<Neighbour>) {
        let pos = result
            .iter()
            .position(|n| candidate.dist < n.dist)
            .unwrap_or(result.len());

        if pos < k {
            result.insert(pos, candidate);
            if result.len() > k {
                result.pop();
            }
        }
    }
}
