use log::debug;
use ndarray::{s, Array1, Array2};

use crate::{Bound, PeriodicBound, RectBound, Scalar};

/// A node of a space-partitioning tree, covering a contiguous range of rows
/// of the reordered dataset.
#[derive(Clone, Debug)]
pub struct Node<B> {
    bound: B,
    begin: usize,
    count: usize,
    left: Option<Box<Node<B>>>,
    right: Option<Box<Node<B>>>,
}

impl<B> Node<B> {
    fn new(bound: B, begin: usize, count: usize) -> Self {
        Self {
            bound,
            begin,
            count,
            left: None,
            right: None,
        }
    }

    /// Returns the bounding volume covering all points of the node.
    pub fn bound(&self) -> &B {
        &self.bound
    }

    /// Returns the index of the first point of the node.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Returns the index one past the last point of the node.
    pub fn end(&self) -> usize {
        self.begin + self.count
    }

    /// Returns the number of points covered by the node.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the left child of a non-leaf node.
    pub fn left(&self) -> Option<&Node<B>> {
        self.left.as_deref()
    }

    /// Returns the right child of a non-leaf node.
    pub fn right(&self) -> Option<&Node<B>> {
        self.right.as_deref()
    }

    /// Checks whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<B: Bound> Node<B> {
    fn split(&mut self, data: &mut Array2<Scalar>, old_from_new: &mut [usize], leaf_size: usize) {
        self.bound.clear();
        for row in data.slice(s![self.begin..self.end(), ..]).outer_iter() {
            self.bound.expand(row);
        }

        if self.count <= leaf_size {
            return;
        }

        // Split on the first axis of maximal width, at its midpoint.
        let mut split_axis = 0;
        let mut max_width = -1.;
        for d in 0..self.bound.dim() {
            let w = self.bound[d].width();
            if w > max_width {
                max_width = w;
                split_axis = d;
            }
        }

        if max_width <= 0. {
            return;
        }

        let split_val = self.bound[split_axis].mid();

        let mid = partition(
            data,
            old_from_new,
            self.begin,
            self.end(),
            split_axis,
            split_val,
        );
        if mid == self.begin || mid == self.end() {
            return;
        }

        let mut left = Node::new(self.bound.clone(), self.begin, mid - self.begin);
        left.split(data, old_from_new, leaf_size);
        self.left = Some(Box::new(left));

        let mut right = Node::new(self.bound.clone(), mid, self.end() - mid);
        right.split(data, old_from_new, leaf_size);
        self.right = Some(Box::new(right));
    }
}

/// Reorders rows ```begin..end``` so that rows with a coordinate below
/// ```split_val``` on ```split_axis``` come first, keeping the relative
/// order within both sides, and permutes ```old_from_new``` alongside.
/// Returns the index of the first right-side row.
fn partition(
    data: &mut Array2<Scalar>,
    old_from_new: &mut [usize],
    begin: usize,
    end: usize,
    split_axis: usize,
    split_val: Scalar,
) -> usize {
    // A NaN coordinate fails the left test and lands on the right side.
    let mut order: Vec<usize> = (begin..end)
        .filter(|&i| data[[i, split_axis]] < split_val)
        .collect();
    let mid = begin + order.len();
    order.extend((begin..end).filter(|&i| !(data[[i, split_axis]] < split_val)));

    let snapshot = data.slice(s![begin..end, ..]).to_owned();
    let perm = old_from_new[begin..end].to_vec();

    for (offset, &src) in order.iter().enumerate() {
        data.row_mut(begin + offset).assign(&snapshot.row(src - begin));
        old_from_new[begin + offset] = perm[src - begin];
    }

    mid
}

/// A binary space-partitioning tree over a row-major dataset.
///
/// Construction reorders the dataset in place so that every node covers a
/// contiguous range of rows; the permutation is kept by the tree in both
/// directions.
#[derive(Clone, Debug)]
pub struct SpaceTree<B> {
    root: Node<B>,
    leaf_size: usize,
    old_from_new: Vec<usize>,
    new_from_old: Vec<usize>,
}

impl<B: Bound> SpaceTree<B> {
    fn build(data: &mut Array2<Scalar>, bound: B, leaf_size: usize) -> Self {
        let n = data.nrows();
        let mut old_from_new: Vec<usize> = (0..n).collect();

        let mut root = Node::new(bound, 0, n);
        root.split(data, &mut old_from_new, leaf_size);

        let mut new_from_old = vec![0; n];
        for (new, &old) in old_from_new.iter().enumerate() {
            new_from_old[old] = new;
        }

        debug!("space tree over {} points built (leaf size {})", n, leaf_size);

        Self {
            root,
            leaf_size,
            old_from_new,
            new_from_old,
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node<B> {
        &self.root
    }

    /// Returns the number of points in the tree.
    pub fn count(&self) -> usize {
        self.root.count
    }

    /// Returns the leaf size the tree was built with.
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// Maps a row's position in the reordered dataset to its position in the
    /// original dataset.
    pub fn old_from_new(&self) -> &[usize] {
        &self.old_from_new
    }

    /// Maps a row's position in the original dataset to its position in the
    /// reordered dataset.
    pub fn new_from_old(&self) -> &[usize] {
        &self.new_from_old
    }
}

/// A build struct for initialising a new space tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceTreeBuilder {
    leaf_size: usize,
}

impl Default for SpaceTreeBuilder {
    /// Creates a builder with a leaf size of 20.
    fn default() -> Self {
        Self { leaf_size: 20 }
    }
}

impl SpaceTreeBuilder {
    /// Creates a builder with default parameters.
    pub fn new() -> Self {
        Self {
            ..Default::default()
        }
    }

    /// Sets the number of points a node may hold without being split.
    pub fn leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    /// Constructs a tree with plain rectangle bounds, reordering ```data```
    /// in place.
    pub fn build(self, data: &mut Array2<Scalar>) -> SpaceTree<RectBound> {
        SpaceTree::build(data, RectBound::new(data.ncols()), self.leaf_size)
    }

    /// Constructs a tree with periodic rectangle bounds on the torus given
    /// by ```box_size```, reordering ```data``` in place.
    pub fn build_periodic(
        self,
        data: &mut Array2<Scalar>,
        box_size: Array1<Scalar>,
    ) -> SpaceTree<PeriodicBound> {
        debug_assert_eq!(data.ncols(), box_size.len());

        SpaceTree::build(data, PeriodicBound::new(box_size), self.leaf_size)
    }
}
