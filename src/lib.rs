//! A library for nearest neighbour search based on binary space-partitioning
//! trees and bounding volumes.
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    rustdoc::broken_intra_doc_links
)]

type Scalar = f64;

mod ball;
pub use ball::BallBound;

mod bound;
pub use bound::Bound;

mod interval;
pub use interval::Interval;

mod knn;
pub use knn::Neighbour;
pub use knn::NeighbourSearch;

mod metric;
pub use metric::Metric;

mod periodic;
pub use periodic::PeriodicBound;

mod rect;
pub use rect::RectBound;


mod tree;
pub use tree::Node;
pub use tree::SpaceTree;
pub use tree::SpaceTreeBuilder;
