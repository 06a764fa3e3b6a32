use ndarray::{array, Array, Array1, Array2};
use spacetree::{NeighbourSearch, SpaceTreeBuilder};

// In this example, we generate a random array of 10000 points in a 20-dimensional Euclidean space.
// The builder partitions the array in place, so every node of the tree can address its points as a
// contiguous range of rows. The two index maps of the tree translate between the original row order
// and the reordered one.
fn plain() {
    let mut rng = oorandom::Rand64::new(0);
    let mut data = Array::from_shape_simple_fn((10000, 20), || rng.rand_float());
    let tree = SpaceTreeBuilder::new().leaf_size(30).build(&mut data);
    let search = NeighbourSearch::new(&tree, data.view());

    // Search 10 nearest neighbours for query.
    let query = Array1::from_shape_simple_fn(20, || rng.rand_float());
    let result = search.search(query.view(), 10);

    // Map the winner back to its row number in the original array.
    let nearest = result[0];
    println!(
        "nearest neighbour: row {} (squared distance {})",
        tree.old_from_new()[nearest.index()],
        nearest.dist()
    );

    // Search 10 nearest neighbours for 100 query points in parallel.
    let queries = Array2::from_shape_simple_fn((100, 20), || rng.rand_float());
    let _ = search.search2(queries.view(), 10);
}

// Coordinates on a torus: every axis wraps around after one unit. The bounds fold their distance
// computations across the box edges, while the data itself stays untouched.
fn periodic() {
    let mut rng = oorandom::Rand64::new(0);
    let mut data = Array::from_shape_simple_fn((1000, 3), || rng.rand_float());
    let tree = SpaceTreeBuilder::new()
        .leaf_size(10)
        .build_periodic(&mut data, array![1., 1., 1.]);
    let search = NeighbourSearch::new(&tree, data.view());

    let query = array![0.01, 0.5, 0.99];
    let _ = search.search(query.view(), 5);
}

fn main() {
    plain();
    periodic();
}
