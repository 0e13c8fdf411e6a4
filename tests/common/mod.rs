#![allow(dead_code)]
use miniprune::prelude::*;

use rand::prelude::*;
use rand::rngs::StdRng;


// Decision stump on feature `0`.
//
//          [0] x0 <= 0.5
//         /             \
//   [1] 0.0           [2] 1.0
//
pub fn stump() -> BinaryTree {
    let nodes = vec![
        Node::branch(0, 0, 0.5, 1, 2),
        Node::leaf(1, 0.0),
        Node::leaf(2, 1.0),
    ];
    BinaryTree::new(nodes, vec![0.0, 1.0]).unwrap()
}


// A full tree of depth 2 that computes XOR of the two features.
//
//                 [0] x0 <= 0.5
//               /               \
//     [1] x1 <= 0.5           [2] x1 <= 0.5
//       /       \               /       \
//  [3] 0.0   [4] 1.0       [5] 1.0   [6] 0.0
//
pub fn xor_tree() -> BinaryTree {
    let nodes = vec![
        Node::branch(0, 0, 0.5, 1, 2),
        Node::branch(1, 1, 0.5, 3, 4),
        Node::branch(2, 1, 0.5, 5, 6),
        Node::leaf(3, 0.0),
        Node::leaf(4, 1.0),
        Node::leaf(5, 1.0),
        Node::leaf(6, 0.0),
    ];
    BinaryTree::new(nodes, vec![0.0, 1.0]).unwrap()
}


pub fn single_leaf() -> BinaryTree {
    BinaryTree::new(vec![Node::leaf(0, 0.0)], vec![0.0, 1.0]).unwrap()
}


pub fn xor(x: &[f64]) -> f64 {
    if (x[0] <= 0.5) != (x[1] <= 0.5) { 1.0 } else { 0.0 }
}


// `copies` rows at each of the four cell centers of the XOR grid.
pub fn xor_grid(copies: usize) -> Sample {
    let centers = [[0.25, 0.25], [0.25, 0.75], [0.75, 0.25], [0.75, 0.75]];
    let rows = centers.iter()
        .flat_map(|c| std::iter::repeat(c.to_vec()).take(copies))
        .collect::<Vec<_>>();
    let target = rows.iter().map(|x| xor(x)).collect::<Vec<_>>();
    Sample::new(rows, target).unwrap()
}


// Uniform points on the unit square labeled by XOR,
// each label flipped with probability `noise`.
pub fn noisy_xor(seed: u64, n_sample: usize, noise: f64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(n_sample);
    let mut target = Vec::with_capacity(n_sample);
    for _ in 0..n_sample {
        let x = vec![rng.gen::<f64>(), rng.gen::<f64>()];
        let mut y = xor(&x);
        if rng.gen_bool(noise) { y = 1.0 - y; }
        rows.push(x);
        target.push(y);
    }
    Sample::new(rows, target).unwrap()
}


pub fn model(tree: BinaryTree, train: Sample, prune: Sample) -> TreeModel {
    TreeModel::new()
        .tree(tree)
        .train_sample(train)
        .prune_sample(prune)
}
