mod common;

use miniprune::prelude::*;


#[test]
fn aggregate_estimate_collapses_to_the_root() {
    // With the leaves left uncounted,
    // the backed-up estimate is never below the static one.
    let mut model = TreeModel::new()
        .tree(common::xor_tree())
        .train_sample(common::xor_grid(5));

    MinimumErrorPruner::new()
        .verbose(true)
        .prune(&mut model)
        .unwrap();

    let tree = model.trained_tree().unwrap();
    assert_eq!(tree.n_leaves(), 1);
    assert_eq!(tree.n_live_nodes(), 1);
    assert_eq!(tree.node(0).value(), 0.0);
}


#[test]
fn weighted_estimate_keeps_informative_splits() {
    let mut model = TreeModel::new()
        .tree(common::xor_tree())
        .train_sample(common::xor_grid(5));

    MinimumErrorPruner::new()
        .backed_up_estimate(BackedUpEstimate::Weighted)
        .leaf_accounting(LeafAccounting::Include)
        .prune(&mut model)
        .unwrap();

    assert_eq!(model.trained_tree().unwrap(), &common::xor_tree());
}


#[test]
fn weighted_estimate_removes_a_useless_split() {
    // Both leaves under node 2 see only 1.0.
    let rows = [
        [0.25, 0.25], [0.25, 0.75], [0.75, 0.25], [0.75, 0.75],
    ];
    let labels = [0.0, 1.0, 1.0, 1.0];
    let (rows, target): (Vec<_>, Vec<_>) = rows.iter()
        .zip(labels)
        .flat_map(|(x, y)| std::iter::repeat((x.to_vec(), y)).take(5))
        .unzip();
    let train = Sample::new(rows, target).unwrap();

    let mut model = TreeModel::new()
        .tree(common::xor_tree())
        .train_sample(train);

    MinimumErrorPruner::new()
        .backed_up_estimate(BackedUpEstimate::Weighted)
        .leaf_accounting(LeafAccounting::Include)
        .prune(&mut model)
        .unwrap();

    let tree = model.trained_tree().unwrap();
    assert!(!tree.is_leaf(0));
    assert!(!tree.is_leaf(1));
    assert!(tree.is_leaf(2));
    assert_eq!(tree.node(2).value(), 1.0);
    assert_eq!(tree.n_leaves(), 3);
}


#[test]
fn no_prune_set_is_needed() {
    let mut model = TreeModel::new()
        .tree(common::stump())
        .train_sample(common::noisy_xor(3, 50, 0.1));

    assert!(MinimumErrorPruner::new().prune(&mut model).is_ok());
}


#[test]
fn single_leaf_is_left_alone() {
    let mut model = TreeModel::new()
        .tree(common::single_leaf())
        .train_sample(common::noisy_xor(0, 20, 0.0));

    MinimumErrorPruner::new()
        .prune(&mut model)
        .unwrap();

    assert_eq!(model.trained_tree().unwrap(), &common::single_leaf());
}


#[test]
fn missing_training_set_is_reported() {
    let mut model = TreeModel::new().tree(common::stump());
    let err = MinimumErrorPruner::new()
        .prune(&mut model)
        .unwrap_err();

    assert_eq!(
        err,
        PruneError::NoTrainingSet { pruner: "Minimum Error Pruning".into() }
    );
    assert_eq!(model.trained_tree().unwrap(), &common::stump());
}
