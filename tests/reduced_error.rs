mod common;

use miniprune::prelude::*;


#[test]
fn perfect_prune_set_keeps_the_split() {
    let train = Sample::new(
        vec![vec![0.1], vec![0.2], vec![0.3], vec![0.9]],
        vec![0.0, 0.0, 0.0, 1.0],
    ).unwrap();
    let prune = Sample::new(vec![vec![0.2], vec![0.8]], vec![0.0, 1.0])
        .unwrap();
    let mut model = common::model(common::stump(), train, prune);

    ReducedErrorPruner::new()
        .prune(&mut model)
        .unwrap();

    assert_eq!(model.trained_tree().unwrap(), &common::stump());
}


#[test]
fn ties_prefer_the_smaller_tree() {
    let train = Sample::new(
        vec![vec![0.1], vec![0.2], vec![0.9]],
        vec![0.0, 0.0, 1.0],
    ).unwrap();
    // Both the stump and the single leaf misclassify one row.
    let prune = Sample::new(
        vec![vec![0.2], vec![0.7], vec![0.8]],
        vec![0.0, 0.0, 1.0],
    ).unwrap();
    let mut model = common::model(common::stump(), train, prune);

    ReducedErrorPruner::new()
        .prune(&mut model)
        .unwrap();

    let tree = model.trained_tree().unwrap();
    assert_eq!(tree.n_leaves(), 1);
    assert!(tree.is_leaf(0));
    assert_eq!(tree.node(0).value(), 0.0);
}


#[test]
fn useless_subtree_is_removed() {
    // The right half is all 1.0, so node 2's split does nothing.
    let train = Sample::new(
        vec![
            vec![0.25, 0.25], vec![0.25, 0.75],
            vec![0.75, 0.25], vec![0.75, 0.75], vec![0.75, 0.80],
        ],
        vec![0.0, 1.0, 1.0, 1.0, 1.0],
    ).unwrap();
    let prune = Sample::new(
        vec![vec![0.2, 0.2], vec![0.2, 0.8], vec![0.8, 0.2], vec![0.8, 0.8]],
        vec![0.0, 1.0, 1.0, 1.0],
    ).unwrap();
    let mut model = common::model(common::xor_tree(), train, prune);

    ReducedErrorPruner::new()
        .verbose(true)
        .prune(&mut model)
        .unwrap();

    let tree = model.trained_tree().unwrap();
    assert!(!tree.is_leaf(0));
    assert!(!tree.is_leaf(1));
    assert!(tree.is_leaf(2));
    assert_eq!(tree.node(2).value(), 1.0);
    assert_eq!(tree.n_leaves(), 3);
    // Pruned nodes keep their position.
    assert_eq!(tree.node(2).node_index(), 2);
}


#[test]
fn pruning_never_hurts_the_prune_set() {
    let loss = ZeroOneLoss::new();
    for seed in 0..10 {
        let train = common::noisy_xor(seed, 120, 0.3);
        let prune = common::noisy_xor(seed + 100, 60, 0.3);
        let before = evaluate(&common::xor_tree(), &prune, &loss);

        let mut model = common::model(common::xor_tree(), train, prune);
        ReducedErrorPruner::new()
            .prune(&mut model)
            .unwrap();

        let tree = model.trained_tree().unwrap();
        let after = evaluate(tree, model.prune_set().unwrap(), &loss);
        assert!(after <= before, "seed {seed}: {after} > {before}");
        assert!(tree.n_leaves() <= 4);
    }
}


#[test]
fn single_leaf_is_left_alone() {
    let train = common::noisy_xor(0, 20, 0.0);
    let prune = common::noisy_xor(1, 20, 0.0);
    let mut model = common::model(common::single_leaf(), train, prune);

    ReducedErrorPruner::new()
        .leaf_accounting(LeafAccounting::Include)
        .prune(&mut model)
        .unwrap();

    assert_eq!(model.trained_tree().unwrap(), &common::single_leaf());
}


#[test]
fn missing_parts_are_reported() {
    let pruner = ReducedErrorPruner::new();

    let mut model = TreeModel::new();
    assert_eq!(pruner.prune(&mut model), Err(PruneError::NoModel));

    let mut model = TreeModel::new().tree(common::stump());
    assert!(matches!(
        pruner.prune(&mut model),
        Err(PruneError::NoTrainingSet { .. })
    ));

    let mut model = TreeModel::new()
        .tree(common::stump())
        .train_sample(common::noisy_xor(0, 10, 0.0));
    assert!(matches!(
        pruner.prune(&mut model),
        Err(PruneError::NoPruneSet { .. })
    ));
    assert_eq!(model.trained_tree().unwrap(), &common::stump());
}


#[test]
fn error_messages_name_the_fix() {
    let mut model = TreeModel::new().tree(common::stump());
    let err = ReducedErrorPruner::new()
        .prune(&mut model)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Reduced Error Pruning"));
    assert!(message.contains("TreeModel::train_sample"));
}


#[test]
fn narrow_samples_are_rejected() {
    // The XOR tree splits on features 0 and 1.
    let narrow = Sample::new(vec![vec![0.2], vec![0.8]], vec![0.0, 1.0])
        .unwrap();

    let mut model = common::model(
        common::xor_tree(), narrow.clone(), common::xor_grid(1)
    );
    let err = ReducedErrorPruner::new()
        .prune(&mut model)
        .unwrap_err();
    assert_eq!(err, PruneError::FeatureCount { needed: 2, got: 1 });
    assert_eq!(model.trained_tree().unwrap(), &common::xor_tree());

    let mut model = common::model(
        common::xor_tree(), common::xor_grid(1), narrow
    );
    let err = ReducedErrorPruner::new()
        .prune(&mut model)
        .unwrap_err();
    assert_eq!(err, PruneError::FeatureCount { needed: 2, got: 1 });
    assert_eq!(model.trained_tree().unwrap(), &common::xor_tree());
}


#[test]
fn empty_prune_set_is_rejected() {
    let empty = Sample::new(Vec::new(), Vec::new()).unwrap();
    let mut model = common::model(
        common::xor_tree(), common::xor_grid(5), empty
    );

    let err = ReducedErrorPruner::new()
        .prune(&mut model)
        .unwrap_err();

    assert!(matches!(err, PruneError::NoPruneSet { .. }));
    assert_eq!(model.trained_tree().unwrap(), &common::xor_tree());
}
