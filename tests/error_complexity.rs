mod common;

use miniprune::prelude::*;


#[test]
fn leaf_counts_strictly_decrease() {
    for seed in 0..10 {
        let train = common::noisy_xor(seed, 150, 0.2);
        let prune = common::noisy_xor(seed + 300, 50, 0.2);
        let model = common::model(common::xor_tree(), train, prune);

        let sequence = ErrorComplexityPruner::new()
            .pruning_sequence(&model)
            .unwrap();

        assert_eq!(&sequence[0], model.trained_tree().unwrap());
        for pair in sequence.windows(2) {
            assert!(pair[1].n_leaves() < pair[0].n_leaves());
        }
        assert_eq!(sequence.last().unwrap().n_leaves(), 1);
    }
}


#[test]
fn sequence_stops_at_the_leaf_floor() {
    let train = common::noisy_xor(11, 150, 0.2);
    let prune = common::noisy_xor(12, 50, 0.2);
    let model = common::model(common::xor_tree(), train, prune);

    let sequence = ErrorComplexityPruner::new()
        .min_leaves(3)
        .leaf_accounting(LeafAccounting::Include)
        .pruning_sequence(&model)
        .unwrap();

    let (last, rest) = sequence.split_last().unwrap();
    assert!(last.n_leaves() <= 3);
    assert!(rest.iter().all(|tree| tree.n_leaves() > 3));
}


#[test]
fn keeps_the_tree_with_the_lowest_prune_error() {
    let loss = ZeroOneLoss::new();
    for seed in 0..5 {
        let train = common::noisy_xor(seed, 150, 0.3);
        let prune = common::noisy_xor(seed + 400, 80, 0.3);
        let mut model = common::model(common::xor_tree(), train, prune);

        let pruner = ErrorComplexityPruner::new();
        let sequence = pruner.pruning_sequence(&model).unwrap();
        pruner.prune(&mut model).unwrap();

        let prune = model.prune_set().unwrap();
        let chosen = model.trained_tree().unwrap();
        let error = evaluate(chosen, prune, &loss);

        assert!(sequence.contains(chosen));
        assert!(sequence.iter().all(|t| error <= evaluate(t, prune, &loss)));
    }
}


#[test]
fn clean_data_keeps_the_full_tree() {
    let mut model = common::model(
        common::xor_tree(), common::xor_grid(5), common::xor_grid(2)
    );

    ErrorComplexityPruner::new()
        .leaf_accounting(LeafAccounting::Include)
        .verbose(true)
        .prune(&mut model)
        .unwrap();

    assert_eq!(model.trained_tree().unwrap(), &common::xor_tree());
}


#[test]
fn ties_go_to_the_smaller_tree() {
    // Every tree in the sequence predicts 0.0 on this prune set.
    let prune = Sample::new(vec![vec![0.25, 0.25]; 4], vec![0.0; 4])
        .unwrap();
    let mut model = common::model(
        common::xor_tree(), common::xor_grid(5), prune
    );

    ErrorComplexityPruner::new()
        .prune(&mut model)
        .unwrap();

    let tree = model.trained_tree().unwrap();
    assert_eq!(tree.n_leaves(), 1);
    assert_eq!(tree.node(0).value(), 0.0);
}


#[test]
fn prune_set_is_required() {
    let mut model = TreeModel::new()
        .tree(common::xor_tree())
        .train_sample(common::xor_grid(1));

    let err = ErrorComplexityPruner::new()
        .prune(&mut model)
        .unwrap_err();

    assert!(matches!(err, PruneError::NoPruneSet { .. }));
    assert_eq!(model.trained_tree().unwrap(), &common::xor_tree());
}


#[test]
fn single_leaf_is_left_alone() {
    let train = common::noisy_xor(0, 20, 0.0);
    let prune = common::noisy_xor(1, 20, 0.0);
    let mut model = common::model(common::single_leaf(), train, prune);

    ErrorComplexityPruner::new()
        .prune(&mut model)
        .unwrap();

    assert_eq!(model.trained_tree().unwrap(), &common::single_leaf());
}


#[test]
fn empty_or_narrow_prune_set_is_rejected() {
    let empty = Sample::new(Vec::new(), Vec::new()).unwrap();
    let mut model = common::model(
        common::xor_tree(), common::xor_grid(5), empty
    );
    let err = ErrorComplexityPruner::new()
        .prune(&mut model)
        .unwrap_err();
    assert!(matches!(err, PruneError::NoPruneSet { .. }));

    let narrow = Sample::new(vec![vec![0.3]], vec![0.0]).unwrap();
    let mut model = common::model(
        common::xor_tree(), common::xor_grid(5), narrow
    );
    let err = ErrorComplexityPruner::new()
        .prune(&mut model)
        .unwrap_err();
    assert_eq!(err, PruneError::FeatureCount { needed: 2, got: 1 });
    assert_eq!(model.trained_tree().unwrap(), &common::xor_tree());
}
