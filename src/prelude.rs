//! Exports the pruning algorithms, the tree, and the traits
//! needed to run them.
//! 
pub use crate::pruner::{
    // Pruner trait
    Pruner,
    PruneError,


    // Validation based pruning
    ReducedErrorPruner,
    CostBasedPruner,
    ErrorComplexityPruner,


    // Estimate based pruning
    MinimumErrorPruner,
    BackedUpEstimate,
};


pub use crate::tree::{
    BinaryTree,
    Node,
    LeftRight,
    TreeError,
};


pub use crate::sample::{
    Sample,
    SampleError,
};


pub use crate::population::{
    PopulationMatrix,
    LeafAccounting,
};


pub use crate::classifier::Classifier;


pub use crate::metric::{
    Metric,
    ZeroOneLoss,
    CostBasedLoss,
    CostTable,
    ClassCost,
};


pub use crate::evaluation::evaluate;


pub use crate::model::{
    TreeModel,
    TreeInducer,
};
