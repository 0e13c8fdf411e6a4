//! This directory provides some features for research.
//! Measure the followings of each pruning algorithm
//! - Running time
//! - Tree size before and after pruning
//! - Training, prune, and test error

/// Defines [`PruneLogger`].
pub mod logger;

/// Defines [`PruneLoggerBuilder`].
pub mod logger_builder;

pub use logger::PruneLogger;
pub use logger_builder::PruneLoggerBuilder;
