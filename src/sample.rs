//! Struct `Sample` represents a batch of observations
//! paired with their target labels.

// Provides sample struct.
pub(crate) mod sample_struct;


pub use sample_struct::{
    Sample,
    SampleError,
};
