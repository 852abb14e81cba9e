//! Family/style name classification
//!
//! A raw name goes through [`separator`] (dictionary words get boundary
//! markers), [`tokenizer`], [`boundary`] (where the trailing style run
//! starts), then [`case`] and [`metrics`] for the final spelling and the
//! inferred weight, width and selection flags. [`classifier::classify`] runs
//! the whole pipeline.

pub mod boundary;
pub mod case;
pub mod classifier;
pub mod metrics;
pub mod separator;
pub mod tokenizer;

pub use classifier::{classify, ClassifyOptions};
