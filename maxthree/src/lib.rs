//! MaxThree Library
//!
//! Finds the largest of three integers with a fixed nested-comparison policy
//! and renders the two-line report printed by the `maxthree` binary.

pub mod report;
pub mod triple;

pub use report::Report;
pub use triple::{Position, Triple, largest_of};

/// Dataset evaluated when the binary is invoked without operands.
pub const SAMPLE: [i64; 3] = [56, 92, 37];
