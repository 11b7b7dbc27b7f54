//! Probability building blocks for distcalc.
//!
//! - Normal density and cumulative distribution
//! - Binomial probability mass (computed in log space)
//! - evenly spaced sampling grids for plotting

pub mod binomial;
pub mod math;
pub mod normal;
