//! # dc-core
//!
//! Core types, input validation, and error handling for distcalc.
//!
//! This crate provides:
//! - The common error type
//! - Validated query types for each distribution family
//! - The evaluation result shared by evaluators and renderers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod query;
pub mod types;

pub use error::{Error, Result};
pub use query::{BinomialQuery, MAX_TRIALS, NormalQuery};
pub use types::{DistributionFamily, EVALUATION_SCHEMA_VERSION, EvaluationResult, SeriesPoint};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
