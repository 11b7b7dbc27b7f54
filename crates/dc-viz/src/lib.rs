//! # dc-viz
//!
//! Distribution evaluators for distcalc.
//!
//! Each evaluator is a pure function of its validated query and returns an
//! [`EvaluationResult`]: the requested probability plus the plot-friendly
//! series a renderer needs (arrays of points, no nested state).

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Binomial point-probability evaluator.
pub mod binomial;

/// Normal interval-probability evaluator.
pub mod normal;

pub use binomial::evaluate_binomial;
pub use normal::{MAX_GRID_POINTS, NormalGrid, evaluate_normal, evaluate_normal_with};

/// Decimal digits used when formatting probabilities in labels.
pub const LABEL_DIGITS: usize = 4;

pub(crate) fn format_probability(p: f64) -> String {
    format!("{:.prec$}", p, prec = LABEL_DIGITS)
}

/// Shortest round-trip text for a parameter, switching to `1e+308` style
/// exponent notation below `1e-4` or at `1e16` and above.
pub fn format_number(x: f64) -> String {
    let magnitude = x.abs();
    if x == 0.0 || !x.is_finite() || (1e-4..1e16).contains(&magnitude) {
        return format!("{x}");
    }
    let sci = format!("{x:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => sci,
    }
}
