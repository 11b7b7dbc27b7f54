//! Validated queries for each distribution family.
//!
//! A query can only be obtained through [`NormalQuery::new`] /
//! [`BinomialQuery::new`] (typed input) or the `parse` constructors (raw text
//! as typed by a user), so every live value satisfies its domain invariants.

use serde::Serialize;

use crate::{Error, Result};

/// `sqrt(2π)`; the Normal peak density is `1 / (stddev * SQRT_2PI)`.
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Upper bound on Binomial trials, which is also the number of plotted bars.
pub const MAX_TRIALS: u64 = 10_000;

/// Parameters of a Normal interval query `P(lower <= X <= upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalQuery {
    mean: f64,
    stddev: f64,
    lower: f64,
    upper: f64,
}

impl NormalQuery {
    /// Build a query from numeric values.
    ///
    /// Fails if any value is not finite, if `stddev <= 0`, or if `lower > upper`.
    /// Also fails when the peak density or the interval width would overflow
    /// `f64`, since neither could be sampled for plotting.
    pub fn new(mean: f64, stddev: f64, lower: f64, upper: f64) -> Result<Self> {
        require_finite("mean", mean)?;
        require_finite("standard deviation", stddev)?;
        require_finite("lower bound", lower)?;
        require_finite("upper bound", upper)?;
        if stddev <= 0.0 {
            return Err(Error::Validation(format!(
                "standard deviation must be greater than zero, got {stddev}"
            )));
        }
        if !(1.0 / (stddev * SQRT_2PI)).is_finite() {
            return Err(Error::Validation(format!(
                "standard deviation is too small to evaluate, got {stddev:e}"
            )));
        }
        if lower > upper {
            return Err(Error::Validation(format!(
                "lower bound must not exceed upper bound, got lower={lower} upper={upper}"
            )));
        }
        if !(upper - lower).is_finite() {
            return Err(Error::Validation(format!(
                "interval is too wide to evaluate, got lower={lower:e} upper={upper:e}"
            )));
        }
        Ok(Self { mean, stddev, lower, upper })
    }

    /// Parse and validate raw text fields.
    pub fn parse(mean: &str, stddev: &str, lower: &str, upper: &str) -> Result<Self> {
        Self::new(
            parse_real("mean", mean)?,
            parse_real("standard deviation", stddev)?,
            parse_real("lower bound", lower)?,
            parse_real("upper bound", upper)?,
        )
    }

    /// Distribution mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Distribution standard deviation (always `> 0`).
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Lower end of the queried interval.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper end of the queried interval (always `>= lower`).
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

/// Parameters of a Binomial point query `P(X = target_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinomialQuery {
    trials: u64,
    success_prob: f64,
    target_count: u64,
}

impl BinomialQuery {
    /// Build a query from numeric values.
    ///
    /// Fails if `trials > MAX_TRIALS`, if `success_prob` is outside `[0, 1]`
    /// (or NaN), or if `target_count > trials`.
    pub fn new(trials: u64, success_prob: f64, target_count: u64) -> Result<Self> {
        if trials > MAX_TRIALS {
            return Err(Error::Validation(format!(
                "number of trials must be at most {MAX_TRIALS}, got {trials}"
            )));
        }
        if !(0.0..=1.0).contains(&success_prob) {
            return Err(Error::Validation(format!(
                "success probability must be between 0 and 1, got {success_prob}"
            )));
        }
        if target_count > trials {
            return Err(Error::Validation(format!(
                "target count must be between 0 and {trials}, got {target_count}"
            )));
        }
        Ok(Self { trials, success_prob, target_count })
    }

    /// Parse and validate raw text fields.
    ///
    /// The target count is read as a signed integer so that a negative value
    /// is reported as out of range rather than as unparseable.
    pub fn parse(trials: &str, success_prob: &str, target_count: &str) -> Result<Self> {
        let trials_raw = parse_integer("number of trials", trials)?;
        let success_prob = parse_real("success probability", success_prob)?;
        let target_raw = parse_integer("target count", target_count)?;

        let trials = u64::try_from(trials_raw).map_err(|_| {
            Error::Validation(format!(
                "number of trials must be a non-negative integer, got {trials_raw}"
            ))
        })?;
        let target_count = u64::try_from(target_raw).map_err(|_| {
            Error::Validation(format!(
                "target count must be between 0 and {trials}, got {target_raw}"
            ))
        })?;
        Self::new(trials, success_prob, target_count)
    }

    /// Number of independent trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Per-trial success probability in `[0, 1]`.
    pub fn success_prob(&self) -> f64 {
        self.success_prob
    }

    /// Queried number of successes (always `<= trials`).
    pub fn target_count(&self) -> u64 {
        self.target_count
    }
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::Validation(format!("{field} must be a finite number, got {value}")))
    }
}

fn parse_real(field: &str, raw: &str) -> Result<f64> {
    let text = raw.trim();
    text.parse::<f64>()
        .map_err(|_| Error::Validation(format!("{field} is not a number: '{text}'")))
}

fn parse_integer(field: &str, raw: &str) -> Result<i64> {
    let text = raw.trim();
    text.parse::<i64>()
        .map_err(|_| Error::Validation(format!("{field} is not an integer: '{text}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: Error) -> String {
        match err {
            Error::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn normal_parse_accepts_whitespace() {
        let q = NormalQuery::parse(" 0 ", "1", "-1.96", "1.96 ").unwrap();
        assert_eq!(q.mean(), 0.0);
        assert_eq!(q.stddev(), 1.0);
        assert_eq!(q.lower(), -1.96);
        assert_eq!(q.upper(), 1.96);
    }

    #[test]
    fn normal_rejects_non_positive_stddev() {
        for s in ["0", "-1"] {
            let msg = message(NormalQuery::parse("0", s, "-1", "1").unwrap_err());
            assert!(msg.contains("standard deviation"), "{msg}");
        }
    }

    #[test]
    fn normal_rejects_inverted_bounds() {
        let msg = message(NormalQuery::parse("0", "1", "10", "5").unwrap_err());
        assert!(msg.contains("lower bound"), "{msg}");
    }

    #[test]
    fn normal_allows_equal_bounds() {
        assert!(NormalQuery::new(0.0, 1.0, 0.5, 0.5).is_ok());
    }

    #[test]
    fn normal_rejects_non_numbers() {
        let msg = message(NormalQuery::parse("abc", "1", "0", "1").unwrap_err());
        assert!(msg.contains("mean is not a number"), "{msg}");
        let msg = message(NormalQuery::parse("0", "", "0", "1").unwrap_err());
        assert!(msg.contains("standard deviation is not a number"), "{msg}");
    }

    #[test]
    fn normal_rejects_non_finite() {
        assert!(NormalQuery::parse("nan", "1", "0", "1").is_err());
        assert!(NormalQuery::parse("0", "inf", "0", "1").is_err());
        assert!(NormalQuery::new(0.0, 1.0, f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn normal_rejects_subnormal_stddev() {
        let msg = message(NormalQuery::parse("0", "1e-320", "-1", "1").unwrap_err());
        assert!(msg.contains("too small"), "{msg}");
        assert!(NormalQuery::new(0.0, 1e-300, -1.0, 1.0).is_ok());
    }

    #[test]
    fn normal_rejects_overflowing_interval() {
        let msg = message(NormalQuery::parse("0", "1", "-1e308", "1e308").unwrap_err());
        assert!(msg.contains("too wide"), "{msg}");
        assert!(NormalQuery::new(0.0, 1.0, -1e307, 1e307).is_ok());
    }

    #[test]
    fn binomial_parse_ok() {
        let q = BinomialQuery::parse("10", "0.5", "5").unwrap();
        assert_eq!(q.trials(), 10);
        assert_eq!(q.success_prob(), 0.5);
        assert_eq!(q.target_count(), 5);
    }

    #[test]
    fn binomial_rejects_probability_out_of_range() {
        for p in ["1.5", "-0.1", "NaN"] {
            let msg = message(BinomialQuery::parse("10", p, "5").unwrap_err());
            assert!(msg.contains("success probability"), "{msg}");
        }
    }

    #[test]
    fn binomial_rejects_target_out_of_range() {
        let msg = message(BinomialQuery::parse("10", "0.5", "11").unwrap_err());
        assert!(msg.contains("target count"), "{msg}");
        let msg = message(BinomialQuery::parse("10", "0.5", "-1").unwrap_err());
        assert!(msg.contains("target count"), "{msg}");
    }

    #[test]
    fn binomial_rejects_bad_integers() {
        let msg = message(BinomialQuery::parse("5.0", "0.5", "1").unwrap_err());
        assert!(msg.contains("number of trials is not an integer"), "{msg}");
        let msg = message(BinomialQuery::parse("-3", "0.5", "0").unwrap_err());
        assert!(msg.contains("non-negative"), "{msg}");
        assert!(BinomialQuery::parse("10", "half", "5").is_err());
    }

    #[test]
    fn binomial_caps_trials() {
        let msg = message(BinomialQuery::parse("10000000000", "0.5", "1").unwrap_err());
        assert!(msg.contains("at most 10000"), "{msg}");
        assert!(BinomialQuery::new(MAX_TRIALS, 0.5, MAX_TRIALS).is_ok());
        assert!(BinomialQuery::new(MAX_TRIALS + 1, 0.5, 0).is_err());
    }

    #[test]
    fn binomial_zero_trials() {
        let q = BinomialQuery::parse("0", "0.3", "0").unwrap();
        assert_eq!(q.trials(), 0);
    }
}
