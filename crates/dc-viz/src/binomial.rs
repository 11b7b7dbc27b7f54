use dc_core::{
    BinomialQuery, DistributionFamily, EVALUATION_SCHEMA_VERSION, EvaluationResult, Result,
    SeriesPoint,
};
use dc_prob::binomial;

use crate::{format_number, format_probability};

/// Evaluate `P(X = target_count)` for `X ~ Binom(trials, success_prob)`.
///
/// The series covers the full support `0..=trials`; the highlight is the
/// single queried bar.
pub fn evaluate_binomial(query: &BinomialQuery) -> Result<EvaluationResult> {
    let (n, p, k) = (query.trials(), query.success_prob(), query.target_count());

    let probability = binomial::pmf(k, n, p)?;
    let series = binomial::pmf_support(n, p)?
        .into_iter()
        .enumerate()
        .map(|(x, y)| SeriesPoint::new(x as f64, y))
        .collect::<Vec<_>>();

    tracing::debug!(n, p, k, probability, support = series.len(), "binomial evaluated");

    Ok(EvaluationResult {
        schema_version: EVALUATION_SCHEMA_VERSION.to_string(),
        family: DistributionFamily::Binomial,
        probability,
        label: format!("P(X = {k}) = {}", format_probability(probability)),
        title: format!("Binomial distribution (n={n}, p={})", format_number(p)),
        series,
        highlight_series: vec![SeriesPoint::new(k as f64, probability)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn query(n: u64, p: f64, k: u64) -> BinomialQuery {
        BinomialQuery::new(n, p, k).unwrap()
    }

    #[test]
    fn ten_fair_coins_five_heads() {
        let r = evaluate_binomial(&query(10, 0.5, 5)).unwrap();
        assert_abs_diff_eq!(r.probability, 0.2461, epsilon = 5e-4);
        assert_eq!(r.label, "P(X = 5) = 0.2461");
        assert_eq!(r.title, "Binomial distribution (n=10, p=0.5)");
        assert_eq!(r.series.len(), 11);
        assert_eq!(r.highlight_series, vec![SeriesPoint::new(5.0, r.probability)]);
    }

    #[test]
    fn five_fair_coins_no_heads() {
        let r = evaluate_binomial(&query(5, 0.5, 0)).unwrap();
        assert_abs_diff_eq!(r.probability, 0.0313, epsilon = 5e-4);
        // 1/32 sits on a rounding tie at four digits.
        assert!(r.label.starts_with("P(X = 0) = 0.031"), "{}", r.label);
    }

    #[test]
    fn series_sums_to_one() {
        for &(n, p) in &[(1_u64, 0.2), (25, 0.5), (60, 0.01), (400, 0.75)] {
            let r = evaluate_binomial(&query(n, p, 0)).unwrap();
            let total: f64 = r.series.iter().map(|pt| pt.y).sum();
            assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
            for (i, pt) in r.series.iter().enumerate() {
                assert_eq!(pt.x, i as f64);
            }
        }
    }

    #[test]
    fn zero_trials_has_single_point() {
        let r = evaluate_binomial(&query(0, 0.4, 0)).unwrap();
        assert_eq!(r.series.len(), 1);
        assert_eq!(r.series[0].x, 0.0);
        assert_abs_diff_eq!(r.probability, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_success_probabilities() {
        for k in 0..=6 {
            let r0 = evaluate_binomial(&query(6, 0.0, k)).unwrap();
            assert_eq!(r0.probability, if k == 0 { 1.0 } else { 0.0 });
            let r1 = evaluate_binomial(&query(6, 1.0, k)).unwrap();
            assert_eq!(r1.probability, if k == 6 { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let q = query(30, 0.33, 12);
        let a = serde_json::to_string(&evaluate_binomial(&q).unwrap()).unwrap();
        let b = serde_json::to_string(&evaluate_binomial(&q).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
