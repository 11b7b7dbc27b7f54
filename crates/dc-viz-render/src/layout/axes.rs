/// Largest `value / step` for which round tick positions are generated.
const MAX_TICK_INDEX: f64 = 1e9;

/// One labelled major tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Linear axis: data range, major/minor ticks and a title.
#[derive(Debug, Clone)]
pub struct Axis {
    pub lo: f64,
    pub hi: f64,
    pub label: String,
    pub major: Vec<Tick>,
    pub minor: Vec<f64>,
}

impl Axis {
    /// Axis covering `[lo, hi]`, widened outward to round tick values.
    pub fn linear(lo: f64, hi: f64, target_ticks: usize) -> Self {
        Self::build(lo, hi, target_ticks, 0.0)
    }

    /// Axis for counts: like [`Axis::linear`] but ticks never fall between
    /// whole numbers.
    pub fn counts(lo: f64, hi: f64, target_ticks: usize) -> Self {
        Self::build(lo, hi, target_ticks, 1.0)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value onto the pixel span `[px_lo, px_hi]`.
    pub fn project(&self, value: f64, px_lo: f64, px_hi: f64) -> f64 {
        px_lo + (value - self.lo) / (self.hi - self.lo) * (px_hi - px_lo)
    }

    fn build(lo: f64, hi: f64, target_ticks: usize, min_step: f64) -> Self {
        let (lo, hi) = if hi - lo > 1e-12 * hi.abs().max(lo.abs()) {
            (lo, hi)
        } else {
            let pad = min_step.max(0.5 * lo.abs().max(1.0));
            (lo - pad, hi + pad)
        };
        let step = round_step((hi - lo) / target_ticks.max(2) as f64).max(min_step);
        if (lo / step).abs().max((hi / step).abs()) > MAX_TICK_INDEX {
            // Far from zero relative to the span: label the ends only.
            let major = [lo, hi].map(|value| Tick { value, label: tick_label(value, hi - lo) });
            return Self { lo, hi, label: String::new(), major: major.to_vec(), minor: Vec::new() };
        }
        let first = (lo / step).floor() as i64;
        let last = (hi / step).ceil() as i64;

        let major = (first..=last)
            .map(|k| {
                let value = k as f64 * step;
                Tick { value, label: tick_label(value, step) }
            })
            .collect();

        let parts = minor_divisions(step);
        let minor_step = step / parts as f64;
        let minor = (first * parts..last * parts)
            .filter(|k| k % parts != 0)
            .map(|k| k as f64 * minor_step)
            .collect();

        Self { lo: first as f64 * step, hi: last as f64 * step, label: String::new(), major, minor }
    }
}

/// Round `raw` to 1, 2 or 5 times a power of ten (geometric midpoints).
fn round_step(raw: f64) -> f64 {
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let mantissa = raw / magnitude;
    let nice = match mantissa {
        m if m < 2f64.sqrt() => 1.0,
        m if m < 10f64.sqrt() => 2.0,
        m if m < 50f64.sqrt() => 5.0,
        _ => 10.0,
    };
    nice * magnitude
}

fn minor_divisions(step: f64) -> i64 {
    let mantissa = step / 10f64.powi(step.log10().floor() as i32);
    if (mantissa - 2.0).abs() < 1e-9 { 4 } else { 5 }
}

fn tick_label(value: f64, step: f64) -> String {
    let value = if value.abs() < step * 1e-6 { 0.0 } else { value };
    if step < 1e-4 || step >= 1e9 || value.abs() >= 1e9 {
        if value == 0.0 {
            return "0".into();
        }
        let digits = ((value.abs().log10() + 1e-9).floor() - (step.log10() + 1e-9).floor())
            .clamp(0.0, 15.0) as usize;
        return format!("{value:.digits$e}");
    }
    let decimals = (-(step.log10() + 1e-9).floor()).max(0.0) as usize;
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(ax: &Axis) -> Vec<&str> {
        ax.major.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn linear_covers_data() {
        let ax = Axis::linear(0.0, 10.0, 5);
        assert!(ax.lo <= 0.0 && ax.hi >= 10.0);
        assert_eq!(labels(&ax), ["0", "2", "4", "6", "8", "10"]);
    }

    #[test]
    fn project_is_linear() {
        let ax = Axis::linear(0.0, 100.0, 5);
        assert!((ax.project(50.0, 0.0, 500.0) - 250.0).abs() < 1e-9);
        // Inverted pixel span, as used for y.
        assert!((ax.project(ax.hi, 300.0, 20.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn counts_have_whole_ticks() {
        let ax = Axis::counts(-0.5, 3.5, 8);
        assert!(ax.lo <= -0.5 && ax.hi >= 3.5);
        for t in &ax.major {
            assert_eq!(t.value.fract(), 0.0);
            assert!(!t.label.contains('.'));
        }
        assert!(labels(&ax).contains(&"0"));
    }

    #[test]
    fn degenerate_range_is_widened() {
        let ax = Axis::linear(2.0, 2.0, 5);
        assert!(ax.lo < 2.0 && ax.hi > 2.0);
    }

    #[test]
    fn density_scale_labels() {
        let ax = Axis::linear(0.0, 0.43, 5);
        assert_eq!(labels(&ax), ["0.0", "0.1", "0.2", "0.3", "0.4", "0.5"]);
    }

    #[test]
    fn no_negative_zero() {
        let ax = Axis::linear(-4.0, 4.0, 7);
        assert!(labels(&ax).contains(&"0"));
        assert!(!labels(&ax).iter().any(|l| *l == "-0"));
    }

    #[test]
    fn step_rounding() {
        for (raw, nice) in [(3.2, 5.0), (2.9, 2.0), (0.7, 0.5), (12.0, 10.0), (1.2, 1.0)] {
            assert!((round_step(raw) - nice).abs() < 1e-12, "{raw} -> {}", round_step(raw));
        }
    }

    #[test]
    fn extreme_scales_use_exponents() {
        let tiny = Axis::linear(-4e-300, 4e-300, 7);
        assert!(labels(&tiny).contains(&"0"));
        assert!(labels(&tiny).iter().all(|l| l.len() <= 10), "{:?}", labels(&tiny));
        assert!(labels(&tiny).iter().any(|l| l.ends_with("e-300")), "{:?}", labels(&tiny));

        let huge = Axis::linear(0.0, 4e307, 5);
        assert!(labels(&huge).iter().all(|l| l.len() <= 10), "{:?}", labels(&huge));
    }

    #[test]
    fn narrow_span_far_from_zero_labels_ends() {
        let ax = Axis::linear(1e20, 1e20 + 1e10, 5);
        assert_eq!(ax.major.len(), 2);
        assert!(ax.minor.is_empty());
        assert!((ax.project(ax.lo, 0.0, 100.0)).abs() < 1e-9);
        assert!(labels(&ax).iter().all(|l| l.contains('e')), "{:?}", labels(&ax));
    }

    #[test]
    fn minor_ticks_skip_majors() {
        let ax = Axis::linear(0.0, 1.0, 5);
        for m in &ax.minor {
            assert!(ax.major.iter().all(|t| (t.value - m).abs() > 1e-9));
        }
        assert!(!ax.minor.is_empty());
    }
}
