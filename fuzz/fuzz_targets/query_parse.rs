#![no_main]

use dc_core::{BinomialQuery, NormalQuery};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let fields: Vec<&str> = text.split('\n').collect();

    if selector & 1 == 0 {
        if let [mean, stddev, lower, upper, ..] = fields[..] {
            if let Ok(q) = NormalQuery::parse(mean, stddev, lower, upper) {
                assert!(q.stddev() > 0.0);
                assert!(q.lower() <= q.upper());
            }
        }
    } else if let [trials, p, x, ..] = fields[..] {
        if let Ok(q) = BinomialQuery::parse(trials, p, x) {
            assert!((0.0..=1.0).contains(&q.success_prob()));
            assert!(q.target_count() <= q.trials());
        }
    }
});
