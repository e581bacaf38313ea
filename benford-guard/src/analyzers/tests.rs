//! Tests for the Benford analyzer.

use super::*;
use crate::logging::LogConfig;
use crate::test_fixtures::{
    benford_sample, exact_benford_values, messy_column, single_digit_sample, uniform_sample,
};

fn to_values(raw: &[i64]) -> Vec<RawValue> {
    raw.iter().copied().map(RawValue::from).collect()
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;

    #[test]
    fn test_mixed_digit_scenario() {
        let values = to_values(&[
            111, 112, 113, 121, 131, 211, 311, 411, 511, 611, 711, 811, 911,
        ]);
        let result = analyze(&values).unwrap();

        assert_eq!(result.total, 13);
        assert_eq!(result.excluded, 0);
        assert_eq!(
            result.digit_counts.as_array(),
            &[5, 1, 1, 1, 1, 1, 1, 1, 1]
        );
        assert_close(result.observed[0], 5.0 / 13.0, 1e-15);
        for frequency in &result.observed[1..] {
            assert_close(*frequency, 1.0 / 13.0, 1e-15);
        }

        // Reference value computed term by term from the frequencies above.
        let mut squared = 0.0;
        for (i, expected) in EXPECTED_DISTRIBUTION.iter().enumerate() {
            let observed = if i == 0 { 5.0 / 13.0 } else { 1.0 / 13.0 };
            squared += (observed - expected) * (observed - expected);
        }
        let expected_sum: f64 = EXPECTED_DISTRIBUTION.iter().sum();
        let reference = (squared / (expected_sum * expected_sum)).sqrt();

        assert_close(result.statistic, reference, 1e-12);
        assert_close(result.statistic, 0.147_008, 1e-6);
        assert_eq!(result.conformity, Conformity::Acceptable);
        assert_eq!(result.interpretation(), "acceptable with minor discrepancies");
    }

    #[test]
    fn test_zero_excluded_and_exact_distribution() {
        let mut values = exact_benford_values();
        values.insert(17, RawValue::Integer(0));

        let result = analyze(&values).unwrap();
        assert_eq!(result.excluded, 1);
        assert_eq!(result.total, 1000);
        assert_eq!(result.observed, EXPECTED_DISTRIBUTION);
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.conformity, Conformity::High);
    }

    #[test]
    fn test_zero_plus_nine_values() {
        let values = to_values(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let result = analyze(&values).unwrap();
        assert_eq!(result.excluded, 1);
        assert_eq!(result.total, 9);
        assert_eq!(result.digit_counts.total(), result.total);
        assert!(result.has_exclusions());
    }

    #[test]
    fn test_empty_input() {
        let err = analyze(&[]).unwrap_err();
        assert_eq!(err, AnalyzerError::EmptyInput { excluded: 0 });
    }

    #[test]
    fn test_all_values_excluded() {
        let values = vec![
            RawValue::Integer(0),
            RawValue::Missing,
            RawValue::from("abc"),
        ];
        let err = analyze(&values).unwrap_err();
        assert_eq!(err, AnalyzerError::empty_input(3));
    }

    #[test]
    fn test_messy_column() {
        let result = BenfordAnalyzer::new()
            .for_column("amount")
            .analyze(&messy_column())
            .unwrap();
        assert_eq!(result.column.as_deref(), Some("amount"));
        assert_eq!(result.total, 6);
        assert_eq!(result.excluded, 6);
        assert_eq!(result.digit_counts.as_array(), &[2, 1, 1, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_frequencies_sum_to_one() {
        let result = analyze(&uniform_sample(1234)).unwrap();
        let sum: f64 = result.observed.iter().sum();
        assert_close(sum, 1.0, 1e-12);
    }
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Conformity::classify(0.0), Conformity::High);
        assert_eq!(Conformity::classify(0.009_999), Conformity::High);
        assert_eq!(Conformity::classify(0.01), Conformity::Acceptable);
        assert_eq!(Conformity::classify(0.199_999), Conformity::Acceptable);
        assert_eq!(Conformity::classify(0.2), Conformity::Significant);
        assert_eq!(Conformity::classify(3.0), Conformity::Significant);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Conformity::High.label(), "high conformity");
        assert_eq!(
            Conformity::Acceptable.label(),
            "acceptable with minor discrepancies"
        );
        assert_eq!(Conformity::Significant.label(), "significant deviation");
        assert_eq!(Conformity::Significant.to_string(), "significant deviation");
        assert!(Conformity::High
            .description()
            .contains("high level of conformity"));
    }

    #[test]
    fn test_conforming_sample() {
        let result = analyze(&benford_sample(9000)).unwrap();
        assert!(result.statistic < HIGH_CONFORMITY_THRESHOLD);
        assert_eq!(result.conformity, Conformity::High);
        assert!(result.digits_outside_range().is_empty());
    }

    #[test]
    fn test_uniform_sample_deviates() {
        let result = analyze(&uniform_sample(900)).unwrap();
        assert_close(result.statistic, 0.233_047, 1e-6);
        assert_eq!(result.conformity, Conformity::Significant);

        let outside: Vec<u8> = result
            .digits_outside_range()
            .into_iter()
            .map(LeadingDigit::get)
            .collect();
        assert!(outside.contains(&1));
        assert!(outside.contains(&9));
    }

    #[test]
    fn test_single_digit_sample() {
        let result = analyze(&single_digit_sample(1, 50)).unwrap();
        assert_eq!(result.observed[0], 1.0);
        assert_close(result.statistic, 0.750_614, 1e-6);
        assert_eq!(result.conformity, Conformity::Significant);
    }

    #[test]
    fn test_acceptable_range_band() {
        let band = AcceptableRange::benford();
        for (i, expected) in EXPECTED_DISTRIBUTION.iter().enumerate() {
            assert_close(band.low[i], expected * 0.8, 1e-15);
            assert_close(band.high[i], expected * 1.2, 1e-15);
        }
        let one = LeadingDigit::new(1).unwrap();
        assert!(band.contains(one, 0.30));
        assert!(!band.contains(one, 0.20));
        assert!(!band.contains(one, 0.40));

        // The band does not depend on the data.
        let a = analyze(&uniform_sample(90)).unwrap();
        let b = analyze(&benford_sample(90)).unwrap();
        assert_eq!(a.acceptable_range, b.acceptable_range);
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn test_state_merge_matches_single_pass() {
        let analyzer = BenfordAnalyzer::new();
        let values = messy_column()
            .into_iter()
            .chain(benford_sample(200))
            .collect::<Vec<_>>();

        let whole = analyzer.analyze(&values).unwrap();

        let states = values
            .chunks(7)
            .map(|chunk| analyzer.compute_state_from_values(chunk))
            .collect::<Vec<_>>();
        let merged = analyzer.merge_states(states).unwrap();
        let chunked = analyzer.compute_metric_from_state(&merged).unwrap();

        assert_eq!(whole, chunked);
    }

    #[test]
    fn test_state_merge_overflow() {
        let full = BenfordState {
            digit_counts: DigitCount::from_counts([u64::MAX, 0, 0, 0, 0, 0, 0, 0, 0]),
            excluded_count: 0,
        };
        let one = BenfordState {
            digit_counts: DigitCount::from_counts([1, 0, 0, 0, 0, 0, 0, 0, 0]),
            excluded_count: 0,
        };
        assert!(matches!(
            BenfordState::merge(vec![full, one]),
            Err(AnalyzerError::StateMerge(_))
        ));
    }

    #[test]
    fn test_empty_state() {
        let state = BenfordState::default();
        assert!(state.is_empty());
        assert!(BenfordState::merge(vec![]).unwrap().is_empty());

        let mut state = BenfordState::default();
        assert!(state.observe(&RawValue::Integer(0)).is_err());
        assert!(!state.is_empty());
        assert_eq!(state.total(), 0);
    }

    #[test]
    fn test_state_serde() {
        let analyzer = BenfordAnalyzer::new();
        let state = analyzer.compute_state_from_values(&messy_column());
        let json = serde_json::to_string(&state).unwrap();
        let restored: BenfordState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn test_analyzer_metadata() {
        let analyzer = BenfordAnalyzer::new();
        assert_eq!(analyzer.name(), "benford");
        assert_eq!(analyzer.metric_key(), "benford");
        assert!(analyzer.columns().is_empty());

        let analyzer = analyzer
            .for_column("revenue")
            .with_log_config(LogConfig::production());
        assert_eq!(analyzer.metric_key(), "benford.revenue");
        assert_eq!(analyzer.columns(), vec!["revenue"]);
        assert_eq!(analyzer.column(), Some("revenue"));
    }
}

#[cfg(test)]
mod purity_tests {
    use super::*;

    #[test]
    fn test_repeated_analysis_is_identical() {
        let values = benford_sample(2500);
        let first = analyze(&values).unwrap();
        let second = analyze(&values).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.statistic.to_bits(), second.statistic.to_bits());
    }

    #[test]
    fn test_concurrent_analyses_are_independent() {
        let analyzer = BenfordAnalyzer::new().for_column("shared");
        let datasets = vec![uniform_sample(900), benford_sample(900), messy_column()];
        let sequential: Vec<_> = datasets
            .iter()
            .map(|values| analyzer.analyze(values).unwrap())
            .collect();

        let analyzer = &analyzer;
        let concurrent: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = datasets
                .iter()
                .map(|values| scope.spawn(move || analyzer.analyze(values).unwrap()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(sequential, concurrent);
    }
}
