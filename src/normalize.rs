//! Indicator Normalization
//!
//! Rescales one raw indicator column across the full entity population into
//! a comparable 0-100 scale, honoring per-indicator polarity.

/// Direction in which a raw indicator is "better"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

impl Polarity {
    /// Parse a polarity token (case-insensitive, trimmed; hyphens and spaces
    /// are interchangeable)
    ///
    /// Returns `None` for unrecognized tokens. Callers default those to
    /// `HigherIsBetter` and count them as a data-quality diagnostic.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().replace('-', " ").as_str() {
            "lower is better" => Some(Polarity::LowerIsBetter),
            "higher is better" => Some(Polarity::HigherIsBetter),
            _ => None,
        }
    }
}

/// Min-max normalize one indicator column to [0, 100]
///
/// Algorithm:
/// 1. `min`/`max` are taken over the present values of the whole population.
/// 2. Higher-is-better: `(v - min) / (max - min) * 100`.
/// 3. Lower-is-better: `100 - ((v - min) / (max - min) * 100)`.
/// 4. Zero variance (`max == min`, including a single present value): every
///    present row gets exactly 50.0 under either polarity.
///
/// Output is aligned to the input: an absent source value stays absent, it
/// never defaults to 0 or 50. Non-finite source values count as absent.
pub fn normalize_indicator(values: &[Option<f64>], polarity: Polarity) -> Vec<Option<f64>> {
    let present: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect();

    if present.is_empty() {
        return vec![None; values.len()];
    }

    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    values
        .iter()
        .map(|opt| match *opt {
            Some(v) if v.is_finite() => {
                if range == 0.0 {
                    return Some(50.0);
                }
                let scaled = (v - min) / range * 100.0;
                match polarity {
                    Polarity::HigherIsBetter => Some(scaled),
                    Polarity::LowerIsBetter => Some(100.0 - scaled),
                }
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_higher_is_better_maps_min_to_0_and_max_to_100() {
        let values = vec![Some(10.0), Some(20.0), Some(30.0)];
        let normalized = normalize_indicator(&values, Polarity::HigherIsBetter);

        assert_relative_eq!(normalized[0].unwrap(), 0.0, epsilon = 0.0001);
        assert_relative_eq!(normalized[1].unwrap(), 50.0, epsilon = 0.0001);
        assert_relative_eq!(normalized[2].unwrap(), 100.0, epsilon = 0.0001);
    }

    #[test]
    fn test_lower_is_better_reflects_the_scale() {
        let values = vec![Some(10.0), Some(20.0), Some(30.0)];
        let normalized = normalize_indicator(&values, Polarity::LowerIsBetter);

        assert_relative_eq!(normalized[0].unwrap(), 100.0, epsilon = 0.0001);
        assert_relative_eq!(normalized[1].unwrap(), 50.0, epsilon = 0.0001);
        assert_relative_eq!(normalized[2].unwrap(), 0.0, epsilon = 0.0001);
    }

    #[test]
    fn test_values_stay_within_0_100() {
        let values = vec![Some(3.7), Some(-12.5), Some(88.1), Some(0.0), Some(41.9)];

        for polarity in [Polarity::HigherIsBetter, Polarity::LowerIsBetter] {
            for v in normalize_indicator(&values, polarity).into_iter().flatten() {
                assert!((0.0..=100.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_zero_variance_gives_neutral_50_under_both_polarities() {
        let values = vec![Some(5.0), Some(5.0), Some(5.0)];

        for polarity in [Polarity::HigherIsBetter, Polarity::LowerIsBetter] {
            let normalized = normalize_indicator(&values, polarity);
            for v in &normalized {
                assert_eq!(*v, Some(50.0));
            }
        }
    }

    #[test]
    fn test_single_present_value_is_neutral() {
        let values = vec![None, Some(42.0), None];
        let normalized = normalize_indicator(&values, Polarity::HigherIsBetter);
        assert_eq!(normalized, vec![None, Some(50.0), None]);
    }

    #[test]
    fn test_absent_values_stay_absent() {
        let values = vec![Some(10.0), None, Some(30.0)];
        let normalized = normalize_indicator(&values, Polarity::HigherIsBetter);

        assert_relative_eq!(normalized[0].unwrap(), 0.0, epsilon = 0.0001);
        assert_eq!(normalized[1], None);
        assert_relative_eq!(normalized[2].unwrap(), 100.0, epsilon = 0.0001);
    }

    #[test]
    fn test_all_absent_column() {
        let values = vec![None, None];
        let normalized = normalize_indicator(&values, Polarity::LowerIsBetter);
        assert_eq!(normalized, vec![None, None]);
    }

    #[test]
    fn test_non_finite_values_count_as_absent() {
        let values = vec![Some(10.0), Some(f64::NAN), Some(30.0), Some(f64::INFINITY)];
        let normalized = normalize_indicator(&values, Polarity::HigherIsBetter);

        // NaN/inf neither distort the range nor receive a score
        assert_relative_eq!(normalized[0].unwrap(), 0.0, epsilon = 0.0001);
        assert_eq!(normalized[1], None);
        assert_relative_eq!(normalized[2].unwrap(), 100.0, epsilon = 0.0001);
        assert_eq!(normalized[3], None);
    }

    #[test]
    fn test_polarity_parsing() {
        assert_eq!(Polarity::parse("lower is better"), Some(Polarity::LowerIsBetter));
        assert_eq!(Polarity::parse("  Lower Is Better "), Some(Polarity::LowerIsBetter));
        assert_eq!(Polarity::parse("lower-is-better"), Some(Polarity::LowerIsBetter));
        assert_eq!(Polarity::parse("HIGHER IS BETTER"), Some(Polarity::HigherIsBetter));
        assert_eq!(Polarity::parse("higher-is-better"), Some(Polarity::HigherIsBetter));
        assert_eq!(Polarity::parse("bigger"), None);
        assert_eq!(Polarity::parse(""), None);
    }
}
