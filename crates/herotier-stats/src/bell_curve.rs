//! Bell-curve rescaling of raw scores.
//!
//! A raw score is converted to a z-score against the distribution it came from and then
//! rescaled so that the distribution mean lands on [`BELL_CURVE_CENTER`] and each standard
//! deviation is worth [`BELL_CURVE_SCALE`] points:
//!
//! ```text
//! z          = (raw - mean) / std_dev
//! bell_curve = 75 + 10 * z
//! ```
//!
//! # Distribution Shape
//!
//! Because the transform is a z-score, roughly half of a distribution's values land above 75
//! and half below. When the raw values are approximately normal, about 68% fall inside
//! \[65, 85\]. This is a property of the input distribution, not something the transform
//! enforces: rank-derived raw scores are uniform rather than normal, so the in-band share for
//! them is closer to 58%.
//!
//! # Degenerate Distributions
//!
//! When `std_dev` is zero every value is identical, the z-score is undefined, and the transform
//! returns exactly [`BELL_CURVE_CENTER`].

use crate::descriptive::DescriptiveStats;

/// Score assigned to the mean of a distribution.
pub const BELL_CURVE_CENTER: f32 = 75.0;

/// Points per standard deviation.
pub const BELL_CURVE_SCALE: f32 = 10.0;

/// Rescales `raw_score` against a distribution with the given mean and standard deviation.
///
/// Returns exactly [`BELL_CURVE_CENTER`] when `std_dev` is zero, whatever `raw_score` and
/// `mean` are.
///
/// # Examples
///
/// ```
/// use herotier_stats::bell_curve::bell_curve_transform;
///
/// assert_eq!(bell_curve_transform(110.0, 100.0, 10.0), 85.0);
/// assert_eq!(bell_curve_transform(90.0, 100.0, 10.0), 65.0);
/// assert_eq!(bell_curve_transform(90.0, 100.0, 0.0), 75.0);
/// ```
#[must_use]
pub fn bell_curve_transform(raw_score: f32, mean: f32, std_dev: f32) -> f32 {
    if std_dev == 0.0 {
        return BELL_CURVE_CENTER;
    }
    let z = (raw_score - mean) / std_dev;
    BELL_CURVE_CENTER + BELL_CURVE_SCALE * z
}

/// A distribution's location and spread, ready to rescale values drawn from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BellCurve {
    pub mean: f32,
    pub std_dev: f32,
}

impl BellCurve {
    #[must_use]
    pub fn new(mean: f32, std_dev: f32) -> Self {
        Self { mean, std_dev }
    }

    /// Builds the curve for a set of values; an empty set yields a zero curve.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let (mean, std_dev) = DescriptiveStats::mean_and_std_dev(values);
        Self { mean, std_dev }
    }

    /// Z-score of `raw_score`, or `None` for a degenerate curve.
    #[must_use]
    pub fn z_score(&self, raw_score: f32) -> Option<f32> {
        (self.std_dev != 0.0).then(|| (raw_score - self.mean) / self.std_dev)
    }

    #[must_use]
    pub fn transform(&self, raw_score: f32) -> f32 {
        bell_curve_transform(raw_score, self.mean, self.std_dev)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn round2(v: f32) -> f32 {
        (v * 100.0).round() / 100.0
    }

    #[test]
    fn test_three_adjacent_scores() {
        let curve = BellCurve::from_values([98.0, 99.0, 100.0]);
        assert!((curve.mean - 99.0).abs() < 1e-5);
        assert!((curve.std_dev - (2.0_f32 / 3.0).sqrt()).abs() < 1e-5);

        // z = ±1 / sqrt(2/3) = ±1.2247
        assert_eq!(round2(curve.z_score(98.0).unwrap()), -1.22);
        assert_eq!(round2(curve.z_score(99.0).unwrap()), 0.0);
        assert_eq!(round2(curve.z_score(100.0).unwrap()), 1.22);

        assert_eq!(round2(curve.transform(98.0)), 62.75);
        assert_eq!(round2(curve.transform(99.0)), 75.0);
        assert_eq!(round2(curve.transform(100.0)), 87.25);
    }

    #[test]
    fn test_degenerate_curve() {
        let curve = BellCurve::from_values([80.0, 80.0, 80.0]);
        assert_eq!(curve.z_score(80.0), None);
        assert_eq!(curve.transform(80.0), BELL_CURVE_CENTER);
        assert_eq!(BellCurve::from_values(Vec::new()), BellCurve::new(0.0, 0.0));
    }

    // Statistical, not exact: the shares below hold for a symmetric, roughly normal sample.
    #[test]
    fn test_distribution_shape_for_normal_like_sample() {
        // Binomial(10, 0.5) frequencies approximate a normal distribution.
        let weights = [1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1];
        let values = weights
            .iter()
            .enumerate()
            .flat_map(|(value, &count)| std::iter::repeat_n(value as f32, count))
            .collect::<Vec<_>>();
        let curve = BellCurve::from_values(values.iter().copied());
        let scores = values.iter().map(|&v| curve.transform(v)).collect::<Vec<_>>();

        let above = scores.iter().filter(|&&s| s > 75.0).count();
        let below = scores.iter().filter(|&&s| s < 75.0).count();
        assert_eq!(above, below);

        let in_band = scores.iter().filter(|&&s| (65.0..=85.0).contains(&s)).count();
        let share = in_band as f32 / scores.len() as f32;
        assert!((0.6..=0.9).contains(&share), "in-band share {share}");
    }

    proptest! {
        #[test]
        fn zero_std_dev_is_always_center(raw in -1000.0_f32..1000.0, mean in -1000.0_f32..1000.0) {
            prop_assert_eq!(bell_curve_transform(raw, mean, 0.0), BELL_CURVE_CENTER);
        }

        #[test]
        fn mean_maps_to_center(mean in 50.0_f32..100.0, std_dev in 0.1_f32..20.0) {
            prop_assert!((bell_curve_transform(mean, mean, std_dev) - BELL_CURVE_CENTER).abs() < 1e-3);
        }
    }
}
