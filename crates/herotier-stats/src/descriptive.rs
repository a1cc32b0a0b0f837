/// Descriptive statistics summarizing a score distribution.
///
/// The variance is the *population* variance (divisor `N`), since a hero's map scores cover
/// every known map rather than a sample of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// Number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f32,
    /// The maximum value in the dataset.
    pub max: f32,
    /// The arithmetic mean of the dataset.
    pub mean: f32,
    /// The population variance of the dataset.
    pub variance: f32,
    /// The population standard deviation of the dataset.
    pub std_dev: f32,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from values in any order.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use herotier_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([3.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 3.0);
    /// assert_eq!(stats.mean, 2.0);
    ///
    /// assert!(DescriptiveStats::new(std::iter::empty()).is_none());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let min = values.iter().copied().min_by(f32::total_cmp)?;
        let max = values.iter().copied().max_by(f32::total_cmp)?;
        let count = values.len();
        let n = count as f32;
        let mean = values.iter().sum::<f32>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;

        Some(Self {
            count,
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// Returns `(mean, std_dev)`, or `(0.0, 0.0)` for an empty dataset.
    ///
    /// ```
    /// # use herotier_stats::descriptive::DescriptiveStats;
    /// assert_eq!(DescriptiveStats::mean_and_std_dev(std::iter::empty()), (0.0, 0.0));
    /// assert_eq!(DescriptiveStats::mean_and_std_dev([5.0, 5.0]), (5.0, 0.0));
    /// ```
    #[must_use]
    pub fn mean_and_std_dev<I>(values: I) -> (f32, f32)
    where
        I: IntoIterator<Item = f32>,
    {
        Self::new(values).map_or((0.0, 0.0), |stats| (stats.mean, stats.std_dev))
    }
}
