//! Statistical helpers for hero scoring.
//!
//! This crate holds the small amount of statistics the scoring pipeline relies on:
//!
//! - **Descriptive statistics**: count, range, mean and population standard deviation of a
//!   hero's per-map raw scores
//! - **Bell-curve transform**: z-score normalization centered at 75 with 10 points per
//!   standard deviation
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing a score distribution
//! - [`bell_curve`]: Per-distribution z-score rescaling
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use herotier_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([98.0, 99.0, 100.0]).unwrap();
//! assert_eq!(stats.mean, 99.0);
//! ```
//!
//! ## Rescaling a raw score
//!
//! ```
//! use herotier_stats::bell_curve::bell_curve_transform;
//!
//! assert_eq!(bell_curve_transform(99.0, 99.0, 0.8), 75.0);
//! // A degenerate distribution carries no information.
//! assert_eq!(bell_curve_transform(42.0, 99.0, 0.0), 75.0);
//! ```

pub mod bell_curve;
pub mod descriptive;
