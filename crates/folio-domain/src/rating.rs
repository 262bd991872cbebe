//! Rating models

/// Strategy for collapsing raw star ratings into one weighted rating.
///
/// The production pipeline considers review counts, backtracks associations
/// between reviewers and authors to identify shills, examines order history
/// for verified purchases, and blends with a root-mean-square pass. None of
/// that lives in this crate; real implementations plug in behind this trait.
pub trait RatingModel {
    /// The weighted rating, or `None` when no ratings have been left.
    fn weighted_rating(&self, ratings: &[u8]) -> Option<f64>;
}

/// Default model: the arithmetic mean of the raw ratings.
///
/// Rating values are assumed pre-validated (1-5); no range check happens
/// here.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeanRating;

impl RatingModel for MeanRating {
    fn weighted_rating(&self, ratings: &[u8]) -> Option<f64> {
        if ratings.is_empty() {
            return None;
        }
        let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
        Some(f64::from(sum) / ratings.len() as f64)
    }
}
