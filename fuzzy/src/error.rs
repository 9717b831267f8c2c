use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FuzzyError {
    /// The aggregated output membership has zero area, so the centroid is
    /// undefined. Unreachable for inputs clipped to their universes; hitting
    /// it means the rule base no longer covers the input space.
    #[error("no rule fired: aggregated output membership has zero area")]
    EmptyAggregation,
}
