//! Estimate provider capability.
//!
//! Planning, export and test-data tooling ask an `EstimateProvider` for a
//! label's point value instead of reading a mapping directly.

use super::{Points, PointsMapping};
use crate::error::PointsResult;

/// Something that can turn size labels into story points
pub trait EstimateProvider: Send + Sync {
    /// Identifier of the underlying configuration
    fn name(&self) -> &str;

    /// Points for a single label
    fn estimate(&self, label: &str) -> PointsResult<Points>;

    /// Labels this provider accepts, in ascending size order
    fn labels(&self) -> Vec<&'static str>;

    /// Estimate several labels, failing on the first unknown one
    fn estimate_all<'a, I>(&self, labels: I) -> PointsResult<Vec<(String, Points)>>
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        labels
            .into_iter()
            .map(|label| {
                self.estimate(label)
                    .map(|points| (label.to_string(), points))
            })
            .collect()
    }
}

impl EstimateProvider for PointsMapping {
    fn name(&self) -> &str {
        PointsMapping::name(self)
    }

    fn estimate(&self, label: &str) -> PointsResult<Points> {
        self.lookup(label)
    }

    fn labels(&self) -> Vec<&'static str> {
        self.declared_labels()
    }
}
