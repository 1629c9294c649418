//! Size-to-points mapping and the built-in Jira configuration.
//!
//! A [`PointsMapping`] holds one positive point value per [`SizeLabel`],
//! indexed by the label's ordinal, so it is total over the declared labels
//! by construction. Values strictly increase with label size.

use super::SizeLabel;
use crate::error::{PointsError, PointsResult};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Stable identifier of the built-in mapping
pub const JIRA_CONFIG_NAME: &str = "Jira Config";

/// Built-in t-shirt size to Jira story point mapping.
///
/// XS=1, S=3, M=5, L=13, XL=21. Evaluated at compile time and never
/// mutated; it lives for the whole process.
pub static JIRA_CONFIG: PointsMapping = PointsMapping::new(JIRA_CONFIG_NAME, [1, 3, 5, 13, 21]);

/// A positive story point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(NonZeroU32);

impl Points {
    /// Create a point value, `None` for zero
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Get the raw value
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Points> for u32 {
    fn from(points: Points) -> Self {
        points.get()
    }
}

/// Immutable lookup from size label to points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsMapping {
    name: &'static str,
    points: [Points; SizeLabel::COUNT],
}

/// Reason a raw table is not a valid mapping
const fn check_values(values: &[u32; SizeLabel::COUNT]) -> Option<&'static str> {
    let mut i = 0;
    while i < SizeLabel::COUNT {
        if values[i] == 0 {
            return Some("point values must be greater than zero");
        }
        if i > 0 && values[i] <= values[i - 1] {
            return Some("point values must strictly increase with size");
        }
        i += 1;
    }
    None
}

const fn const_points(value: u32) -> Points {
    match Points::new(value) {
        Some(points) => points,
        None => panic!("point values must be greater than zero"),
    }
}

impl PointsMapping {
    /// Build a mapping in const context.
    ///
    /// `values` are given in `SizeLabel::ALL` order. An invalid table fails
    /// const evaluation when used in a `static`.
    ///
    /// # Panics
    ///
    /// Panics if a value is zero or the values do not strictly increase.
    /// Use [`PointsMapping::try_new`] for tables only known at runtime.
    pub const fn new(name: &'static str, values: [u32; SizeLabel::COUNT]) -> Self {
        if check_values(&values).is_some() {
            panic!("invalid points mapping");
        }
        Self {
            name,
            points: [
                const_points(values[0]),
                const_points(values[1]),
                const_points(values[2]),
                const_points(values[3]),
                const_points(values[4]),
            ],
        }
    }

    /// Build a mapping at runtime, rejecting invalid tables
    pub fn try_new(name: &'static str, values: [u32; SizeLabel::COUNT]) -> PointsResult<Self> {
        if let Some(reason) = check_values(&values) {
            return Err(PointsError::InvalidMapping(format!(
                "{}: {} (got {:?})",
                name, reason, values
            )));
        }
        Ok(Self::new(name, values))
    }

    /// Identifier this mapping is registered under
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Points for a typed label
    pub fn points_for(&self, label: SizeLabel) -> Points {
        self.points[label.ordinal()]
    }

    /// Points for a label string; unknown labels are an error, never a default
    pub fn lookup(&self, label: &str) -> PointsResult<Points> {
        match SizeLabel::parse(label) {
            Ok(size) => {
                let points = self.points_for(size);
                tracing::trace!(mapping = self.name, label, points = points.get(), "lookup");
                Ok(points)
            }
            Err(e) => {
                tracing::debug!(mapping = self.name, label, "unknown size label");
                Err(e)
            }
        }
    }

    /// All valid labels in ascending size order
    pub fn declared_labels(&self) -> Vec<&'static str> {
        SizeLabel::ALL.iter().map(|label| label.as_str()).collect()
    }

    /// `(label, points)` pairs in ascending size order
    pub fn entries(&self) -> impl Iterator<Item = (SizeLabel, Points)> + '_ {
        SizeLabel::ALL
            .into_iter()
            .map(move |label| (label, self.points_for(label)))
    }
}
