//! Domain entities for jira-points.
//!
//! This module contains the core estimation types:
//! - SizeLabel: A t-shirt size code
//! - Points / PointsMapping: The size-to-points lookup
//! - EstimateProvider: The capability consumers depend on

mod estimate;
mod points;
mod size;

pub use estimate::EstimateProvider;
pub use points::{Points, PointsMapping, JIRA_CONFIG, JIRA_CONFIG_NAME};
pub use size::SizeLabel;
