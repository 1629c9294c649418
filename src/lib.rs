//! jira-points: t-shirt size to Jira story point configuration
//!
//! This crate provides the read-only "Jira Config" mapping (XS=1, S=3,
//! M=5, L=13, XL=21), a registry to resolve it by name, and the
//! `EstimateProvider` capability that planning and export tooling
//! consume.

pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use config::ProjectConfig;
pub use domain::{
    EstimateProvider, Points, PointsMapping, SizeLabel, JIRA_CONFIG, JIRA_CONFIG_NAME,
};
pub use error::{AppError, PointsError, Result};
pub use services::ConfigRegistry;
