//! Services built on the estimation domain.
//!
//! This module contains:
//! - ConfigRegistry: Named, process-wide points configurations
//! - render: Table and JSON output of a mapping

mod registry;
pub mod render;

pub use registry::ConfigRegistry;
pub use render::{render_labels, render_mapping, OutputFormat};
