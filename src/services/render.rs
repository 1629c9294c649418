//! Text and JSON rendering of points mappings.

use crate::domain::{PointsMapping, SizeLabel};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for rendered mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}' (expected table or json)", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct MappingDocument<'a> {
    name: &'a str,
    entries: Vec<EntryDocument>,
}

#[derive(Debug, Serialize)]
struct EntryDocument {
    label: SizeLabel,
    points: u32,
}

/// Render a mapping in the requested format
pub fn render_mapping(mapping: &PointsMapping, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(mapping)),
        OutputFormat::Json => render_json(mapping),
    }
}

fn render_table(mapping: &PointsMapping) -> String {
    let mut out = String::new();
    out.push_str(mapping.name());
    out.push('\n');
    out.push_str(&format!("{:<5} {:>6}\n", "Label", "Points"));
    for (label, points) in mapping.entries() {
        out.push_str(&format!("{:<5} {:>6}\n", label.as_str(), points.get()));
    }
    out
}

fn render_json(mapping: &PointsMapping) -> Result<String> {
    let document = MappingDocument {
        name: mapping.name(),
        entries: mapping
            .entries()
            .map(|(label, points)| EntryDocument {
                label,
                points: points.get(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// One label per line
pub fn render_labels(labels: &[&str]) -> String {
    labels.iter().map(|label| format!("{}\n", label)).collect()
}
