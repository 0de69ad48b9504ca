//! Rendering a [`RenderOutput`] for stdout.

use anyhow::{Context, Result};
use serde::Serialize;

use map_common::{Dataset, Record, ValueRange};
use renderer::{RenderOutput, ValueSummary};

/// Rows shown in the dataset preview.
pub const PREVIEW_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Full map artifact as JSON
    #[default]
    Artifact,
    /// Layer primitives as a GeoJSON FeatureCollection
    Geojson,
    /// Dataset preview, statistics and captions without primitives
    Summary,
}

/// What the summary format prints.
#[derive(Debug, Serialize)]
pub struct RenderSummary<'a> {
    pub layer: &'static str,
    pub primitives: usize,
    pub value_range: ValueRange,
    pub statistics: ValueSummary,
    pub preview: &'a [Record],
    pub caption: &'a [String],
}

pub fn format_output(format: OutputFormat, output: &RenderOutput, dataset: &Dataset) -> Result<String> {
    match format {
        OutputFormat::Artifact => {
            serde_json::to_string_pretty(output).context("Failed to serialize map artifact")
        }
        OutputFormat::Geojson => output
            .artifact
            .to_geojson_string()
            .context("Failed to serialize GeoJSON"),
        OutputFormat::Summary => {
            let summary = RenderSummary {
                layer: output.artifact.layer.kind(),
                primitives: output.artifact.layer.len(),
                value_range: output.value_range,
                statistics: ValueSummary::describe(dataset),
                preview: dataset.head(PREVIEW_ROWS),
                caption: &output.artifact.caption,
            };
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")
        }
    }
}
