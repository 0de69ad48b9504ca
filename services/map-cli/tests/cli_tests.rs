//! Tests for the map-cli configuration, dataset source and output formats.

use std::io::Write;
use std::path::PathBuf;

use map_cli::config::{load_config, parse_config, ConfigOrigin, LogFormat, ModeName};
use map_cli::output::{format_output, OutputFormat, PREVIEW_ROWS};
use map_cli::exit_status;
use map_cli::source::{FieldNames, JsonFileSource};
use map_common::{MapError, PaletteConfig, PaletteName, RecordSource};
use renderer::{render, HeatmapParams, MapOptions, RenderMode, RenderRequest};
use tempfile::NamedTempFile;

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

fn housing_fields() -> FieldNames {
    FieldNames {
        latitude: "Latitude".to_string(),
        longitude: "Longitude".to_string(),
        value: "MedHouseVal".to_string(),
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_example_config_parses() {
    let content = std::fs::read_to_string(testdata("config.example.yaml")).unwrap();
    let config = parse_config(&content).unwrap();

    assert_eq!(config.dataset.fields, housing_fields());
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.request.mode, ModeName::Markers);
    assert_eq!(config.request.heatmap, HeatmapParams::new(12, 18, 13));
    assert_eq!(
        config.map.palette,
        PaletteConfig::Named {
            name: PaletteName::Viridis
        }
    );
    assert_eq!(config.map.markers.units.as_deref(), Some("(x100k USD)"));
}

#[test]
fn test_missing_config_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let (config, origin) = load_config(Some(&path)).unwrap();
    assert_eq!(origin, ConfigOrigin::Missing(path));
    assert_eq!(config.request.seed, 42);
}

#[test]
fn test_config_file_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "request:\n  sample_size: 3\n  mode: heatmap\n  heatmap:\n    radius: 5").unwrap();

    let (config, origin) = load_config(Some(file.path())).unwrap();
    assert!(matches!(origin, ConfigOrigin::File(_)));
    assert_eq!(config.request.sample_size, 3);
    assert_eq!(config.request.mode, ModeName::Heatmap);
    assert_eq!(config.request.heatmap, HeatmapParams::new(5, 18, 13));
}

#[test]
fn test_invalid_palette_rejected() {
    let yaml = r##"
map:
  palette:
    type: custom
    stops:
      - { value: 0.0, color: "#000000" }
"##;
    assert!(parse_config(yaml).is_err());
}

#[test]
fn test_config_comments_skip_expansion() {
    std::env::remove_var("MAP_CLI_UNSET_IN_COMMENT");
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "# dataset path comes from ${{MAP_CLI_UNSET_IN_COMMENT}}\nrequest:\n  seed: 9 # ${{MAP_CLI_UNSET_IN_COMMENT}}"
    )
    .unwrap();

    let (config, _) = load_config(Some(file.path())).unwrap();
    assert_eq!(config.request.seed, 9);
}

#[test]
fn test_unset_variable_in_value_fails() {
    std::env::remove_var("MAP_CLI_UNSET_IN_VALUE");
    let err = parse_config("dataset:\n  path: ${MAP_CLI_UNSET_IN_VALUE}").unwrap_err();
    assert!(format!("{:#}", err).contains("MAP_CLI_UNSET_IN_VALUE"));
}

// ============================================================================
// Exit status
// ============================================================================

#[test]
fn test_exit_status_by_error_kind() {
    let rejected = anyhow::Error::new(MapError::OutOfRange {
        requested: 4,
        available: 3,
    });
    assert_eq!(exit_status(&rejected), 2);

    let bad_param = anyhow::Error::new(MapError::InvalidParameter {
        param: "blur".to_string(),
        value: 0,
    });
    assert_eq!(exit_status(&bad_param), 2);

    let bad_data = anyhow::Error::new(MapError::EmptyDataset).context("Loading dataset");
    assert_eq!(exit_status(&bad_data), 3);

    assert_eq!(exit_status(&anyhow::anyhow!("config unreadable")), 1);
}

#[test]
fn test_invalid_palette_exit_status() {
    let yaml = r##"
map:
  palette:
    type: custom
    stops:
      - { value: 0.0, color: "#000000" }
      - { value: 1.0, color: "#+1+2+3" }
"##;
    let err = parse_config(yaml).unwrap_err();
    assert_eq!(exit_status(&err), 3);
}

// ============================================================================
// Dataset source
// ============================================================================

#[test]
fn test_load_column_dataset() {
    let source = JsonFileSource::new(testdata("california_sample.json"), housing_fields());
    let ds = source.load().unwrap();
    assert_eq!(ds.len(), 12);
    assert!(source.describe().contains("california_sample.json"));
}

#[test]
fn test_load_missing_file() {
    let source = JsonFileSource::new("/nonexistent/data.json", FieldNames::default());
    assert!(matches!(source.load(), Err(MapError::ParseError(_))));
}

#[test]
fn test_load_row_dataset_from_tempfile() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"latitude": 10, "longitude": 20, "value": 1}},
            {{"latitude": 11, "longitude": 21, "value": 2}},
            {{"latitude": 12, "longitude": 22, "value": 3}}]"#
    )
    .unwrap();

    let ds = JsonFileSource::new(file.path(), FieldNames::default())
        .load()
        .unwrap();
    assert_eq!(ds.len(), 3);
}

// ============================================================================
// Output
// ============================================================================

fn rendered(mode: RenderMode) -> (renderer::RenderOutput, map_common::Dataset) {
    let ds = JsonFileSource::new(testdata("california_sample.json"), housing_fields())
        .load()
        .unwrap();
    let request = RenderRequest {
        sample_size: 5,
        seed: 42,
        mode,
    };
    let out = render(&ds, &request, &MapOptions::default()).unwrap();
    (out, ds)
}

#[test]
fn test_summary_output() {
    let (out, ds) = rendered(RenderMode::Markers);
    let text = format_output(OutputFormat::Summary, &out, &ds).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["layer"], "markers");
    assert_eq!(json["primitives"], 5);
    assert_eq!(json["statistics"]["count"], 12);
    assert_eq!(json["value_range"]["max"], 4.526);
    assert_eq!(json["preview"].as_array().unwrap().len(), PREVIEW_ROWS);
}

#[test]
fn test_geojson_output() {
    let (out, ds) = rendered(RenderMode::Heatmap(HeatmapParams::default()));
    let text = format_output(OutputFormat::Geojson, &out, &ds).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"].as_array().unwrap().len(), 5);
}

#[test]
fn test_artifact_output() {
    let (out, ds) = rendered(RenderMode::Markers);
    let text = format_output(OutputFormat::Artifact, &out, &ds).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["artifact"]["layer"]["type"], "markers");
    assert_eq!(json["artifact"]["layer"]["points"].as_array().unwrap().len(), 5);
    assert_eq!(json["artifact"]["tiles"], "CartoDB positron");
    assert_eq!(json["value_range"]["min"], 0.675);
}
