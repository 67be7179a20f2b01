//! Integration tests for the `fra` binary
//!
//! These tests verify JSON output, exit codes and export files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const CLAIMS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [82.1, 19.0]},
     "properties": {"claim_id": "FRA-1", "state": "Odisha", "fra_type": "IFR", "status": "approved",
                    "tribal_community": "Kondh", "claim_area_ha": 2.0, "submission_date": "2023-03-01"}},
    {"type": "Feature", "geometry": null,
     "properties": {"claim_id": "FRA-2", "state": "Odisha", "fra_type": "CFR", "status": "submitted",
                    "tribal_community": "Gond", "claim_area_ha": 3.0, "submission_date": "2023-04-01"}},
    {"type": "Feature", "geometry": null,
     "properties": {"claim_id": "FRA-3", "state": "Tripura", "fra_type": "IFR", "status": "approved",
                    "claim_area_ha": null, "submission_date": "2022-01-15"}}
  ]
}"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("claims.geojson"), CLAIMS).unwrap();
        fs::write(dir.path().join("analytics.json"), r#"{"generated": "2024-01-01"}"#).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        fra(self.dir.path(), args)
    }
}

fn fra(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fra"))
        .current_dir(dir)
        .env_remove("FRA_CLAIMS_FILE")
        .env_remove("FRA_ANALYTICS_FILE")
        .args(["--claims-file", "claims.geojson", "--analytics-file", "analytics.json"])
        .args(args)
        .output()
        .expect("Failed to execute fra")
}

fn json_stdout(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output should be valid JSON")
}

#[test]
fn test_claims_json_output() {
    let workspace = Workspace::new();
    let parsed = json_stdout(&workspace.run(&["--json", "claims", "--state", "Odisha"]));

    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["type"], "FeatureCollection");
    assert_eq!(parsed["data"]["properties"]["total_claims"], 2);
}

#[test]
fn test_invalid_bound_fails() {
    let workspace = Workspace::new();
    let output = workspace.run(&["--json", "claims", "--claim-area-min", "abc"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("claim_area_min"));
}

#[test]
fn test_missing_claim_fails() {
    let workspace = Workspace::new();
    let output = workspace.run(&["claim", "FRA-404"]);

    assert!(!output.status.success());
}

#[test]
fn test_claim_json_output() {
    let workspace = Workspace::new();
    let parsed = json_stdout(&workspace.run(&["--json", "claim", "FRA-1"]));

    assert_eq!(parsed["data"]["claim_id"], "FRA-1");
    assert_eq!(parsed["data"]["geometry"]["type"], "Point");
}

#[test]
fn test_summary_and_performance() {
    let workspace = Workspace::new();

    let summary = json_stdout(&workspace.run(&["--json", "summary", "--by", "state"]));
    assert_eq!(summary["data"]["Odisha"]["total_claims"], 2);
    assert_eq!(summary["data"]["Odisha"]["total_area_ha"], 5.0);

    let performance = json_stdout(&workspace.run(&["--json", "performance"]));
    assert_eq!(performance["data"]["approval_rate"], 66.67);
    assert_eq!(performance["data"]["pending_claims"], 1);
}

#[test]
fn test_timeline_for_year() {
    let workspace = Workspace::new();
    let parsed = json_stdout(&workspace.run(&["--json", "timeline", "--year", "2023"]));

    assert_eq!(parsed["data"]["yearly"]["2022"]["claims_submitted"], 1);
    assert_eq!(parsed["data"]["monthly"]["4"]["total_area_ha"], 3.0);
}

#[test]
fn test_export_to_file() {
    let workspace = Workspace::new();
    let target = workspace.path("export.geojson");

    let output = workspace.run(&["export", "--fra-type", "IFR", "--output", "export.geojson"]);
    assert!(output.status.success());

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(target).unwrap()).unwrap();
    assert_eq!(exported["export_info"]["total_claims"], 2);
    assert_eq!(exported["export_info"]["filters_applied"]["fra_type"], "IFR");
}

#[test]
fn test_analytics_passthrough() {
    let workspace = Workspace::new();
    let parsed = json_stdout(&workspace.run(&["analytics"]));

    assert_eq!(parsed, serde_json::json!({"generated": "2024-01-01"}));
}

#[test]
fn test_config_reports_cli_source() {
    let workspace = Workspace::new();
    let parsed = json_stdout(&workspace.run(&["--json", "config"]));

    assert_eq!(parsed["data"]["claims_file"]["value"], "claims.geojson");
    assert_eq!(parsed["data"]["claims_file"]["source"], "Cli");
}

#[test]
fn test_missing_claims_file_fails() {
    let workspace = Workspace::new();
    let output = Command::new(env!("CARGO_BIN_EXE_fra"))
        .current_dir(workspace.dir.path())
        .args(["--claims-file", "nope.geojson", "performance"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
