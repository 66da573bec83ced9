use clap::Parser;
use shapecalc::cli::{run, Cli};
use std::ffi::OsString;
use tempfile::tempdir;

fn run_with_config(config: &str, file_name: &str, args: &[&str]) -> (bool, String) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(file_name);
    std::fs::write(&path, config).unwrap();

    let mut argv: Vec<OsString> = vec!["shapecalc".into(), "--config".into(), path.into()];
    argv.extend(args.iter().map(OsString::from));

    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    let ok = run(&cli, &mut out).unwrap();
    (ok, String::from_utf8(out).unwrap())
}

#[test]
fn test_precision_from_toml() {
    let (ok, out) = run_with_config(
        "[display]\nsignificant_digits = 4\n",
        "config.toml",
        &["area", "Circle", "2"],
    );
    assert!(ok);
    assert_eq!(out, "Area: 12.57\nPerimeter: 12.57\n");
}

#[test]
fn test_flag_overrides_file() {
    let (_, out) = run_with_config(
        "[display]\nsignificant_digits = 4\n",
        "config.toml",
        &["--precision", "6", "area", "Circle", "2"],
    );
    assert_eq!(out, "Area: 12.5664\nPerimeter: 12.5664\n");
}

#[test]
fn test_legacy_names_disabled_from_json() {
    let config = r#"{"form": {"default_shape": "Cube", "accept_legacy_names": false}}"#;

    let (ok, out) = run_with_config(config, "config.json", &["calc", "Triangle3", "3", "4", "5"]);
    assert!(!ok);
    assert_eq!(out, "Shape not found\n");

    let (ok, out) = run_with_config(
        config,
        "config.json",
        &["calc", "TriangleThreeSides", "3", "4", "5"],
    );
    assert!(ok);
    assert_eq!(out, "Area: 6\nPerimeter: 12\n");
}

#[test]
fn test_json_output_from_config() {
    let (ok, out) = run_with_config(
        "[display]\nsignificant_digits = 6\noutput_format = \"json\"\n",
        "config.toml",
        &["volume", "Cube", "3"],
    );
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["result"]["volume"], 27.0);
    assert_eq!(value["result"]["dimension"], "3D");
}

#[test]
fn test_list_includes_every_shape() {
    let (ok, out) = run_with_config("", "config.toml", &["list"]);
    assert!(ok);
    assert_eq!(out.lines().count(), 11);
    assert!(out.lines().any(|l| l.starts_with("Trapezoid") && l.contains("Side2")));
}
