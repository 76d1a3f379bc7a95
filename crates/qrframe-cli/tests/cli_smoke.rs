//! CLI smoke tests
//!
//! Function-level tests for style resolution plus one spawn of the real
//! binary per happy/sad path.

use std::path::PathBuf;
use std::process::Command;

use clap::Parser;
use qrframe::{EcLevel, EyeStyle, GradientDirection, ModuleStyle};
use qrframe_cli::commands::render::build_style;
use qrframe_cli::{Cli, Commands};

fn parse_render(args: &[&str]) -> qrframe_cli::RenderArgs {
    let cli = Cli::parse_from(args);
    match cli.command {
        Commands::Render(args) => *args,
        other => panic!("expected render command, got {other:?}"),
    }
}

fn temp_output(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("qrframe-test-{}-{name}", std::process::id()));
    path
}

#[test]
fn default_style_from_minimal_args() {
    let args = parse_render(&["qrframe", "render", "https://example.com"]);
    let style = build_style(&args).unwrap();
    assert_eq!(style.module_style, ModuleStyle::Square);
    assert_eq!(style.ec_level, EcLevel::Medium);
    assert!(style.gradient.is_none());
}

#[test]
fn flags_override_defaults() {
    let args = parse_render(&[
        "qrframe",
        "render",
        "https://example.com",
        "--module-style",
        "dots",
        "--eye-style",
        "leaf",
        "--fg",
        "#336699",
        "--gradient",
        "#000000,#0000ff,radial",
        "--ec-level",
        "q",
    ]);
    let style = build_style(&args).unwrap();
    assert_eq!(style.module_style, ModuleStyle::Dots);
    assert_eq!(style.eye_style, EyeStyle::Leaf);
    assert_eq!(style.foreground, "#336699".parse().unwrap());
    assert_eq!(style.gradient.unwrap().direction, GradientDirection::Radial);
    assert_eq!(style.ec_level, EcLevel::Quartile);
}

#[test]
fn style_file_supplies_base_values() {
    let path = temp_output("style.json");
    std::fs::write(
        &path,
        r##"{"module_style":"rounded","foreground":"#112233"}"##,
    )
    .unwrap();

    let args = parse_render(&[
        "qrframe",
        "render",
        "x",
        "--style-file",
        path.to_str().unwrap(),
        "--fg",
        "#445566",
    ]);
    let style = build_style(&args).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(style.module_style, ModuleStyle::Rounded);
    // Flag wins over file.
    assert_eq!(style.foreground, "#445566".parse().unwrap());
}

#[test]
fn bad_style_values_are_config_errors() {
    let args = parse_render(&["qrframe", "render", "x", "--module-style", "wavy"]);
    assert!(build_style(&args).is_err());

    let args = parse_render(&["qrframe", "render", "x", "--gradient", "#000"]);
    assert!(build_style(&args).is_err());
}

#[test]
fn binary_renders_svg_file() {
    let output = temp_output("out");
    let status = Command::new(env!("CARGO_BIN_EXE_qrframe"))
        .args([
            "render",
            "https://example.com",
            "-o",
            output.to_str().unwrap(),
            "--frame",
            "simple",
            "--caption",
            "Scan Me",
            "--quiet",
        ])
        .status()
        .unwrap();
    assert!(status.success());

    let written = output.with_extension("svg");
    let svg = std::fs::read_to_string(&written).unwrap();
    std::fs::remove_file(&written).ok();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Scan Me"));
}

#[test]
fn binary_rejects_unknown_format() {
    let status = Command::new(env!("CARGO_BIN_EXE_qrframe"))
        .args(["render", "x", "--format", "pdf", "--quiet"])
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn info_lists_frames() {
    let out = Command::new(env!("CARGO_BIN_EXE_qrframe"))
        .args(["info", "--frames"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("simple"));
    assert!(stdout.contains("polaroid"));
}
