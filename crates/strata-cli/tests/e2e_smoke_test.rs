use std::{fs, path::PathBuf};

use tempfile::tempdir;

use strata::{LayoutError, StrataError};
use strata_cli::{Args, run};

/// Workspace-level demos directory
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &PathBuf, output: &PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_toml_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output should be written");
                assert!(svg.contains("<svg"), "{} is not SVG", output_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_toml_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(
            !output_path.exists(),
            "{} should not produce output",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_architecture_demo_renders_every_layer() {
    let temp_dir = tempdir().unwrap();
    let input = demos_dir().join("architecture.toml");
    let output = temp_dir.path().join("architecture.svg");

    run(&args_for(&input, &output)).expect("architecture demo should render");

    let svg = fs::read_to_string(&output).unwrap();
    for name in [
        "UI Layer",
        "Camera API",
        "Frame Process",
        "AI Services",
        "PWA Services",
        "Storage",
        "Platform Det",
    ] {
        assert!(svg.contains(name), "missing layer title {name}");
    }
    assert!(svg.contains("VisionCamera Web App Architecture"));
    assert_eq!(svg.matches("<line").count(), 6);
}

#[test]
fn e2e_duplicate_slot_reports_layout_error() {
    let temp_dir = tempdir().unwrap();
    let input = demos_dir().join("errors").join("duplicate_slot.toml");
    let output = temp_dir.path().join("out.svg");

    let err = run(&args_for(&input, &output)).unwrap_err();

    assert!(matches!(
        err,
        StrataError::Layout(LayoutError::DuplicateSlot { slot: 1, .. })
    ));
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[layout]\ncomponent_separator = \" | \"\n\n[style]\nbackground_color = \"navy\"\n",
    )
    .unwrap();

    let input = demos_dir().join("single_layer.toml");
    let output = temp_dir.path().join("single.svg");
    let mut args = args_for(&input, &output);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("single layer demo should render");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Routes | Models | Views"));
    assert!(svg.contains("navy"));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("absent.toml");
    let output = temp_dir.path().join("out.svg");

    assert!(matches!(
        run(&args_for(&input, &output)),
        Err(StrataError::Io(_))
    ));
}

#[test]
fn e2e_slot_out_of_range_reports_layout_error() {
    let temp_dir = tempdir().unwrap();
    let input = demos_dir().join("errors").join("slot_out_of_range.toml");
    let output = temp_dir.path().join("out.svg");

    let err = run(&args_for(&input, &output)).unwrap_err();

    assert!(matches!(
        err,
        StrataError::Layout(LayoutError::SlotOutOfRange {
            slot: 16_777_217,
            ..
        })
    ));
    assert!(!output.exists());
}
