use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use tempfile::tempdir;

use slidelab::document::SlideDocument;
use slidelab::shape::Shape;
use slidelab_cli::{Args, CliError, OperationArg};

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos")
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

fn args(input: &Path, output: &Path, operation: OperationArg) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        operation,
        output: output.to_string_lossy().to_string(),
        row_length: 2,
        col_length: 3,
        config: Some(demos_dir().join("config.toml").to_string_lossy().to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_every_operation_on_every_demo() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let slides = collect_toml_files(demos_dir().join("slides"));
    assert!(!slides.is_empty(), "No slide documents found in demos/slides");

    let mut failures = Vec::new();

    for slide_path in &slides {
        for &operation in OperationArg::value_variants() {
            let output_path = temp_dir.path().join(format!(
                "{}-{:?}.toml",
                slide_path.file_stem().unwrap().to_string_lossy(),
                operation
            ));

            match slidelab_cli::run(&args(slide_path, &output_path, operation)) {
                Ok(()) => {
                    let written = fs::read_to_string(&output_path).expect("output was written");
                    let document: SlideDocument =
                        toml::from_str(&written).expect("output is a slide document");
                    document.validate().expect("output geometry is valid");
                }
                Err(err) => failures.push((slide_path.clone(), operation, err)),
            }
        }
    }

    if !failures.is_empty() {
        eprintln!("\nDemo runs that failed:");
        for (path, operation, err) in &failures {
            eprintln!("  - {} ({operation:?}): {err}", path.display());
        }
        panic!("{} demo run(s) failed unexpectedly", failures.len());
    }
}

#[test]
fn e2e_smoke_test_distribute_row() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("slides/row.toml");
    let output = temp_dir.path().join("row.toml");

    slidelab_cli::run(&args(&input, &output, OperationArg::DistributeHorizontal))
        .expect("row demo distributes");

    let written = fs::read_to_string(&output).expect("output was written");
    let document: SlideDocument = toml::from_str(&written).expect("valid output");
    let lefts: Vec<f32> = document.shapes().iter().map(|s| s.left()).collect();
    assert_eq!(lefts, vec![17.5, 45.0, 72.5]);
}

#[test]
fn e2e_smoke_test_error_documents() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let errors = demos_dir().join("errors");

    let output = temp_dir.path().join("malformed-out.toml");
    let err = slidelab_cli::run(&args(
        &errors.join("malformed.toml"),
        &output,
        OperationArg::AlignLeft,
    ))
    .expect_err("malformed document is rejected");
    assert!(matches!(err, CliError::Parse { .. }));
    assert!(!output.exists());

    let output = temp_dir.path().join("negative-out.toml");
    let err = slidelab_cli::run(&args(
        &errors.join("negative_size.toml"),
        &output,
        OperationArg::AlignLeft,
    ))
    .expect_err("negative size is rejected");
    assert!(matches!(err, CliError::Document(_)));
    assert!(!output.exists());
}

#[test]
fn e2e_smoke_test_missing_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.toml");
    let output = temp_dir.path().join("out.toml");

    let err = slidelab_cli::run(&args(&input, &output, OperationArg::Swap))
        .expect_err("input does not exist");
    assert!(matches!(err, CliError::Io(_)));
}
