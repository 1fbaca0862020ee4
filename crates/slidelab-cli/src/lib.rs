//! CLI logic for the SlideLab layout tool.
//!
//! The CLI reads a slide document, applies one layout operation to its
//! shapes and writes the updated document back out as TOML.

pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::{Args, OperationArg};
pub use error::CliError;

use std::fs;

use log::{info, warn};

use slidelab::{LayoutEngine, LayoutError, document::SlideDocument};

/// Run the SlideLab CLI application
///
/// This function loads the slide document named by `args`, applies the
/// selected operation and writes the result to the output file. Engine
/// refusals and partially applied stretches are logged as warnings; the
/// document is still written.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parsing and validation errors
/// - Document serialization errors
pub fn run(args: &Args) -> Result<(), CliError> {
    let operation = args.to_operation();
    info!(
        input_path = args.input,
        output_path = args.output,
        operation:%;
        "Processing slide"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let mut document: SlideDocument =
        toml::from_str(&source).map_err(|err| CliError::new_parse_error(err, source.as_str()))?;
    document.validate()?;

    let engine = LayoutEngine::from_app_config(&app_config);
    let slide = document.slide();

    match engine.apply(operation, document.shapes_mut(), slide) {
        Ok(outcome) => {
            if let Err(LayoutError::PartialFailure { skipped }) = outcome.into_result() {
                let names: Vec<&str> = skipped
                    .iter()
                    .filter_map(|&index| document.shapes().get(index))
                    .map(|shape| shape.name())
                    .collect();
                warn!(operation:%, skipped:?, names:?; "Some shapes were left unchanged");
            }
        }
        Err(err) => {
            warn!(operation:%, err:%; "Operation not applied");
        }
    }

    let output = toml::to_string_pretty(&document)?;
    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Slide document written");

    Ok(())
}
