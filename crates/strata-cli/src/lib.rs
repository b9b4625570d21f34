//! CLI logic for the Strata diagram tool.
//!
//! Reads a TOML diagram document, lays it out and writes the rendered SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use strata::{DiagramBuilder, StrataError};

/// Run the Strata CLI application
///
/// This function processes the input file through the Strata pipeline
/// and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `StrataError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), StrataError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let document = builder.parse(&source)?;
    let svg = builder.render_svg(&document)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
