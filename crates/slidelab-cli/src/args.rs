//! Command-line argument definitions for the SlideLab CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the slide document, the layout operation
//! to apply, the output path, configuration file selection, and logging
//! verbosity.

use clap::{Parser, ValueEnum};

use slidelab::Operation;

/// Command-line arguments for the SlideLab layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input slide document (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Layout operation to apply to the document's shapes
    #[arg(long, value_enum)]
    pub operation: OperationArg,

    /// Path to the output slide document
    #[arg(short, long, default_value = "out.toml")]
    pub output: String,

    /// Cells per grid row (number of columns), used by `distribute-grid`
    #[arg(long, default_value_t = 1)]
    pub row_length: usize,

    /// Cells per grid column (number of rows), used by `distribute-grid`
    #[arg(long, default_value_t = 1)]
    pub col_length: usize,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns the engine operation selected by these arguments.
    pub fn to_operation(&self) -> Operation {
        self.operation.to_operation(self.row_length, self.col_length)
    }
}

/// Operation names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    AlignLeft,
    AlignRight,
    AlignTop,
    AlignBottom,
    AlignMiddle,
    AlignCenter,
    DistributeHorizontal,
    DistributeVertical,
    DistributeCenter,
    DistributeShapes,
    DistributeGrid,
    AdjoinHorizontal,
    AdjoinVertical,
    Swap,
    SnapVertical,
    SnapHorizontal,
    SnapAway,
    StretchLeft,
    StretchRight,
    StretchTop,
    StretchBottom,
}

impl OperationArg {
    fn to_operation(self, row_length: usize, col_length: usize) -> Operation {
        match self {
            OperationArg::AlignLeft => Operation::AlignLeft,
            OperationArg::AlignRight => Operation::AlignRight,
            OperationArg::AlignTop => Operation::AlignTop,
            OperationArg::AlignBottom => Operation::AlignBottom,
            OperationArg::AlignMiddle => Operation::AlignMiddle,
            OperationArg::AlignCenter => Operation::AlignCenter,
            OperationArg::DistributeHorizontal => Operation::DistributeHorizontal,
            OperationArg::DistributeVertical => Operation::DistributeVertical,
            OperationArg::DistributeCenter => Operation::DistributeCenter,
            OperationArg::DistributeShapes => Operation::DistributeShapes,
            OperationArg::DistributeGrid => Operation::DistributeGrid {
                row_length,
                col_length,
            },
            OperationArg::AdjoinHorizontal => Operation::AdjoinHorizontal,
            OperationArg::AdjoinVertical => Operation::AdjoinVertical,
            OperationArg::Swap => Operation::Swap,
            OperationArg::SnapVertical => Operation::SnapVertical,
            OperationArg::SnapHorizontal => Operation::SnapHorizontal,
            OperationArg::SnapAway => Operation::SnapAway,
            OperationArg::StretchLeft => Operation::StretchLeft,
            OperationArg::StretchRight => Operation::StretchRight,
            OperationArg::StretchTop => Operation::StretchTop,
            OperationArg::StretchBottom => Operation::StretchBottom,
        }
    }
}
