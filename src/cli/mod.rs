//! Command Line Interface (CLI) layer for SVGPATCH.
//!
//! This module defines argument parsing (`args`), error types
//! (`errors`), and the dispatch logic (`runner`) that wires the parsed
//! options to the batch entrypoints in `svgpatch::api`.
//!
//! If you are embedding SVGPATCH into another application, prefer the
//! high-level `svgpatch::api` module over calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
