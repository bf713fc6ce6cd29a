//! High-level entrypoints: patch a string in memory, or run a batch of
//! input paths with per-file failure isolation. The CLI's `patch`
//! command is a thin wrapper over [`patch_paths_to`]; embedders can
//! call these directly.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::options::PatchOptions;
use crate::core::patch;
use crate::core::route;
use crate::error::{Error, Result};
use crate::io::Document;

/// Outcome counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Inputs patched and delivered
    pub processed: usize,
    /// Inputs skipped because they could not be loaded
    pub skipped: usize,
}

/// Patch a document held in memory.
///
/// Expands presets itself, so it accepts raw options; expansion is
/// idempotent, so already-expanded options are fine too.
pub fn patch_str(input: &str, options: &PatchOptions) -> Result<String> {
    let options = options.expand();
    let mut doc = Document::parse(input)?;
    patch::apply(&mut doc, &options)?;
    Ok(doc.to_xml()?)
}

/// Process a batch of input paths in order, routing each result per the
/// options (`--self`, `--output`, or the given stream).
///
/// A file that cannot be loaded is skipped and the batch continues; the
/// diagnostic is surfaced only for single-input batches, where there is
/// nothing else to get on with. Parse, patch, and write failures are
/// fatal and abort the remaining inputs.
pub fn patch_paths_to<W: Write>(
    inputs: &[PathBuf],
    options: &PatchOptions,
    stream: &mut W,
) -> Result<BatchReport> {
    let options = options.expand();
    let mut report = BatchReport::default();

    for input in inputs {
        let raw = match read_source(input) {
            Ok(raw) => raw,
            Err(error) => {
                if inputs.len() == 1 {
                    warn!("{error}");
                } else {
                    debug!("skipping {}: {error}", input.display());
                }
                report.skipped += 1;
                continue;
            }
        };

        let mut doc = Document::parse(&raw)?;
        patch::apply(&mut doc, &options)?;
        let text = doc.to_xml()?;
        route::deliver(&text, input, inputs.len(), &options, stream)?;
        report.processed += 1;
    }

    info!(
        processed = report.processed,
        skipped = report.skipped,
        "batch complete"
    );
    Ok(report)
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })
}
