//! Output routing: decide where a processed document goes and deliver
//! it there. The decision is a pure priority chain so it can be tested
//! without touching the filesystem.
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::options::PatchOptions;
use crate::error::{Error, Result};

/// Where a processed document is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Overwrite the source file (`--self`)
    Source(&'a Path),
    /// Write to the explicit output path (single-input batches only)
    File(&'a Path),
    /// Emit to the default output stream with a trailing newline
    Stream,
}

/// First matching rule wins:
/// 1. `--self` overwrites the source, whatever the batch size;
/// 2. an explicit output path is honored only when the batch holds a
///    single input, so concurrent inputs can never race for one
///    destination;
/// 3. everything else goes to the stream.
pub fn destination<'a>(
    source: &'a Path,
    batch_size: usize,
    options: &'a PatchOptions,
) -> Destination<'a> {
    if options.overwrite_source {
        Destination::Source(source)
    } else if batch_size == 1 {
        match &options.output {
            Some(output) => Destination::File(output),
            None => Destination::Stream,
        }
    } else {
        Destination::Stream
    }
}

/// Execute the routing decision for one processed document.
pub fn deliver<W: Write>(
    text: &str,
    source: &Path,
    batch_size: usize,
    options: &PatchOptions,
    stream: &mut W,
) -> Result<()> {
    match destination(source, batch_size, options) {
        Destination::Source(path) | Destination::File(path) => {
            fs::write(path, text).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })
        }
        Destination::Stream => {
            stream.write_all(text.as_bytes())?;
            stream.write_all(b"\n")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn options(overwrite_source: bool, output: Option<&str>) -> PatchOptions {
        PatchOptions {
            overwrite_source,
            output: output.map(PathBuf::from),
            ..Default::default()
        }
    }

    #[test]
    fn self_beats_output_at_any_batch_size() {
        let opts = options(true, Some("out.svg"));
        let src = Path::new("a.svg");
        assert_eq!(destination(src, 1, &opts), Destination::Source(src));
        assert_eq!(destination(src, 3, &opts), Destination::Source(src));
    }

    #[test]
    fn output_is_honored_only_for_single_input_batches() {
        let opts = options(false, Some("out.svg"));
        let src = Path::new("a.svg");
        assert_eq!(
            destination(src, 1, &opts),
            Destination::File(Path::new("out.svg"))
        );
        assert_eq!(destination(src, 2, &opts), Destination::Stream);
    }

    #[test]
    fn default_is_the_stream() {
        let opts = options(false, None);
        assert_eq!(destination(Path::new("a.svg"), 1, &opts), Destination::Stream);
    }

    #[test]
    fn stream_delivery_appends_one_newline() {
        let mut stream = Vec::new();
        deliver(
            "<svg/>",
            Path::new("a.svg"),
            2,
            &options(false, None),
            &mut stream,
        )
        .unwrap();
        assert_eq!(stream, b"<svg/>\n");
    }

    #[test]
    fn file_delivery_writes_the_exact_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.svg");
        let opts = options(false, Some(out.to_str().unwrap()));
        let mut stream = Vec::new();
        deliver("<svg/>", Path::new("a.svg"), 1, &opts, &mut stream).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "<svg/>");
        assert!(stream.is_empty());
    }

    #[test]
    fn write_failure_is_the_named_error_kind() {
        let opts = options(false, Some("/nonexistent-dir/out.svg"));
        let mut stream = Vec::new();
        match deliver("<svg/>", Path::new("a.svg"), 1, &opts, &mut stream) {
            Err(Error::Write { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent-dir/out.svg"))
            }
            other => panic!("expected Write error, got {other:?}"),
        }
    }
}
