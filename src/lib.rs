#![doc = r#"
SVGPATCH — a batch SVG patching toolkit.

This crate provides a typed API for cleaning up and rewriting SVG
documents: id removal and prefixing (with `url(#ref)` patching), default
style pruning, fill/stroke promotion, comment, whitespace, and exotic
namespace stripping. It powers the SVGPATCH CLI and can be embedded in
your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is built
on top of the working core used by the CLI, but may evolve as the crate
stabilizes. Breaking changes can occur.

Quick start: patch a string in memory
-------------------------------------
```rust
use svgpatch::{patch_str, PatchOptions};

fn main() -> svgpatch::Result<()> {
    let options = PatchOptions {
        icon: true, // preset, expanded internally
        ..Default::default()
    };

    let patched = patch_str("<svg id=\"a\"><!-- x --><rect/></svg>", &options)?;
    assert_eq!(patched, "<svg><rect class=\"primary\"/></svg>");
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::PathBuf;
use svgpatch::{patch_paths_to, PatchOptions};

fn main() -> svgpatch::Result<()> {
    let inputs = vec![PathBuf::from("a.svg"), PathBuf::from("b.svg")];
    let options = PatchOptions {
        ui: true,
        ..Default::default()
    };

    // Multi-input batches stream to the given writer; a file that
    // cannot be loaded is skipped, the rest of the batch continues.
    let mut stdout = std::io::stdout().lock();
    let report = patch_paths_to(&inputs, &options, &mut stdout)?;
    eprintln!("processed={} skipped={}", report.processed, report.skipped);
    Ok(())
}
```

Routing
-------
Each processed document is delivered by a three-rule priority chain:
`overwrite_source` writes back over the input at any batch size; an
explicit `output` path is honored only for single-input batches; the
default output stream gets everything else, one trailing newline per
document. See [`core::route`].

Error handling
--------------
All public functions return `svgpatch::Result<T>`; match on
`svgpatch::Error` to handle specific cases. `Error::Load` is the one
failure the batch loop recovers from; parse, patch, and write failures
are fatal for the run.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — options/presets, patch passes, and the output router.
- [`io`] — the XML document handle.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;

// Curated public API surface
pub use core::options::{PRESETS, PatchOptions, Preset, PresetFlag, PrimitiveFlag};
pub use core::patch::PatchError;
pub use core::route::{Destination, deliver, destination};
pub use error::{Error, Result};
pub use io::{Document, Element, Node, ParseError};

// High-level API re-exports
pub use api::{BatchReport, patch_paths_to, patch_str};
