//! Core building blocks: the options bag with preset expansion, the
//! patch engine passes, and the output router. These are consumed by
//! the high-level `api` module and the CLI.
pub mod options;
pub mod patch;
pub mod route;
