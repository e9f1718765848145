//! Input helpers.
//!
//! - whole-file read + line parsing (`ingest`)

pub mod ingest;

pub use ingest::*;
