//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed set of time categories (`Category`)
//! - parsed input lines (`Record`)
//! - grouped, order-preserving bar data (`CategoryGroup`, `Dataset`)

pub mod types;

pub use types::*;
