//! Plain-text chart rendering for `tdist print`.

pub mod ascii;

pub use ascii::*;
