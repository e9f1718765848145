//! `time-dist` library crate.
//!
//! The binary (`tdist`) is a thin wrapper around this library so that the
//! parse/group/chart pipeline is testable without spawning processes or
//! opening a terminal.

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod group;
pub mod io;
pub mod logging;
pub mod plot;
pub mod tui;
