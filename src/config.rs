//! Input path resolution.
//!
//! Precedence: `--input` flag, then `TDIST_INPUT` (a `.env` file in the
//! working directory is honored), then the upstream job's default output path.

use std::path::PathBuf;

use crate::io::ingest::DEFAULT_INPUT_PATH;

pub const INPUT_ENV_VAR: &str = "TDIST_INPUT";

pub fn resolve_input_path(flag: Option<PathBuf>) -> PathBuf {
    dotenvy::dotenv().ok();
    resolve_with(flag, std::env::var(INPUT_ENV_VAR).ok())
}

fn resolve_with(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => PathBuf::from(DEFAULT_INPUT_PATH),
    }
}
