//! Shared "load → group → chart" logic used by both the viewer and `print`.
//!
//! The front-ends then only differ in presentation.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::chart::{BarChart, build_charts};
use crate::domain::Dataset;
use crate::error::AppError;
use crate::group::group_records;
use crate::io::ingest::load_records;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub input: PathBuf,
    pub dataset: Dataset,
    pub charts: Vec<BarChart>,
}

/// Read, parse and group `path`, then build one chart per present category.
pub fn run_pipeline(path: &Path) -> Result<RunOutput, AppError> {
    let records = load_records(path)?;
    let dataset = group_records(records);
    info!(records = dataset.record_count(), "grouped records");
    let charts = build_charts(&dataset);
    log_charts(&charts);

    Ok(RunOutput {
        input: path.to_path_buf(),
        dataset,
        charts,
    })
}

fn log_charts(charts: &[BarChart]) {
    for chart in charts {
        info!(
            category = %chart.category,
            bars = chart.len(),
            rotation = chart.rotation.degrees(),
            "built chart"
        );
    }
}
