//! ASCII bar charts for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - viewing charts where a full-screen TUI is not available
//! - deterministic output (helpful for golden tests)
//!
//! Layout, top to bottom: title, bar rows above the zero axis, the axis,
//! bar rows below it (only when some value is negative), then tick labels.
//! Horizontal labels sit under their bar; diagonal labels step one row down
//! and one column right per character. Trailing spaces are trimmed.

use crate::chart::{BarChart, TickRotation};

pub const BAR_CHAR: char = '#';

/// Render several charts separated by a blank line.
pub fn render_ascii_charts(charts: &[BarChart], height: usize) -> String {
    charts
        .iter()
        .map(|chart| render_ascii_chart(chart, height))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one chart using `height` rows for the bars (minimum 2).
pub fn render_ascii_chart(chart: &BarChart, height: usize) -> String {
    let height = height.max(2);
    let n = chart.len();
    let (bottom, top) = chart.value_bounds();

    // f64 before subtracting: the extremes of i64 overflow otherwise.
    let span = (top as f64 - bottom as f64).max(1.0);
    let pos_rows = if bottom == 0 {
        height
    } else if top == 0 {
        0
    } else {
        // Mixed signs keep at least one row on each side of the axis.
        (((top as f64 / span) * height as f64).round() as usize).clamp(1, height - 1)
    };
    let neg_rows = height - pos_rows;

    let cells: Vec<usize> = chart
        .values
        .iter()
        .map(|&v| {
            let c = bar_cells(v, span, height);
            if v > 0 { c.min(pos_rows) } else { c.min(neg_rows) }
        })
        .collect();

    let (slot, bar_w) = match chart.rotation {
        TickRotation::Horizontal => {
            let w = chart.max_label_len().max(1);
            (w + 1, w)
        }
        TickRotation::Diagonal => (2, 1),
    };
    let gutter = top.to_string().len().max(bottom.to_string().len());

    let mut lines = vec![chart.title.clone()];

    for r in 0..pos_rows {
        let level = pos_rows - r;
        let tick = if r == 0 { top.to_string() } else { String::new() };
        let row = bar_row(&chart.values, &cells, slot, bar_w, |v, c| v > 0 && c >= level);
        lines.push(format!("{tick:>gutter$} |{row}"));
    }

    lines.push(format!("{:>gutter$} +{}", 0, "-".repeat(slot * n)));

    for r in 0..neg_rows {
        let depth = r + 1;
        let tick = if depth == neg_rows { bottom.to_string() } else { String::new() };
        let row = bar_row(&chart.values, &cells, slot, bar_w, |v, c| v < 0 && c >= depth);
        lines.push(format!("{tick:>gutter$} |{row}"));
    }

    let indent = " ".repeat(gutter + 2);
    for label_line in label_lines(chart, slot) {
        if !label_line.trim().is_empty() {
            lines.push(format!("{indent}{label_line}"));
        }
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Number of grid rows a bar of `value` fills. Non-zero values get at least one.
fn bar_cells(value: i64, span: f64, height: usize) -> usize {
    if value == 0 {
        return 0;
    }
    ((value.unsigned_abs() as f64 / span) * height as f64)
        .round()
        .max(1.0) as usize
}

fn bar_row(
    values: &[i64],
    cells: &[usize],
    slot: usize,
    bar_w: usize,
    filled: impl Fn(i64, usize) -> bool,
) -> String {
    let mut row = String::with_capacity(values.len() * slot);
    for (&v, &c) in values.iter().zip(cells) {
        let w = if filled(v, c) { bar_w } else { 0 };
        row.extend(std::iter::repeat_n(BAR_CHAR, w));
        row.extend(std::iter::repeat_n(' ', slot - w));
    }
    row
}

fn label_lines(chart: &BarChart, slot: usize) -> Vec<String> {
    match chart.rotation {
        TickRotation::Horizontal => {
            let line = chart
                .labels
                .iter()
                .map(|label| format!("{label:<slot$}"))
                .collect::<String>();
            vec![line]
        }
        TickRotation::Diagonal => {
            let depth = chart.max_label_len();
            let width = slot * chart.len() + depth;
            (0..depth)
                .map(|k| {
                    let mut buf = vec![' '; width];
                    for (i, label) in chart.labels.iter().enumerate() {
                        if let Some(ch) = label.chars().nth(k) {
                            buf[slot * i + k] = ch;
                        }
                    }
                    buf.into_iter().collect()
                })
                .collect()
        }
    }
}
