//! Plotters-powered bar chart widget for Ratatui.
//!
//! Only the bars and the zero baseline are drawn through Plotters. Tick
//! labels are placed by the caller directly into the terminal buffer, since
//! terminal cells cannot render rotated text.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Render-only bar chart: bar `i` spans `[i, i + 1)` on the x axis.
pub struct BarPlottersChart<'a> {
    pub values: &'a [i64],
    /// Y bounds; must contain zero.
    pub y_bounds: [f64; 2],
}

/// Fraction of each slot left empty on both sides of a bar.
const BAR_GAP: f64 = 0.15;

impl Widget for BarPlottersChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 4 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let n = self.values.len() as f64;
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];
        if n == 0.0 || !(y0.is_finite() && y1.is_finite()) || y1 <= y0 {
            return;
        }

        let values = self.values;
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0.0..n, y0..y1)?;

            let bar_color = RGBColor(0, 255, 255); // cyan
            chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
                let x = i as f64;
                Rectangle::new(
                    [(x + BAR_GAP, 0.0), (x + 1.0 - BAR_GAP, v as f64)],
                    bar_color.filled(),
                )
            }))?;

            chart.draw_series(LineSeries::new([(0.0, 0.0), (n, 0.0)], &WHITE))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
