//! Ratatui-based chart viewer.
//!
//! Shows one figure at a time, full screen. ←/→ (or Tab/Shift-Tab) page
//! between the per-category charts; `q` or Esc closes the viewer.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::debug;

use crate::chart::{BarChart, TickRotation};
use crate::error::{AppError, EXIT_RENDER};

mod plotters_chart;

use plotters_chart::BarPlottersChart;

/// Start the viewer. Returns when the user closes it.
pub fn run(charts: Vec<BarChart>) -> Result<(), AppError> {
    debug!(charts = charts.len(), "starting chart viewer");
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App {
        viewer: ChartViewer::new(charts),
    };
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(
                EXIT_RENDER,
                format!("Failed to enter alternate screen: {e}"),
            ));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Which chart is on screen.
#[derive(Debug, Clone)]
pub struct ChartViewer {
    charts: Vec<BarChart>,
    selected: usize,
}

impl ChartViewer {
    pub fn new(charts: Vec<BarChart>) -> Self {
        Self { charts, selected: 0 }
    }

    pub fn current(&self) -> Option<&BarChart> {
        self.charts.get(self.selected)
    }

    /// 1-based position and total, for the header.
    pub fn position(&self) -> (usize, usize) {
        (self.selected + 1, self.charts.len())
    }

    pub fn next(&mut self) {
        if !self.charts.is_empty() {
            self.selected = (self.selected + 1) % self.charts.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.charts.is_empty() {
            self.selected = (self.selected + self.charts.len() - 1) % self.charts.len();
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.charts.len().saturating_sub(1);
    }
}

struct App {
    viewer: ChartViewer,
}

impl App {
    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(EXIT_RENDER, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(EXIT_RENDER, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(EXIT_RENDER, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the viewer should close.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.viewer.next(),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => self.viewer.prev(),
            KeyCode::Home => self.viewer.first(),
            KeyCode::End => self.viewer.last(),
            _ => {}
        }
        false
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let (pos, total) = self.viewer.position();
        let summary = match self.viewer.current() {
            Some(chart) => format!(
                " | figure {pos}/{total} | bars: {} | tick rotation: {}°",
                chart.len(),
                chart.rotation.degrees()
            ),
            None => " | no figures".to_string(),
        };
        let line = Line::from(vec![
            Span::styled("tdist", Style::default().fg(Color::Cyan)),
            Span::styled(summary, Style::default().fg(Color::Gray)),
        ]);
        let p = Paragraph::new(Text::from(line)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(chart) = self.viewer.current() else {
            let msg = Paragraph::new("No records found.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(msg, area);
            return;
        };

        let block = Block::default()
            .title(Span::styled(
                chart.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let y_bounds = y_bounds(chart);
        let (chart_rect, insets) = chart_layout(inner, chart, y_bounds);

        frame.render_widget(
            BarPlottersChart {
                values: &chart.values,
                y_bounds,
            },
            chart_rect,
        );

        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, chart, y_bounds);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "←/→ or Tab switch figure  Home/End first/last  q quit";
        let p = Paragraph::new(Span::styled(help, Style::default().fg(Color::Gray)))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Chart y range: the bar values plus zero, padded by 10% (at least 1).
fn y_bounds(chart: &BarChart) -> [f64; 2] {
    let (bottom, top) = chart.value_bounds();
    let pad = ((top as f64 - bottom as f64) * 0.1).max(1.0);
    let lower = if bottom < 0 { bottom as f64 - pad } else { 0.0 };
    [lower, top as f64 + pad]
}

const Y_TICKS: usize = 5;

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect, chart: &BarChart, y_bounds: [f64; 2]) -> (Rect, Option<AxisInsets>) {
    let y_label_width = y_bounds
        .iter()
        .map(|v| format!("{v:.0}").len())
        .max()
        .unwrap_or(1) as u16;
    let label_rows = match chart.rotation {
        TickRotation::Horizontal => 1,
        TickRotation::Diagonal => chart.max_label_len().max(1) as u16,
    };
    let insets = AxisInsets {
        left: y_label_width + 1,
        bottom: label_rows,
    };

    if inner.width <= insets.left + 10 || inner.height <= insets.bottom + 4 {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y,
        width: inner.width - insets.left,
        height: inner.height - insets.bottom,
    };

    (rect, Some(insets))
}

/// Terminal column under the middle of bar `index`.
fn bar_center(chart_x: u16, chart_width: u16, bars: usize, index: usize) -> u16 {
    let u = (index as f64 + 0.5) / bars.max(1) as f64;
    chart_x + (chart_width as f64 * u).floor() as u16
}

/// Cells `(x, y, ch)` for one tick label anchored at column `x`, row `y`.
///
/// Horizontal labels are centered on `x` and cut to `max_chars`; diagonal
/// labels start at `x` and step one row down and one column right per char.
fn tick_cells(label: &str, rotation: TickRotation, x: u16, y: u16, max_chars: usize) -> Vec<(u16, u16, char)> {
    match rotation {
        TickRotation::Horizontal => {
            let chars: Vec<char> = label.chars().take(max_chars.max(1)).collect();
            let start = x.saturating_sub((chars.len() / 2) as u16);
            chars
                .into_iter()
                .enumerate()
                .map(|(k, ch)| (start + k as u16, y, ch))
                .collect()
        }
        TickRotation::Diagonal => label
            .chars()
            .enumerate()
            .map(|(k, ch)| (x + k as u16, y + k as u16, ch))
            .collect(),
    }
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart_rect: Rect,
    insets: AxisInsets,
    chart: &BarChart,
    y_bounds: [f64; 2],
) {
    let style = Style::default().fg(Color::Gray);
    let buf = frame.buffer_mut();
    let right = inner.x + inner.width;
    let bottom = inner.y + inner.height;

    for i in 0..Y_TICKS {
        let u = i as f64 / (Y_TICKS as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart_rect.y + (chart_rect.height - 1) - ((chart_rect.height - 1) as f64 * u).round() as u16;
        let label = format!("{y_val:.0}");
        let x = (inner.x + insets.left.saturating_sub(1)).saturating_sub(label.len() as u16);
        if x < inner.x {
            continue;
        }
        buf.set_string(x, y, label, style);
    }

    let bars = chart.len();
    let slot = (chart_rect.width as usize / bars.max(1)).saturating_sub(1);
    let label_y = chart_rect.y + chart_rect.height;
    for (i, label) in chart.labels.iter().enumerate() {
        let x = bar_center(chart_rect.x, chart_rect.width, bars, i);
        for (cx, cy, ch) in tick_cells(label, chart.rotation, x, label_y, slot) {
            if cx < right && cy < bottom {
                buf.set_string(cx, cy, ch.to_string(), style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn chart(category: Category, n: usize) -> BarChart {
        let labels: Vec<String> = (0..n).map(|i| format!("L{i}")).collect();
        BarChart {
            category,
            title: category.chart_title(),
            rotation: TickRotation::for_label_count(n),
            labels,
            values: (0..n as i64).collect(),
        }
    }

    #[test]
    fn viewer_wraps_around() {
        let mut viewer = ChartViewer::new(vec![chart(Category::Day, 3), chart(Category::Hour, 3)]);
        assert_eq!(viewer.position(), (1, 2));
        viewer.prev();
        assert_eq!(viewer.current().unwrap().category, Category::Hour);
        viewer.next();
        assert_eq!(viewer.current().unwrap().category, Category::Day);
        viewer.last();
        assert_eq!(viewer.position(), (2, 2));
        viewer.first();
        assert_eq!(viewer.position(), (1, 2));
    }

    #[test]
    fn empty_viewer_has_no_current_chart() {
        let mut viewer = ChartViewer::new(Vec::new());
        viewer.next();
        viewer.prev();
        viewer.last();
        assert!(viewer.current().is_none());
    }

    #[test]
    fn y_bounds_pad_above_and_keep_zero_floor() {
        let c = chart(Category::Day, 11);
        assert_eq!(y_bounds(&c), [0.0, 11.0]);

        let mut neg = chart(Category::Day, 2);
        neg.values = vec![-20, 30];
        assert_eq!(y_bounds(&neg), [-25.0, 35.0]);
    }

    #[test]
    fn y_bounds_survive_full_i64_range() {
        let mut c = chart(Category::Hour, 2);
        c.values = vec![i64::MIN, i64::MAX];
        let [lower, upper] = y_bounds(&c);
        assert!(lower.is_finite() && upper.is_finite());
        assert!(lower < 0.0 && upper > 0.0);
    }

    #[test]
    fn bar_centers_are_spread_across_width() {
        assert_eq!(bar_center(10, 40, 4, 0), 15);
        assert_eq!(bar_center(10, 40, 4, 3), 45);
    }

    #[test]
    fn horizontal_ticks_are_centered_and_truncated() {
        let cells = tick_cells("Wed", TickRotation::Horizontal, 10, 5, 8);
        assert_eq!(cells, vec![(9, 5, 'W'), (10, 5, 'e'), (11, 5, 'd')]);

        let cells = tick_cells("September", TickRotation::Horizontal, 10, 5, 2);
        assert_eq!(cells, vec![(9, 5, 'S'), (10, 5, 'e')]);
    }

    #[test]
    fn diagonal_ticks_step_down_and_right() {
        let cells = tick_cells("14", TickRotation::Diagonal, 3, 7, 1);
        assert_eq!(cells, vec![(3, 7, '1'), (4, 8, '4')]);
    }

    #[test]
    fn quit_keys_close_viewer() {
        let mut app = App {
            viewer: ChartViewer::new(vec![chart(Category::Month, 2)]),
        };
        assert!(!app.handle_key(KeyCode::Right));
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Esc));
    }
}
