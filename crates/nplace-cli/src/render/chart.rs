//! Text plot of a rank series. Best rank on the top row, time left to right.

use std::fmt::Display;

use chrono::TimeZone;
use nplace_core::{rank_axis, ChartPoint};

pub const EMPTY_CHART: &str = "no data to display";

const POINT: char = '\u{25cf}';
const CELL: usize = 3;
const LABEL_LEN: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    /// Maximum plot width in columns, excluding the axis labels.
    pub width: usize,
    /// Maximum plot height in rows.
    pub height: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 60,
            height: 10,
        }
    }
}

/// Renders `points` (ascending by time, as produced by `chart_series`).
/// Dates on the x axis are shown as `MM-DD` in `tz`.
#[must_use]
pub fn render_chart<Tz>(points: &[ChartPoint], tz: &Tz, options: ChartOptions) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(axis) = rank_axis(points) else {
        return EMPTY_CHART.to_string();
    };

    let span = usize::try_from(axis.span()).unwrap_or(usize::MAX);
    let rows = options.height.max(1).min(span);
    let width = options.width.max(1).min(points.len() * CELL);
    let col_of = |i: usize| {
        if points.len() == 1 {
            0
        } else {
            i * (width - 1) / (points.len() - 1)
        }
    };

    let mut grid = vec![vec![' '; width]; rows];
    for (i, point) in points.iter().enumerate() {
        grid[axis.row_of(point.rank, rows)][col_of(i)] = POINT;
    }

    let labels: Vec<String> = (0..rows)
        .map(|r| format!("#{}", axis.rank_at(r, rows)))
        .collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = Vec::with_capacity(rows + 2);
    for (label, cells) in labels.iter().zip(&grid) {
        let line: String = cells.iter().collect();
        out.push(format!("{label:>label_width$} \u{2502}{}", line.trim_end()));
    }
    out.push(format!(
        "{:>label_width$} \u{2514}{}",
        "",
        "\u{2500}".repeat(width)
    ));

    let day = |p: &ChartPoint| p.collected_at.with_timezone(tz).format("%m-%d").to_string();
    let first = day(&points[0]);
    let mut x_labels = first.clone();
    if let Some(last) = points.last().map(day).filter(|l| points.len() > 1 && *l != first) {
        if width >= LABEL_LEN * 2 + 1 {
            x_labels.push_str(&format!("{last:>pad$}", pad = width - LABEL_LEN));
        } else {
            x_labels.push(' ');
            x_labels.push_str(&last);
        }
    }
    out.push(format!("{:label_width$}  {x_labels}", ""));

    out.join("\n")
}
