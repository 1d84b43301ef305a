//! Terminal presentation of a composed grid.

use crate::compose::Grid;
use crate::font::Cell;

/// Human-friendly preview: `█` for filled cells, space for empty.
pub fn preview(grid: &Grid) -> String {
    render_with(grid, '█', ' ')
}

/// Literal form for embedding in a commit script: `#` filled, `.` empty.
pub fn literal(grid: &Grid) -> String {
    render_with(grid, '#', '.')
}

fn render_with(grid: &Grid, filled: char, empty: char) -> String {
    let lines: Vec<String> = grid
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Filled => filled,
                    Cell::Empty => empty,
                })
                .collect()
        })
        .collect();
    lines.join("\n")
}
