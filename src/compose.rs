//! Composition of text into a rectangular cell grid.

use anyhow::{Result, ensure};
use tracing::debug;

use crate::constants::glyph;
use crate::font::{self, Cell};

/// Validated layout parameters for one composition call.
///
/// Spacing and padding counts are unsigned, so negative values cannot be
/// expressed; a zero scale is rejected at construction rather than letting
/// the compositor produce degenerate output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    spacing: usize,
    scale: usize,
    pad_top: usize,
    pad_bottom: usize,
}

impl Layout {
    pub fn new(spacing: usize, scale: usize, pad_top: usize, pad_bottom: usize) -> Result<Self> {
        ensure!(scale >= 1, "scale must be at least 1, got {scale}");
        Ok(Self {
            spacing,
            scale,
            pad_top,
            pad_bottom,
        })
    }
}

/// A composed grid of cells. Every row has the same width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render `text` into a grid of filled/empty cells.
///
/// The text is uppercased, each character resolves to its 5x7 glyph (blank
/// when unsupported), glyphs are scaled by block replication and joined
/// left to right with `spacing * scale` empty columns between neighbors
/// only. `pad_top` / `pad_bottom` fully blank rows are then added above and
/// below.
///
/// Empty input yields a zero-row grid and skips padding entirely, since
/// there is no composed row width to pad to.
pub fn compose(text: &str, layout: &Layout) -> Grid {
    let glyphs: Vec<Vec<Vec<Cell>>> = text
        .to_uppercase()
        .chars()
        .map(|ch| font::lookup(ch).scaled(layout.scale))
        .collect();

    if glyphs.is_empty() {
        return Grid::default();
    }

    let height = glyph::HEIGHT * layout.scale;
    let gap = layout.spacing * layout.scale;
    let width = glyphs.len() * glyph::WIDTH * layout.scale + (glyphs.len() - 1) * gap;

    let mut rows = Vec::with_capacity(layout.pad_top + height + layout.pad_bottom);
    for r in 0..height {
        let mut row = Vec::with_capacity(width);
        for (i, letter) in glyphs.iter().enumerate() {
            row.extend_from_slice(&letter[r]);
            if i != glyphs.len() - 1 {
                row.extend(std::iter::repeat(Cell::Empty).take(gap));
            }
        }
        rows.push(row);
    }

    let pad_row = vec![Cell::Empty; width];
    for _ in 0..layout.pad_top {
        rows.insert(0, pad_row.clone());
    }
    for _ in 0..layout.pad_bottom {
        rows.push(pad_row.clone());
    }

    debug!(
        width,
        height = rows.len(),
        letters = glyphs.len(),
        "composed grid"
    );
    Grid { rows }
}
