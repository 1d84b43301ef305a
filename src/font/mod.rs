//! The built-in 5x7 bitmap font: cell and glyph types, lookup, and block
//! scaling.

mod table;

use crate::constants::glyph;

/// One pixel of a composed grid.
///
/// These are the only two values that may appear in output; the table's
/// `#`/`.` encoding is canonicalized to this enum when a glyph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled,
}

impl Cell {
    /// `#` marks a filled cell in the table; any other symbol is empty.
    fn from_table_symbol(symbol: char) -> Self {
        if symbol == '#' { Self::Filled } else { Self::Empty }
    }
}

/// Immutable 5x7 pixel pattern for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    cells: [[Cell; glyph::WIDTH]; glyph::HEIGHT],
}

/// Look up the glyph for `ch`, folding lowercase to uppercase.
///
/// Unsupported characters resolve to the fully blank glyph so that
/// composition never fails on account of the input text.
pub fn lookup(ch: char) -> Glyph {
    Glyph::from_rows(table::rows(ch.to_ascii_uppercase()))
}

impl Glyph {
    fn from_rows(rows: &[&str; glyph::HEIGHT]) -> Self {
        let mut cells = [[Cell::Empty; glyph::WIDTH]; glyph::HEIGHT];
        for (r, row) in rows.iter().enumerate() {
            for (c, symbol) in row.chars().take(glyph::WIDTH).enumerate() {
                cells[r][c] = Cell::from_table_symbol(symbol);
            }
        }
        Self { cells }
    }

    /// Expand the glyph by replicating each cell into a `scale`x`scale`
    /// block, yielding `glyph::HEIGHT * scale` rows of
    /// `glyph::WIDTH * scale` cells. Block replication, not interpolation.
    pub fn scaled(&self, scale: usize) -> Vec<Vec<Cell>> {
        let mut rows = Vec::with_capacity(glyph::HEIGHT * scale);
        for base_row in &self.cells {
            let mut row = Vec::with_capacity(glyph::WIDTH * scale);
            for cell in base_row {
                row.extend(std::iter::repeat(*cell).take(scale));
            }
            for _ in 0..scale {
                rows.push(row.clone());
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_folds_case() {
        for upper in 'A'..='Z' {
            let lower = upper.to_ascii_lowercase();
            assert_eq!(lookup(upper), lookup(lower), "case mismatch for {upper}");
        }
    }

    #[test]
    fn test_unsupported_char_is_all_empty() {
        let blank = lookup('~');
        for row in &blank.cells {
            assert!(row.iter().all(|c| *c == Cell::Empty));
        }
    }

    #[test]
    fn test_scaled_dimensions() {
        for scale in 1..=4 {
            let scaled = lookup('A').scaled(scale);
            assert_eq!(scaled.len(), glyph::HEIGHT * scale);
            for row in &scaled {
                assert_eq!(row.len(), glyph::WIDTH * scale);
            }
        }
    }

    #[test]
    fn test_scaled_is_block_replication() {
        let base = lookup('K');
        let scale = 3;
        let scaled = base.scaled(scale);
        for (r, row) in scaled.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                assert_eq!(
                    *cell,
                    base.cells[r / scale][c / scale],
                    "cell ({r}, {c}) does not match its source block"
                );
            }
        }
    }

    #[test]
    fn test_scale_one_is_identity() {
        let base = lookup('8');
        let scaled = base.scaled(1);
        for (r, row) in scaled.iter().enumerate() {
            assert_eq!(row.as_slice(), base.cells[r].as_slice());
        }
    }
}
