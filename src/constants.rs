//! Application-wide constants
//!
//! Single source of truth for the font geometry and CLI defaults.

/// Bitmap font geometry
pub mod glyph {
    /// Width of every glyph in cells
    pub const WIDTH: usize = 5;

    /// Height of every glyph in cells
    pub const HEIGHT: usize = 7;
}

/// Command-line defaults
pub mod cli {
    /// Default number of blank columns between letters
    pub const DEFAULT_SPACING: usize = 1;

    /// Default pixel scale factor
    pub const DEFAULT_SCALE: usize = 1;
}
