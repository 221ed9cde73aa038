//! Persisted setting keys and their documented defaults.
//!
//! The key spellings below are the on-disk schema shared with existing
//! installations and must not change. Every key has a default used whenever
//! the store has no value for it (first run, or value cleared).

use crate::color::Color;

/// Whether pdflatex is located automatically instead of via an explicit path.
pub const AUTO_DETECT_PDFLATEX: &str = "auto-detect-pdflatex";
pub const DEFAULT_AUTO_DETECT_PDFLATEX: bool = true;

/// Explicit path to the pdflatex executable (used when auto-detect is off).
pub const PDFLATEX_PATH: &str = "pdflatex-path";
pub const DEFAULT_PDFLATEX_PATH: &str = "";

/// Pixel spacing between style icons in the style palette.
pub const STYLE_ICON_SPACING: &str = "style-icon-spacing";
pub const DEFAULT_STYLE_ICON_SPACING: i64 = 48;

/// Whether a newly drawn edge becomes the current selection.
pub const SELECT_NEW_EDGES: &str = "select-new-edges";
pub const DEFAULT_SELECT_NEW_EDGES: bool = false;

/// Whether plain scrolling requires shift (freeing the wheel for zoom).
pub const SHIFT_TO_SCROLL: &str = "shift-to-scroll";
pub const DEFAULT_SHIFT_TO_SCROLL: bool = false;

/// Point size of the source preview font.
pub const PREVIEW_FONT_SIZE: &str = "preview-font-size";
pub const DEFAULT_PREVIEW_FONT_SIZE: i64 = 12;

/// Family name of the source preview font. Empty means the toolkit default.
pub const PREVIEW_FONT_FAMILY: &str = "preview-font-family";
pub const DEFAULT_PREVIEW_FONT_FAMILY: &str = "";

/// Color of the grid axes lines.
pub const GRID_COLOR_AXES: &str = "grid-color-axes";
pub const DEFAULT_GRID_COLOR_AXES: Color = Color::new(220, 220, 240);

/// Color of the major grid lines.
pub const GRID_COLOR_MAJOR: &str = "grid-color-major";
pub const DEFAULT_GRID_COLOR_MAJOR: Color = Color::new(240, 240, 250);

/// Color of the minor grid lines.
pub const GRID_COLOR_MINOR: &str = "grid-color-minor";
pub const DEFAULT_GRID_COLOR_MINOR: Color = Color::new(250, 250, 255);

/// All persisted keys, in the order the preferences dialog writes them.
pub const ALL: [&str; 10] = [
    AUTO_DETECT_PDFLATEX,
    PDFLATEX_PATH,
    STYLE_ICON_SPACING,
    GRID_COLOR_AXES,
    GRID_COLOR_MAJOR,
    GRID_COLOR_MINOR,
    SELECT_NEW_EDGES,
    SHIFT_TO_SCROLL,
    PREVIEW_FONT_SIZE,
    PREVIEW_FONT_FAMILY,
];
