//! UI state types shared by the core and the terminal layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for grips, delete buttons and link markers.
    pub ascii_only: bool,
    pub high_contrast: bool,
}
