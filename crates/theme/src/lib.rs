//! Colour handling and advisory checks for gauge configurations.

pub mod colors;
pub mod lint;
pub mod themes;

pub use colors::Color;
pub use lint::{lint_file, lint_linear, lint_radial, Diagnostic};
pub use themes::KNOWN_THEMES;
