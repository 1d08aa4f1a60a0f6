//! Accessibility checkers and the helpers they share.
//!
//! Each checker scans a document tree for one category of defect:
//! - Image alternative text ([`AltTextChecker`])
//! - Font size and readability ([`FontSizeChecker`])
//! - Color contrast and color reliance ([`ColorContrastChecker`])
//!
//! Checkers are stateless and independent; [`run_checkers`] invokes the
//! selected ones in a fixed order.

// Submodules
mod alt_text;
mod color_class;
mod contrast;
mod font_size;
mod runner;
mod style;
mod units;


// Re-exports
pub use alt_text::AltTextChecker;
pub use color_class::{classify_color, ColorClass};
pub use contrast::ColorContrastChecker;
pub use font_size::FontSizeChecker;
pub use runner::{run_checkers, CheckKind, CheckOutcomes, CheckResult, Checker};
pub use style::{declaration_value, declarations, Declaration};
pub use units::{normalize_to_pixels, FontUnit};
