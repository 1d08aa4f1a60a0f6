/// Coarse lightness bucket for a CSS color token.
///
/// This is keyword matching, not a luminance computation: tokens outside the
/// reference sets (most hex values, `rgb()`, `hsl()`) are `Indeterminate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    Light,
    Dark,
    Indeterminate,
}

const LIGHT_COLORS: &[&str] = &[
    "white",
    "#fff",
    "#ffffff",
    "#f0f0f0",
    "#e0e0e0",
    "yellow",
    "lightyellow",
    "lightgray",
    "lightgrey",
    "beige",
];

const DARK_COLORS: &[&str] = &[
    "black",
    "#000",
    "#000000",
    "#333",
    "#666",
    "navy",
    "darkblue",
    "darkgreen",
    "darkred",
    "purple",
];

/// Classify a color token by case-insensitive substring membership.
///
/// The light set is consulted first, so a token containing entries from both
/// sets classifies as `Light`.
pub fn classify_color(token: &str) -> ColorClass {
    let lower = token.trim().to_lowercase();
    if LIGHT_COLORS.iter().any(|c| lower.contains(c)) {
        ColorClass::Light
    } else if DARK_COLORS.iter().any(|c| lower.contains(c)) {
        ColorClass::Dark
    } else {
        ColorClass::Indeterminate
    }
}

impl ColorClass {
    /// Both tokens fall in the same known bucket.
    pub fn clashes_with(self, other: ColorClass) -> bool {
        self == other && self != ColorClass::Indeterminate
    }
}
