use std::fmt;
use std::str::FromStr;

/// CSS length units recognized in `font-size` declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontUnit {
    Px,
    Pt,
    Em,
    Rem,
    Percent,
}

/// `(unit, suffix, divisor, factor)`: pixels = magnitude / divisor * factor.
/// `em`/`rem`/`%` assume a 16px base size.
const UNIT_TABLE: [(FontUnit, &str, f64, f64); 5] = [
    (FontUnit::Px, "px", 1.0, 1.0),
    (FontUnit::Pt, "pt", 1.0, 1.33),
    (FontUnit::Em, "em", 1.0, 16.0),
    (FontUnit::Rem, "rem", 1.0, 16.0),
    (FontUnit::Percent, "%", 100.0, 16.0),
];

impl FontUnit {
    fn entry(self) -> (FontUnit, &'static str, f64, f64) {
        UNIT_TABLE
            .iter()
            .copied()
            .find(|(unit, ..)| *unit == self)
            .unwrap_or((self, "px", 1.0, 1.0))
    }

    pub fn suffix(self) -> &'static str {
        self.entry().1
    }
}

impl fmt::Display for FontUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for FontUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "percent" {
            return Ok(FontUnit::Percent);
        }
        UNIT_TABLE
            .iter()
            .find(|(_, suffix, ..)| *suffix == lower)
            .map(|(unit, ..)| *unit)
            .ok_or_else(|| format!("Unknown font-size unit: {}", s))
    }
}

/// Approximate pixel size for a font-size magnitude.
pub fn normalize_to_pixels(magnitude: f64, unit: FontUnit) -> f64 {
    let (_, _, divisor, factor) = unit.entry();
    magnitude / divisor * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn conversion_table_matches_fixed_ratios() {
        assert!(approx(normalize_to_pixels(8.0, FontUnit::Px), 8.0));
        assert!(approx(normalize_to_pixels(9.0, FontUnit::Pt), 11.97));
        assert!(approx(normalize_to_pixels(1.0, FontUnit::Em), 16.0));
        assert!(approx(normalize_to_pixels(0.5, FontUnit::Rem), 8.0));
        assert!(approx(normalize_to_pixels(75.0, FontUnit::Percent), 12.0));
    }

    #[test]
    fn nine_points_stays_below_twelve_pixels() {
        let px = normalize_to_pixels(9.0, FontUnit::Pt);
        assert!(px < 12.0);
        assert_eq!(format!("{:.1}", px), "12.0");
    }

    #[test]
    fn parses_suffixes_case_insensitively() {
        assert_eq!("PX".parse::<FontUnit>(), Ok(FontUnit::Px));
        assert_eq!("Rem".parse::<FontUnit>(), Ok(FontUnit::Rem));
        assert_eq!("%".parse::<FontUnit>(), Ok(FontUnit::Percent));
        assert_eq!("percent".parse::<FontUnit>(), Ok(FontUnit::Percent));
        assert!("vw".parse::<FontUnit>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for (unit, ..) in UNIT_TABLE {
            assert_eq!(unit.to_string().parse::<FontUnit>(), Ok(unit));
        }
    }
}
