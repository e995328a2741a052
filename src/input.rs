// Input normalizer: validates and canonicalizes the two free-form
// values the user can get wrong, pixel dates and graph colors. Both
// functions are pure so they can be exercised without a console or a
// network.

use chrono::NaiveDate;
use thiserror::Error;

/// The six graph colors accepted by pixe.la.
pub const CANONICAL_COLORS: [&str; 6] = ["shibafu", "momiji", "sora", "ichou", "ajisai", "kuro"];

/// Friendly-name aliases for the canonical colors.
pub const COLOR_ALIASES: [(&str, &str); 6] = [
    ("green", "shibafu"),
    ("red", "momiji"),
    ("blue", "sora"),
    ("yellow", "ichou"),
    ("purple", "ajisai"),
    ("black", "kuro"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    /// The value did not parse as a real calendar date in YYYY-MM-DD form.
    #[error("invalid date {0:?}: please use the format YYYY-MM-DD")]
    InvalidFormat(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The value is neither a canonical color nor a known alias.
    #[error("unknown color {0:?}: pick one of shibafu (green), momiji (red), sora (blue), ichou (yellow), ajisai (purple), kuro (black)")]
    Unknown(String),
}

/// Convert a user-supplied date into the compact `YYYYMMDD` form the
/// service expects. An empty value means "today"; `today` is injected
/// by the caller so the defaulting is testable.
pub fn normalize_date(raw: &str, today: NaiveDate) -> Result<String, DateError> {
    if raw.is_empty() {
        return Ok(today.format("%Y%m%d").to_string());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%Y%m%d").to_string())
        .map_err(|_| DateError::InvalidFormat(raw.to_string()))
}

/// Resolve a color name to its canonical token. Accepts the canonical
/// tokens themselves and the friendly aliases, case-insensitively and
/// ignoring surrounding whitespace.
pub fn resolve_color(raw: &str) -> Result<&'static str, ColorError> {
    let wanted = raw.trim().to_lowercase();
    if let Some(&(_, canonical)) = COLOR_ALIASES.iter().find(|&&(alias, _)| alias == wanted) {
        return Ok(canonical);
    }
    if let Some(&canonical) = CANONICAL_COLORS.iter().find(|&&c| c == wanted) {
        return Ok(canonical);
    }
    Err(ColorError::Unknown(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn empty_date_defaults_to_injected_today() {
        assert_eq!(normalize_date("", today()).unwrap(), "20240309");
    }

    #[test]
    fn dashed_date_is_compacted() {
        assert_eq!(normalize_date("2023-01-05", today()).unwrap(), "20230105");
    }

    #[test]
    fn impossible_date_is_rejected() {
        assert_eq!(
            normalize_date("2023-13-40", today()),
            Err(DateError::InvalidFormat("2023-13-40".into()))
        );
    }

    #[test]
    fn compact_date_without_dashes_is_rejected() {
        assert!(normalize_date("20230105", today()).is_err());
    }

    #[test]
    fn alias_resolves_to_canonical() {
        assert_eq!(resolve_color("red").unwrap(), "momiji");
        assert_eq!(resolve_color("green").unwrap(), "shibafu");
    }

    #[test]
    fn canonical_tokens_pass_through() {
        assert_eq!(resolve_color("momiji").unwrap(), "momiji");
    }

    #[test]
    fn resolution_is_idempotent_for_every_canonical_color() {
        for color in CANONICAL_COLORS {
            let once = resolve_color(color).unwrap();
            assert_eq!(resolve_color(once).unwrap(), once);
        }
    }

    #[test]
    fn casing_and_whitespace_are_ignored() {
        assert_eq!(resolve_color("  Blue ").unwrap(), "sora");
        assert_eq!(resolve_color("KURO").unwrap(), "kuro");
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert_eq!(resolve_color("pink"), Err(ColorError::Unknown("pink".into())));
    }
}
