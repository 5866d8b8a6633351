//! Text normalization for club, team and result wording.
//!
//! Scoring API names carry league jargon that does not fit on a graphic:
//! - " - " separators between club and team
//! - "Under 15" age groups
//! - county suffixes and cup aliases
//! - punctuation the template font renders badly
//!
//! Rules run in the order listed. Later rules see the output of earlier
//! ones, so the order is part of the contract.

/// Ordered (pattern, replacement) pairs, matched case-sensitively
pub const REPLACEMENT_RULES: &[(&str, &str)] = &[
    (" - ", " "),
    ("Under ", "U"),
    (", Devon", ""),
    ("Devon and County T20 Cups", "T20 XI"),
    ("Twenty20 ", ""),
    ("!", ""),
    ("/", " "),
    ("'", ""),
];

/// Apply every replacement rule in order
pub fn normalize_text(raw: &str) -> String {
    apply_rules(raw, REPLACEMENT_RULES)
}

/// Normalize, then uppercase for display
pub fn normalize_upper(raw: &str) -> String {
    normalize_text(raw).to_uppercase()
}

/// Fold a rule list over the input
pub fn apply_rules(raw: &str, rules: &[(&str, &str)]) -> String {
    rules
        .iter()
        .fold(raw.to_string(), |text, (pattern, replacement)| {
            text.replace(pattern, replacement)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_and_age_group() {
        assert_eq!(normalize_text("Exeter CC - Under 15"), "Exeter CC U15");
        assert_eq!(normalize_upper("Exeter CC - Under 15"), "EXETER CC U15");
    }

    #[test]
    fn test_county_and_cups() {
        assert_eq!(normalize_text("Sidmouth, Devon"), "Sidmouth");
        assert_eq!(normalize_text("Devon and County T20 Cups"), "T20 XI");
        assert_eq!(normalize_text("Twenty20 Cup"), "Cup");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(normalize_text("St John's!"), "St Johns");
        assert_eq!(normalize_text("Exe/Teign"), "Exe Teign");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(normalize_text("UNDER 13"), "UNDER 13");
    }

    #[test]
    fn test_order_matters() {
        assert_eq!(normalize_text("Devon and County T20 Cups - Twenty20 Final"), "T20 XI Final");

        // "/" becomes a space after separators are gone, so a new " - " survives
        let reversed: Vec<(&str, &str)> = REPLACEMENT_RULES.iter().rev().copied().collect();
        assert_eq!(apply_rules("Exe/- Teign", REPLACEMENT_RULES), "Exe - Teign");
        assert_eq!(apply_rules("Exe/- Teign", &reversed), "Exe Teign");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_text(""), "");
    }
}
