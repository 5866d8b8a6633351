//! Team, division and template naming.

use std::collections::BTreeSet;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalizer::normalize_upper;

/// Widest team name the template has room for
pub const MAX_TEAM_NAME_CHARS: usize = 28;

/// Separator between club and team/league in API names
const NAME_SEPARATOR: &str = " - ";

lazy_static! {
    /// Toss decision in uppercased toss text
    static ref TOSS_DECISION: Regex = Regex::new(r"ELECTED TO (BAT|FIELD)").unwrap();
}

/// Display name for a batting side: club part only, normalized, uppercased,
/// and trimmed word by word to fit the template.
pub fn short_team_name(full_name: &str) -> String {
    let base = full_name.split(NAME_SEPARATOR).next().unwrap_or(full_name);
    let mut name = normalize_upper(base);

    while name.chars().count() > MAX_TEAM_NAME_CHARS {
        match name.rsplit_once(' ') {
            Some((head, _)) => name = head.to_string(),
            None => return name.chars().take(MAX_TEAM_NAME_CHARS).collect(),
        }
    }
    name
}

/// Competition label, prefixed with the league abbreviation when it is one
/// of the league's own divisions.
pub fn classify_match_type(competition_name: &str, divisions: &BTreeSet<String>, league: &str) -> String {
    let upper = competition_name.to_uppercase();
    if divisions.contains(&upper) {
        format!("{league} {upper}")
    } else {
        upper
    }
}

/// Template family, picked from the team names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Juniors,
    Womens,
    Mens,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Juniors => "juniors",
            Self::Womens => "womens",
            Self::Mens => "mens",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Juniors outrank womens: an under-age girls' side is a junior fixture
pub fn classify_template_category(home_team_name: &str, away_team_name: &str) -> TemplateCategory {
    let home = home_team_name.to_uppercase();
    let away = away_team_name.to_uppercase();
    if home.contains("UNDER") || away.contains("UNDER") {
        TemplateCategory::Juniors
    } else if home.contains("WOMEN") || away.contains("WOMEN") {
        TemplateCategory::Womens
    } else {
        TemplateCategory::Mens
    }
}

/// Whether this club batted or fielded first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattingOrder {
    BattingFirst,
    FieldingFirst,
}

impl BattingOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BattingFirst => "batting_first",
            Self::FieldingFirst => "fielding_first",
        }
    }

    fn inverted(self) -> Self {
        match self {
            Self::BattingFirst => Self::FieldingFirst,
            Self::FieldingFirst => Self::BattingFirst,
        }
    }
}

impl fmt::Display for BattingOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read this club's batting order from the toss description.
///
/// The toss text names the side that won the toss. When that is not this
/// club the decision applies to the opponent and the order inverts. `None`
/// when the text has no recognizable decision.
pub fn classify_batting_order(toss: &str, club_name: &str) -> Option<BattingOrder> {
    let toss = toss.to_uppercase();
    let decision = match TOSS_DECISION.captures(&toss)?.get(1)?.as_str() {
        "BAT" => BattingOrder::BattingFirst,
        _ => BattingOrder::FieldingFirst,
    };

    let club = club_name.trim().to_uppercase();
    if !club.is_empty() && toss.contains(&club) {
        Some(decision)
    } else {
        Some(decision.inverted())
    }
}

/// Template image file for a category and batting order
pub fn template_filename(category: TemplateCategory, order: BattingOrder) -> String {
    format!("{category}_{order}.JPG")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcsg_core::config::default_divisions;

    #[test]
    fn test_short_name_drops_league() {
        assert_eq!(short_team_name("Topsham CC 1st XI - Devon Cricket League"), "TOPSHAM CC 1ST XI");
    }

    #[test]
    fn test_short_name_drops_trailing_words() {
        let name = short_team_name("Exeter Saint Thomas Cricket Club Sunday XI");
        assert_eq!(name, "EXETER SAINT THOMAS CRICKET");
        assert!(name.chars().count() <= MAX_TEAM_NAME_CHARS);
    }

    #[test]
    fn test_short_name_hard_truncates_single_word() {
        let name = short_team_name("Supercalifragilisticexpialidocious Nomads");
        assert_eq!(name, "SUPERCALIFRAGILISTICEXPIALID");
        assert_eq!(name.chars().count(), MAX_TEAM_NAME_CHARS);
    }

    #[test]
    fn test_short_name_exactly_limit() {
        let name = short_team_name("Abcdefghij Klmnopqrst Uvwxyz");
        assert_eq!(name.chars().count(), 28);
        assert_eq!(name, "ABCDEFGHIJ KLMNOPQRST UVWXYZ");
    }

    #[test]
    fn test_match_type_division() {
        let divisions = default_divisions();
        assert_eq!(classify_match_type("Premier Division", &divisions, "DCL"), "DCL PREMIER DIVISION");
        assert_eq!(classify_match_type("E Division West", &divisions, "DCL"), "DCL E DIVISION WEST");
        assert_eq!(classify_match_type("Friendly", &divisions, "DCL"), "FRIENDLY");
    }

    #[test]
    fn test_template_category() {
        assert_eq!(classify_template_category("Exeter CC - Under 15", "Sidmouth"), TemplateCategory::Juniors);
        assert_eq!(classify_template_category("Exeter Women", "Sidmouth Under 13 Girls"), TemplateCategory::Juniors);
        assert_eq!(classify_template_category("Exeter", "Sidmouth women"), TemplateCategory::Womens);
        assert_eq!(classify_template_category("1st XI", "2nd XI"), TemplateCategory::Mens);
    }

    #[test]
    fn test_batting_order_own_toss() {
        let order = classify_batting_order("Exeter CC won the toss and elected to bat", "Exeter CC");
        assert_eq!(order, Some(BattingOrder::BattingFirst));
        let order = classify_batting_order("Exeter CC won the toss and elected to field", "Exeter CC");
        assert_eq!(order, Some(BattingOrder::FieldingFirst));
    }

    #[test]
    fn test_batting_order_opponent_toss() {
        let order = classify_batting_order("Sidmouth CC won the toss and elected to bat", "Exeter CC");
        assert_eq!(order, Some(BattingOrder::FieldingFirst));
        let order = classify_batting_order("Sidmouth CC won the toss and elected to field", "exeter cc");
        assert_eq!(order, Some(BattingOrder::BattingFirst));
    }

    #[test]
    fn test_batting_order_unknown() {
        assert_eq!(classify_batting_order("Toss not recorded", "Exeter CC"), None);
        assert_eq!(classify_batting_order("", "Exeter CC"), None);
    }

    #[test]
    fn test_template_filename() {
        assert_eq!(
            template_filename(TemplateCategory::Womens, BattingOrder::FieldingFirst),
            "womens_fielding_first.JPG"
        );
    }
}
