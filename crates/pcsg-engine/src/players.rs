//! Per-player formatting: names, batting scores, bowling figures, overs.

use pcsg_core::Overs;

/// Longest player name shown in full
pub const MAX_PLAYER_NAME_CHARS: usize = 20;

pub const DID_NOT_BAT: &str = "did not bat";
pub const NOT_OUT: &str = "not out";

/// Uppercased player name; long names shrink to initial and second word
/// ("Christopher Montgomery-Smith" -> "C MONTGOMERY-SMITH").
pub fn format_player_name(name: &str) -> String {
    if name.chars().count() <= MAX_PLAYER_NAME_CHARS {
        return name.to_uppercase();
    }

    let mut words = name.split_whitespace();
    let initial = words.next().and_then(|w| w.chars().next());
    match (initial, words.next()) {
        (Some(initial), Some(second)) => format!("{initial} {second}").to_uppercase(),
        _ => name.to_uppercase(),
    }
}

/// "45", "45*" for not out, with " (30)" when balls faced are known.
/// Empty for a batter who did not bat or has no runs recorded.
pub fn format_batting_score(runs: Option<u32>, balls: Option<u32>, how_out: &str) -> String {
    if how_out == DID_NOT_BAT {
        return String::new();
    }
    let Some(runs) = runs else {
        return String::new();
    };

    let mut score = runs.to_string();
    if how_out == NOT_OUT {
        score.push('*');
    }
    if let Some(balls) = balls {
        score.push_str(&format!(" ({balls})"));
    }
    score
}

/// "3-41 (9.3)"; missing counts show as 0
pub fn format_bowling_figures(wickets: Option<u32>, runs: Option<u32>, overs: &Overs) -> String {
    format!(
        "{}-{} ({})",
        wickets.unwrap_or(0),
        runs.unwrap_or(0),
        format_overs(overs)
    )
}

/// Whole overs drop the fraction ("10.0" -> "10"); anything else is passed
/// through untouched, since "9.3" counts balls and is not a decimal.
pub fn format_overs(overs: &Overs) -> String {
    match overs.as_f64() {
        Some(value) if value.fract() == 0.0 => format!("{}", value as i64),
        _ => overs.raw().to_string(),
    }
}
