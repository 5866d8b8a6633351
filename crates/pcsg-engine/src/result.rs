//! Result sentence: "EXETER CC WON BY 50 RUNS".

use pcsg_core::{Innings, MatchRecord};

use crate::normalizer::normalize_upper;

pub const ABANDONED_DESCRIPTION: &str = "Abandoned";
pub const ABANDONED_SENTENCE: &str = "MATCH ABANDONED";

/// Wickets available to a side in one innings
pub const WICKETS_PER_INNINGS: i64 = 10;

/// Derive the result line from the API's result description.
///
/// The side named in the description decides the margin: the side batting
/// first wins by runs, the side batting second by wickets. `None` when the
/// description names neither side or the counts needed for the margin are
/// missing; such a match cannot be summarized.
pub fn derive_result_sentence(record: &MatchRecord) -> Option<String> {
    let description = record.result_description.as_str();
    if description == ABANDONED_DESCRIPTION {
        return Some(ABANDONED_SENTENCE.to_string());
    }

    let first = record.innings.first()?;
    let second = record.innings.get(1)?;

    if names_side(description, first) {
        let target = i64::from(target_runs(first, second)?);
        let margin = target - i64::from(second.runs?);
        Some(format!("{} BY {} RUNS", normalize_upper(description), margin))
    } else if names_side(description, second) {
        let margin = WICKETS_PER_INNINGS - i64::from(second.wickets?);
        Some(format!("{} BY {} WICKETS", normalize_upper(description), margin))
    } else {
        None
    }
}

/// Runs the side batting second was chasing: the revised target when one
/// was set, otherwise the first innings total.
pub fn target_runs(first: &Innings, second: &Innings) -> Option<u32> {
    match second.revised_target_runs {
        Some(target) if target > 0 => Some(target),
        _ => first.runs,
    }
}

fn names_side(description: &str, innings: &Innings) -> bool {
    let team = innings.team_batting_name.as_str();
    !team.is_empty() && description.contains(team)
}
