//! PCSG Engine: match record to display summary
//!
//! A deterministic, pure transformation from one play-cricket
//! `MatchRecord` into the flat `SummaryRecord` the renderer and the
//! distribution steps consume.
//!
//! # Pipeline
//!
//! ```text
//! MatchRecord → eligibility → leaderboards → naming/result/filename → SummaryRecord
//!                    ↓                               ↓
//!               DataShape                    UnrecognizedResult
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pcsg_core::SummaryConfig;
//! use pcsg_engine::build_summary;
//!
//! let config = SummaryConfig::new("Exeter CC");
//! if let Some(summary) = build_summary(&record, &config) {
//!     println!("{}", summary.result);
//! }
//! ```

pub mod eligibility;
pub mod filename;
pub mod leaderboard;
pub mod naming;
pub mod normalizer;
pub mod players;
pub mod result;

pub use eligibility::{check_eligibility, is_eligible};
pub use filename::derive_filename;
pub use naming::{
    classify_batting_order, classify_match_type, classify_template_category, short_team_name,
    template_filename, BattingOrder, TemplateCategory,
};
pub use normalizer::{normalize_text, normalize_upper};
pub use players::{format_batting_score, format_bowling_figures, format_overs, format_player_name};
pub use result::derive_result_sentence;

use pcsg_core::{Innings, InningsSummary, MatchRecord, SummaryConfig, SummaryError, SummaryRecord};
use tracing::{debug, info};

/// Derive the summary, or the reason the match cannot be summarized
pub fn derive_summary(record: &MatchRecord, config: &SummaryConfig) -> Result<SummaryRecord, SummaryError> {
    let (first, second) = check_eligibility(record)?;

    let result = derive_result_sentence(record).ok_or_else(|| {
        SummaryError::UnrecognizedResult(format!(
            "cannot derive a result from '{}'",
            record.result_description
        ))
    })?;

    let order = classify_batting_order(&record.toss, &config.club_name).ok_or_else(|| {
        SummaryError::UnrecognizedResult(format!("no toss decision in '{}'", record.toss))
    })?;
    let category = classify_template_category(&record.home_team_name, &record.away_team_name);

    let filename = derive_filename(record)?;
    debug!(filename = %filename, "derived summary fields");

    Ok(SummaryRecord {
        match_type: classify_match_type(
            &record.competition_name,
            &config.divisions,
            &config.league_abbreviation,
        ),
        toss: normalize_upper(&record.toss),
        innings: [summarize_innings(first), summarize_innings(second)],
        result,
        template_filename: template_filename(category, order),
        filename,
    })
}

/// Summary for an eligible match, `None` (logged) for any other
pub fn build_summary(record: &MatchRecord, config: &SummaryConfig) -> Option<SummaryRecord> {
    match derive_summary(record, config) {
        Ok(summary) => Some(summary),
        Err(e) => {
            info!(reason = %e, "match excluded from summary generation");
            None
        }
    }
}

fn summarize_innings(innings: &Innings) -> InningsSummary {
    InningsSummary {
        team: short_team_name(&innings.team_batting_name),
        overs: format!("OVERS {}", format_overs(&innings.overs)),
        score: format!("{}/{}", display_count(innings.runs), display_count(innings.wickets)),
        batters: leaderboard::batting_lines(&innings.bat),
        bowlers: leaderboard::bowling_lines(&innings.bowl),
    }
}

fn display_count(count: Option<u32>) -> String {
    count.map(|c| c.to_string()).unwrap_or_default()
}
