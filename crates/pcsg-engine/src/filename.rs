//! Filename: the idempotency key of a match.
//!
//! Built only from match metadata, so two derivations for the same fixture
//! agree regardless of how the scorecard entries are ordered.

use chrono::NaiveDate;
use pcsg_core::{MatchRecord, SummaryError};

use crate::normalizer::normalize_text;

/// Match date format used by the scoring API
pub const MATCH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Date format leading every filename, so names sort chronologically
pub const FILENAME_DATE_FORMAT: &str = "%Y_%m_%d";

pub fn parse_match_date(raw: &str) -> Result<NaiveDate, SummaryError> {
    NaiveDate::parse_from_str(raw.trim(), MATCH_DATE_FORMAT)
        .map_err(|e| SummaryError::DataShape(format!("match date '{}': {}", raw, e)))
}

/// "2024_06_15 Exeter CC 1st XI vs Sidmouth CC 1st XI"
pub fn derive_filename(record: &MatchRecord) -> Result<String, SummaryError> {
    let date = parse_match_date(&record.match_date)?;
    Ok(format!(
        "{} {} {} vs {} {}",
        date.format(FILENAME_DATE_FORMAT),
        normalize_text(&record.home_club_name),
        normalize_text(&record.home_team_name),
        normalize_text(&record.away_club_name),
        normalize_text(&record.away_team_name),
    ))
}
