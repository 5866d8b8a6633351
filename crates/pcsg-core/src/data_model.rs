//! Data Model: MatchRecord as delivered by the scoring API
//!
//! Field names follow the API's `match_detail` JSON so records decode
//! straight from a response body. Every field has a default so that a
//! partial record reaches the eligibility filter instead of failing decode.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::SummaryError;
use crate::lenient;

/// Body of a `match_detail` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetailResponse {
    #[serde(default)]
    pub match_details: Vec<MatchRecord>,
}

impl MatchDetailResponse {
    /// Take the single match record the response carries
    pub fn into_record(self) -> Result<MatchRecord, SummaryError> {
        self.match_details
            .into_iter()
            .next()
            .ok_or_else(|| SummaryError::DataShape("match_details is empty".to_string()))
    }
}

/// One match as reported by the scoring API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub competition_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub toss: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub result_description: String,
    /// `dd/mm/YYYY`
    #[serde(default, deserialize_with = "lenient::text")]
    pub match_date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub home_club_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub home_team_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub away_club_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub away_team_name: String,
    #[serde(default)]
    pub innings: Vec<Innings>,
}

/// One team's batting turn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Innings {
    #[serde(default, deserialize_with = "lenient::text")]
    pub team_batting_name: String,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub runs: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub wickets: Option<u32>,
    #[serde(default)]
    pub overs: Overs,
    /// Rain-rule target for the side batting second
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub revised_target_runs: Option<u32>,
    #[serde(default)]
    pub bat: Vec<BattingEntry>,
    #[serde(default)]
    pub bowl: Vec<BowlingEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub batsman_name: String,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub runs: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub balls: Option<u32>,
    /// Dismissal description, e.g. "not out", "did not bat", "ct Smith b Jones"
    #[serde(default, deserialize_with = "lenient::text")]
    pub how_out: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub bowler_name: String,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub wickets: Option<u32>,
    /// Runs conceded
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub runs: Option<u32>,
    #[serde(default)]
    pub overs: Overs,
}

impl BowlingEntry {
    /// Runs conceded per over, `None` when overs are missing or zero
    pub fn run_rate(&self) -> Option<f64> {
        let overs = self.overs.as_f64().filter(|o| *o > 0.0)?;
        self.runs.map(|runs| runs as f64 / overs)
    }
}

/// Overs bowled, kept as the text the API sent.
///
/// Partial overs use balls after the point ("9.3" is nine overs and three
/// balls), so the text is the value of record and the float is only a view
/// for whole-number detection and ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Overs {
    raw: String,
}

impl Overs {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl<'de> Deserialize<'de> for Overs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        };
        Ok(Overs { raw })
    }
}

/// Body of a `result_summary` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSummaryResponse {
    #[serde(default)]
    pub result_summary: Vec<ResultEntry>,
}

/// One match in the result summary listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(deserialize_with = "lenient::id")]
    pub id: u64,
    /// Result code; "M" marks abandoned / no result
    #[serde(default, deserialize_with = "lenient::text")]
    pub result: String,
}

/// Result code the API uses for matches with no result
pub const NO_RESULT_CODE: &str = "M";

/// Match ids worth summarizing, in listing order
pub fn candidate_match_ids(entries: &[ResultEntry]) -> Vec<u64> {
    entries
        .iter()
        .filter(|e| e.result != NO_RESULT_CODE)
        .map(|e| e.id)
        .collect()
}
