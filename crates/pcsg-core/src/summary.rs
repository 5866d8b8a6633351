//! SummaryRecord: the flat display record derived from one match.
//!
//! The record is both what gets persisted (a JSON object of field name to
//! string) and what the renderer looks fields up in, so the field names here
//! are the contract shared with the field layout.
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Constant heading carried as its own field so layouts can place it
pub const MATCH_SUMMARY_HEADING: &str = "MATCH SUMMARY";

/// Number of batters and bowlers surfaced per innings
pub const LEADERBOARD_SIZE: usize = 3;

/// A ranked player: display name plus score or figures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerLine {
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InningsSummary {
    pub team: String,
    /// "OVERS 50"
    pub overs: String,
    /// "201/7"
    pub score: String,
    pub batters: [PlayerLine; LEADERBOARD_SIZE],
    pub bowlers: [PlayerLine; LEADERBOARD_SIZE],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRecord {
    pub match_type: String,
    pub toss: String,
    pub innings: [InningsSummary; 2],
    pub result: String,
    /// Template image the renderer draws onto
    pub template_filename: String,
    /// Idempotency key; also the stem of every file written for the match
    pub filename: String,
}

impl SummaryRecord {
    /// All display fields in persisted order
    pub fn fields(&self) -> Vec<(String, &str)> {
        let mut fields = vec![
            ("match_type".to_string(), self.match_type.as_str()),
            ("match_summary".to_string(), MATCH_SUMMARY_HEADING),
            ("toss".to_string(), self.toss.as_str()),
        ];

        for (i, innings) in self.innings.iter().enumerate() {
            let n = i + 1;
            fields.push((format!("innings_{n}_team"), innings.team.as_str()));
            fields.push((format!("innings_{n}_overs"), innings.overs.as_str()));
            fields.push((format!("innings_{n}_score"), innings.score.as_str()));
            for (k, line) in innings.batters.iter().enumerate() {
                fields.push((format!("innings_{n}_bat_{}_name", k + 1), line.name.as_str()));
                fields.push((format!("innings_{n}_bat_{}_runs", k + 1), line.detail.as_str()));
            }
            for (k, line) in innings.bowlers.iter().enumerate() {
                fields.push((format!("innings_{n}_bowl_{}_name", k + 1), line.name.as_str()));
                fields.push((format!("innings_{n}_bowl_{}_figures", k + 1), line.detail.as_str()));
            }
        }

        fields.push(("result".to_string(), self.result.as_str()));
        fields.push(("template_filename".to_string(), self.template_filename.as_str()));
        fields.push(("filename".to_string(), self.filename.as_str()));
        fields
    }

    /// Look up one display field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Every field name a layout may reference
    pub fn field_names() -> Vec<String> {
        SummaryRecord::default()
            .fields()
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }
}

impl Serialize for SummaryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
