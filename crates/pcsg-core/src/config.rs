//! Club configuration.
//!
//! Loaded once at startup from YAML. serde_yaml also reads the JSON config
//! the generator has always used, and its space-separated keys
//! ("club name", "email host", ...) are accepted as aliases.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SummaryError;
use crate::lenient;

/// Immutable settings passed explicitly into the engine and the batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// This club's name as it appears in toss descriptions
    #[serde(alias = "club name")]
    pub club_name: String,

    /// Scoring API site id used to enumerate results
    #[serde(default, alias = "play cricket club site id", deserialize_with = "lenient::text")]
    pub site_id: String,

    /// Prefix for competitions in the league's division set
    #[serde(default = "default_league_abbreviation")]
    pub league_abbreviation: String,

    /// Uppercased competition names that get the league prefix
    #[serde(default = "default_divisions")]
    pub divisions: BTreeSet<String>,

    /// How many days back the batch looks for results
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    #[serde(default)]
    pub output: OutputDirs,

    #[serde(default, alias = "email host")]
    pub email_host: Option<String>,
    #[serde(default, alias = "email port")]
    pub email_port: Option<u16>,
    #[serde(default, alias = "from email address")]
    pub from_address: Option<String>,
    #[serde(default, alias = "to email addresses")]
    pub to_addresses: Vec<String>,

    /// Upload target, e.g. "gphotos:album/club_scorecards"
    #[serde(default, alias = "sync remote")]
    pub sync_remote: Option<String>,
}

/// Mail transport settings, present only when the config names a host and sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub host: String,
    pub port: u16,
    pub from: String,
    pub to: Vec<String>,
}

/// Where summaries are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDirs {
    /// Persisted summary records
    pub json: PathBuf,
    /// Rendered images awaiting distribution
    pub temp: PathBuf,
    /// Images already mailed or uploaded; the idempotency ledger
    pub sent: PathBuf,
}

impl OutputDirs {
    /// Standard layout under a root directory
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            json: root.join("json"),
            temp: root.join("jpg").join("temp"),
            sent: root.join("jpg").join("sent"),
        }
    }
}

impl Default for OutputDirs {
    fn default() -> Self {
        Self::under("output")
    }
}

pub const DEFAULT_SMTP_PORT: u16 = 587;

fn default_league_abbreviation() -> String {
    "DCL".to_string()
}

fn default_lookback_days() -> u32 {
    7
}

/// The league's sixteen regional divisions
pub fn default_divisions() -> BTreeSet<String> {
    let mut divisions: BTreeSet<String> = ["PREMIER DIVISION", "A DIVISION", "B DIVISION", "C DIVISION"]
        .into_iter()
        .map(String::from)
        .collect();
    for tier in ["C", "D", "E", "F", "G", "H"] {
        for side in ["EAST", "WEST"] {
            divisions.insert(format!("{tier} DIVISION {side}"));
        }
    }
    divisions
}

impl SummaryConfig {
    /// Config with defaults for everything but the club name
    pub fn new(club_name: impl Into<String>) -> Self {
        Self {
            club_name: club_name.into(),
            site_id: String::new(),
            league_abbreviation: default_league_abbreviation(),
            divisions: default_divisions(),
            lookback_days: default_lookback_days(),
            output: OutputDirs::default(),
            email_host: None,
            email_port: None,
            from_address: None,
            to_addresses: Vec::new(),
            sync_remote: None,
        }
    }

    /// Load from a YAML (or JSON) file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SummaryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SummaryError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), club = %config.club_name, "loaded club config");
        Ok(config)
    }

    /// Parse from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, SummaryError> {
        let config: SummaryConfig = serde_yaml::from_str(yaml)
            .map_err(|e| SummaryError::Config(format!("invalid club config: {}", e)))?;
        if config.club_name.trim().is_empty() {
            return Err(SummaryError::Config("club name must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Mail settings, if the config has enough to send
    pub fn email(&self) -> Option<EmailSettings> {
        let host = self.email_host.clone()?;
        let from = self.from_address.clone()?;
        if self.to_addresses.is_empty() {
            return None;
        }
        Some(EmailSettings {
            host,
            port: self.email_port.unwrap_or(DEFAULT_SMTP_PORT),
            from,
            to: self.to_addresses.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_divisions() {
        let divisions = default_divisions();
        assert_eq!(divisions.len(), 16);
        assert!(divisions.contains("PREMIER DIVISION"));
        assert!(divisions.contains("C DIVISION WEST"));
        assert!(divisions.contains("H DIVISION EAST"));
        assert!(!divisions.contains("I DIVISION EAST"));
    }

    #[test]
    fn test_yaml_defaults() {
        let config = SummaryConfig::from_yaml("club_name: Exeter CC\nsite_id: 2641\n").unwrap();
        assert_eq!(config.club_name, "Exeter CC");
        assert_eq!(config.site_id, "2641");
        assert_eq!(config.league_abbreviation, "DCL");
        assert_eq!(config.lookback_days, 7);
        assert_eq!(config.output, OutputDirs::under("output"));
        assert!(config.email().is_none());
    }

    #[test]
    fn test_legacy_json_keys() {
        let json = r#"{
            "club name": "Exeter CC",
            "play cricket club site id": "2641",
            "email host": "smtp.example.com",
            "email port": 25,
            "from email address": "scores@example.com",
            "to email addresses": ["captain@example.com"],
            "text fields": []
        }"#;
        let config = SummaryConfig::from_yaml(json).unwrap();
        let email = config.email().unwrap();
        assert_eq!(email.host, "smtp.example.com");
        assert_eq!(email.port, 25);
        assert_eq!(email.to, vec!["captain@example.com".to_string()]);
    }

    #[test]
    fn test_missing_club_name_is_config_error() {
        let err = SummaryConfig::from_yaml("site_id: 1\n").unwrap_err();
        assert!(err.is_fatal());
        let err = SummaryConfig::from_yaml("club_name: '  '\n").unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_output_dirs_under_root() {
        let dirs = OutputDirs::under("/tmp/pcsg");
        assert_eq!(dirs.sent, PathBuf::from("/tmp/pcsg/jpg/sent"));
    }
}
