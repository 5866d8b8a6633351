//! PCSG Core: match model, summary record, configuration and errors
//!
//! Shared vocabulary for the play-cricket summary generator: the raw
//! `MatchRecord` decoded from the scoring API, the flat `SummaryRecord` the
//! engine derives from it, the club `SummaryConfig`, and the collaborator
//! traits that feed the engine.

pub mod config;
pub mod data_model;
pub mod error;
pub mod lenient;
pub mod source;
pub mod summary;

pub use config::{EmailSettings, OutputDirs, SummaryConfig};
pub use data_model::{
    candidate_match_ids, BattingEntry, BowlingEntry, Innings, MatchDetailResponse, MatchRecord,
    Overs, ResultEntry, ResultSummaryResponse,
};
pub use error::SummaryError;
pub use source::{ClubLogos, LogoFetcher, MatchDataSource, ResultQuery};
pub use summary::{InningsSummary, PlayerLine, SummaryRecord, LEADERBOARD_SIZE, MATCH_SUMMARY_HEADING};
