//! Input collaborators: the scoring API and the club logo scraper.
//!
//! Both are blocking and fail-fast. An `Err` aborts processing of the one
//! match it concerns; the batch logs it and carries on.
use chrono::{Datelike, Duration, NaiveDate};

use crate::data_model::{MatchRecord, ResultEntry};
use crate::error::SummaryError;

/// Date format the scoring API expects in query parameters
pub const API_DATE_FORMAT: &str = "%d/%m/%Y";

/// Source of match results
pub trait MatchDataSource {
    /// Full scorecard for one match
    fn match_detail(&self, match_id: u64) -> Result<MatchRecord, SummaryError>;

    /// Results listing for a club site over a date window
    fn result_summary(&self, query: &ResultQuery) -> Result<Vec<ResultEntry>, SummaryError>;
}

/// Parameters of a result summary request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultQuery {
    pub site_id: String,
    pub season: i32,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl ResultQuery {
    /// The last `lookback_days` up to and including `today`
    pub fn for_window(site_id: impl Into<String>, today: NaiveDate, lookback_days: u32) -> Self {
        Self {
            site_id: site_id.into(),
            season: today.year(),
            from_date: Some(today - Duration::days(i64::from(lookback_days))),
            to_date: None,
        }
    }

    /// Query string pairs in the API's own formats
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("site_id", self.site_id.clone()),
            ("season", self.season.to_string()),
        ];
        if let Some(from) = self.from_date {
            params.push(("from_match_date", from.format(API_DATE_FORMAT).to_string()));
        }
        if let Some(to) = self.to_date {
            params.push(("end_match_date", to.format(API_DATE_FORMAT).to_string()));
        }
        params
    }
}

/// Logo images for the two clubs in a match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubLogos {
    pub home: Vec<u8>,
    pub away: Vec<u8>,
}

/// Fetches club logos from the match's public results page
pub trait LogoFetcher {
    fn fetch_logos(&self, match_id: u64) -> Result<ClubLogos, SummaryError>;
}
