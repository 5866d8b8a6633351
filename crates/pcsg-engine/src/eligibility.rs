//! Eligibility filter: the two-innings shape every derivation relies on.

use pcsg_core::{Innings, MatchRecord, SummaryError};

/// Both innings, once the record is known to have them filled in
pub fn check_eligibility(record: &MatchRecord) -> Result<(&Innings, &Innings), SummaryError> {
    let (first, second) = match record.innings.as_slice() {
        [first, second, ..] => (first, second),
        other => {
            return Err(SummaryError::DataShape(format!(
                "expected 2 innings, found {}",
                other.len()
            )))
        }
    };

    for (n, innings) in [(1, first), (2, second)] {
        if innings.bat.is_empty() {
            return Err(SummaryError::DataShape(format!("innings {n} has no batting entries")));
        }
        if innings.bowl.is_empty() {
            return Err(SummaryError::DataShape(format!("innings {n} has no bowling entries")));
        }
    }

    Ok((first, second))
}

pub fn is_eligible(record: &MatchRecord) -> bool {
    check_eligibility(record).is_ok()
}
