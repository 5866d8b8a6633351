//! What a batch did with each match id.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Record and image written; the image awaits distribution
    Generated { filename: String, image: PathBuf },
    /// Already in the sent ledger, or produced earlier in this batch
    AlreadySent { filename: String },
    /// Excluded by eligibility or result derivation
    Ineligible { reason: String },
    /// A collaborator or the filesystem failed for this match
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub match_id: u64,
    pub outcome: MatchOutcome,
}

/// Outcomes in match id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub matches: Vec<MatchReport>,
}

impl BatchReport {
    pub fn push(&mut self, match_id: u64, outcome: MatchOutcome) {
        self.matches.push(MatchReport { match_id, outcome });
    }

    /// Images generated by this batch, in order
    pub fn generated_images(&self) -> Vec<PathBuf> {
        self.matches
            .iter()
            .filter_map(|m| match &m.outcome {
                MatchOutcome::Generated { image, .. } => Some(image.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn generated(&self) -> usize {
        self.count(|o| matches!(o, MatchOutcome::Generated { .. }))
    }

    pub fn already_sent(&self) -> usize {
        self.count(|o| matches!(o, MatchOutcome::AlreadySent { .. }))
    }

    pub fn ineligible(&self) -> usize {
        self.count(|o| matches!(o, MatchOutcome::Ineligible { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, MatchOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&MatchOutcome) -> bool) -> usize {
        self.matches.iter().filter(|m| pred(&m.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_images() {
        let mut report = BatchReport::default();
        report.push(
            1,
            MatchOutcome::Generated {
                filename: "a".into(),
                image: PathBuf::from("temp/a.JPG"),
            },
        );
        report.push(2, MatchOutcome::AlreadySent { filename: "b".into() });
        report.push(3, MatchOutcome::Ineligible { reason: "one innings".into() });
        report.push(
            4,
            MatchOutcome::Generated {
                filename: "c".into(),
                image: PathBuf::from("temp/c.JPG"),
            },
        );

        assert_eq!(report.generated(), 2);
        assert_eq!(report.already_sent(), 1);
        assert_eq!(report.ineligible(), 1);
        assert_eq!(report.failed(), 0);
        assert_eq!(
            report.generated_images(),
            vec![PathBuf::from("temp/a.JPG"), PathBuf::from("temp/c.JPG")]
        );
        assert_eq!(report.matches[2].match_id, 3);
    }
}
