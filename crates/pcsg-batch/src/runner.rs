//! Batch runner: candidate ids → summaries → images → distribution.
//!
//! Matches are processed one at a time. Every collaborator is fail-fast, and
//! an error only ends processing of the match it concerns.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use pcsg_core::{
    candidate_match_ids, LogoFetcher, MatchDataSource, ResultQuery, SummaryConfig, SummaryError, SummaryRecord,
};
use pcsg_engine::derive_summary;
use pcsg_render::{plan_render, FieldLayout, ImageRenderer, MailComposer, MessageTemplates};
use tracing::{error, info, warn};

use crate::distribute::{email_summaries, sync_summaries, FileSync, Mailer};
use crate::ledger::SentLedger;
use crate::report::{BatchReport, MatchOutcome};
use crate::store::SummaryStore;

/// Collaborators the runner drives
pub struct Collaborators<'a> {
    pub source: &'a dyn MatchDataSource,
    pub logos: &'a dyn LogoFetcher,
    pub renderer: &'a dyn ImageRenderer,
}

pub struct BatchRunner<'a> {
    config: &'a SummaryConfig,
    layout: &'a FieldLayout,
    collaborators: Collaborators<'a>,
    store: SummaryStore,
    ledger: SentLedger,
}

impl<'a> BatchRunner<'a> {
    /// Create the output directories and read the sent ledger
    pub fn new(
        config: &'a SummaryConfig,
        layout: &'a FieldLayout,
        collaborators: Collaborators<'a>,
    ) -> Result<Self, SummaryError> {
        let store = SummaryStore::new(config.output.clone());
        store.ensure()?;
        let ledger = SentLedger::load(&config.output.sent)?;
        info!(sent = ledger.len(), "batch runner ready");
        Ok(Self {
            config,
            layout,
            collaborators,
            store,
            ledger,
        })
    }

    pub fn ledger(&self) -> &SentLedger {
        &self.ledger
    }

    /// Process every non-abandoned result in the lookback window ending today
    pub fn run(&mut self, today: NaiveDate) -> Result<BatchReport, SummaryError> {
        let query = ResultQuery::for_window(&self.config.site_id, today, self.config.lookback_days);
        let entries = self.collaborators.source.result_summary(&query)?;
        let ids = candidate_match_ids(&entries);
        info!(results = entries.len(), candidates = ids.len(), "enumerated results");
        Ok(self.run_ids(&ids))
    }

    /// Process the given match ids in order
    pub fn run_ids(&mut self, match_ids: &[u64]) -> BatchReport {
        let mut report = BatchReport::default();
        let mut seen = HashSet::new();
        for &match_id in match_ids {
            let outcome = self.process_match(match_id, &mut seen);
            report.push(match_id, outcome);
        }
        info!(
            generated = report.generated(),
            already_sent = report.already_sent(),
            ineligible = report.ineligible(),
            failed = report.failed(),
            "batch complete"
        );
        report
    }

    fn process_match(&self, match_id: u64, seen: &mut HashSet<String>) -> MatchOutcome {
        let record = match self.collaborators.source.match_detail(match_id) {
            Ok(record) => record,
            Err(e) => {
                warn!(match_id, error = %e, "match detail unavailable");
                return MatchOutcome::Failed { reason: e.to_string() };
            }
        };

        let summary = match derive_summary(&record, self.config) {
            Ok(summary) => summary,
            Err(e) if e.excludes_match() => {
                info!(match_id, reason = %e, "summary graphic not generated: failed validation");
                return MatchOutcome::Ineligible { reason: e.to_string() };
            }
            Err(e) => {
                warn!(match_id, error = %e, "summary derivation failed");
                return MatchOutcome::Failed { reason: e.to_string() };
            }
        };

        let filename = summary.filename.clone();
        if self.ledger.contains(&filename) || seen.contains(&filename) {
            info!(match_id, filename = %filename, "summary graphic not generated: produced previously");
            return MatchOutcome::AlreadySent { filename };
        }

        match self.generate(match_id, &summary, None) {
            Ok(image) => {
                seen.insert(filename.clone());
                info!(match_id, filename = %filename, "summary graphic generated");
                MatchOutcome::Generated { filename, image }
            }
            Err(e) => {
                warn!(match_id, filename = %filename, error = %e, "summary graphic error");
                MatchOutcome::Failed { reason: e.to_string() }
            }
        }
    }

    /// Generate the summary image for one match on demand.
    ///
    /// The sent ledger is not consulted, so a match already mailed can be
    /// drawn again, optionally onto a different template. Every failure is
    /// returned to the caller.
    pub fn generate_one(&self, match_id: u64, template_override: Option<&str>) -> Result<PathBuf, SummaryError> {
        let record = self.collaborators.source.match_detail(match_id)?;
        let summary = derive_summary(&record, self.config)?;
        let image = self.generate(match_id, &summary, template_override)?;
        info!(
            match_id,
            filename = %summary.filename,
            template = ?template_override,
            "summary graphic generated on demand"
        );
        Ok(image)
    }

    fn generate(
        &self,
        match_id: u64,
        summary: &SummaryRecord,
        template_override: Option<&str>,
    ) -> Result<PathBuf, SummaryError> {
        let logos = self.collaborators.logos.fetch_logos(match_id)?;
        self.store.write_record(summary)?;
        let mut job = plan_render(summary, self.layout, logos)?;
        if let Some(template_id) = template_override {
            job.template_id = template_id.to_string();
        }
        let jpeg = self.collaborators.renderer.render(&job)?;
        self.store.write_image(&summary.filename, &jpeg)
    }

    /// Upload new images to the configured remote, if one is set
    pub fn sync(&mut self, sync: &dyn FileSync, images: &[PathBuf]) -> Vec<PathBuf> {
        match &self.config.sync_remote {
            Some(remote) => sync_summaries(sync, remote, images, &mut self.ledger),
            None => {
                info!("no sync remote configured; skipping upload");
                Vec::new()
            }
        }
    }

    /// Mail new images to the configured recipients, if mail is configured.
    /// A failed send is logged and leaves the images unsent.
    pub fn email(
        &mut self,
        mailer: &dyn Mailer,
        templates: &MessageTemplates,
        today: NaiveDate,
        images: &[PathBuf],
    ) -> Vec<PathBuf> {
        let Some(settings) = self.config.email() else {
            info!("email settings incomplete; skipping email");
            return Vec::new();
        };

        let result = MailComposer::new(templates).map_err(SummaryError::from).and_then(|composer| {
            email_summaries(
                mailer,
                &composer,
                &self.config.club_name,
                &settings,
                today,
                images,
                &mut self.ledger,
            )
        });

        match result {
            Ok(mailed) => mailed,
            Err(e) => {
                error!(error = %e, "email sending failed");
                Vec::new()
            }
        }
    }
}
