//! PCSG Batch: idempotent summary generation and distribution
//!
//! Drives the engine over a window of recent results:
//!
//! ```text
//! result_summary → candidate ids → match_detail → derive_summary
//!                                                    ↓
//!                         sent ledger check → logos → record + image
//!                                                    ↓
//!                                        email / sync → sent ledger
//! ```
//!
//! The summary filename is the idempotency key. Running the same window
//! twice after distribution produces nothing new.
//!
//! # Example
//!
//! ```ignore
//! use pcsg_batch::{BatchRunner, Collaborators};
//!
//! let mut runner = BatchRunner::new(&config, &layout, Collaborators { source, logos, renderer })?;
//! let report = runner.run(today)?;
//! runner.email(&mailer, &MessageTemplates::default(), today, &report.generated_images());
//! ```

pub mod distribute;
pub mod ledger;
pub mod report;
pub mod runner;
pub mod store;

pub use distribute::{email_summaries, sync_summaries, FileSync, Mailer};
pub use ledger::SentLedger;
pub use report::{BatchReport, MatchOutcome, MatchReport};
pub use runner::{BatchRunner, Collaborators};
pub use store::SummaryStore;
