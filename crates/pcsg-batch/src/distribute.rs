//! Distribution of new summary images by mail and file upload.
//!
//! An image enters the sent ledger only after a successful send or upload.
//! A failed step leaves its images in temp, so the next batch generates and
//! offers them again.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pcsg_core::{EmailSettings, SummaryError};
use pcsg_render::{MailComposer, MailMessage};
use tracing::{info, warn};

use crate::ledger::SentLedger;

/// Mail transport
pub trait Mailer {
    fn send(&self, message: &MailMessage) -> Result<(), SummaryError>;
}

/// Copies one file to a remote location, e.g. a photo album
pub trait FileSync {
    fn upload(&self, path: &Path, remote: &str) -> Result<(), SummaryError>;
}

/// Upload each image on its own; one failure does not stop the rest.
/// Returns the images that were uploaded.
pub fn sync_summaries(
    sync: &dyn FileSync,
    remote: &str,
    images: &[PathBuf],
    ledger: &mut SentLedger,
) -> Vec<PathBuf> {
    let mut uploaded = Vec::new();
    for image in images {
        info!(path = %image.display(), remote, "uploading summary");
        if let Err(e) = sync.upload(image, remote) {
            warn!(path = %image.display(), error = %e, "upload failed");
            continue;
        }
        if let Err(e) = ledger.mark_sent(image) {
            warn!(path = %image.display(), error = %e, "uploaded but could not record as sent");
        }
        uploaded.push(image.clone());
    }
    uploaded
}

/// Mail every image in one message. Nothing is sent for an empty batch.
/// Returns the images that were mailed.
pub fn email_summaries(
    mailer: &dyn Mailer,
    composer: &MailComposer<'_>,
    club_name: &str,
    settings: &EmailSettings,
    today: NaiveDate,
    images: &[PathBuf],
    ledger: &mut SentLedger,
) -> Result<Vec<PathBuf>, SummaryError> {
    if images.is_empty() {
        info!("email not sent because there were no new summaries to send");
        return Ok(Vec::new());
    }

    info!(count = images.len(), "summary graphics generated");
    let message = composer.compose(club_name, settings, today, images.to_vec())?;
    mailer.send(&message)?;
    info!(to = ?settings.to, "email sent");

    // The mail is out; every image goes in it, recorded or not.
    for image in images {
        if let Err(e) = ledger.mark_sent(image) {
            warn!(path = %image.display(), error = %e, "mailed but could not record as sent");
        }
    }
    Ok(images.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcsg_render::MessageTemplates;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct FakeMailer {
        sent: RefCell<Vec<MailMessage>>,
        fail: bool,
    }

    impl Mailer for FakeMailer {
        fn send(&self, message: &MailMessage) -> Result<(), SummaryError> {
            if self.fail {
                return Err(SummaryError::Collaborator("smtp refused".into()));
            }
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    /// Rejects any file whose name contains "bad"
    struct PickySync;

    impl FileSync for PickySync {
        fn upload(&self, path: &Path, _remote: &str) -> Result<(), SummaryError> {
            let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            if name.contains("bad") {
                Err(SummaryError::Collaborator("upload rejected".into()))
            } else {
                Ok(())
            }
        }
    }

    fn settings() -> EmailSettings {
        EmailSettings {
            host: "smtp.example.org".into(),
            port: 587,
            from: "scores@exetercc.example".into(),
            to: vec!["captain@exetercc.example".into()],
        }
    }

    fn setup(names: &[&str]) -> (TempDir, Vec<PathBuf>, SentLedger) {
        let temp_dir = TempDir::new().unwrap();
        let sent_dir = temp_dir.path().join("sent");
        fs::create_dir(&sent_dir).unwrap();
        let images = names
            .iter()
            .map(|name| {
                let path = temp_dir.path().join(format!("{name}.JPG"));
                fs::write(&path, b"jpeg").unwrap();
                path
            })
            .collect();
        let ledger = SentLedger::load(&sent_dir).unwrap();
        (temp_dir, images, ledger)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 17).unwrap()
    }

    #[test]
    fn test_email_marks_all_sent() {
        let (_dir, images, mut ledger) = setup(&["one", "two"]);
        let mailer = FakeMailer::default();
        let composer = MailComposer::new(&MessageTemplates::default()).unwrap();

        let mailed =
            email_summaries(&mailer, &composer, "Exeter CC", &settings(), today(), &images, &mut ledger).unwrap();
        assert_eq!(mailed.len(), 2);
        assert_eq!(mailer.sent.borrow().len(), 1);
        assert_eq!(mailer.sent.borrow()[0].attachments, images);
        assert!(ledger.contains("one"));
        assert!(ledger.contains("two"));
    }

    #[test]
    fn test_email_skipped_when_nothing_new() {
        let (_dir, _images, mut ledger) = setup(&[]);
        let mailer = FakeMailer::default();
        let composer = MailComposer::new(&MessageTemplates::default()).unwrap();

        let mailed =
            email_summaries(&mailer, &composer, "Exeter CC", &settings(), today(), &[], &mut ledger).unwrap();
        assert!(mailed.is_empty());
        assert!(mailer.sent.borrow().is_empty());
    }

    #[test]
    fn test_failed_email_records_nothing() {
        let (_dir, images, mut ledger) = setup(&["one"]);
        let mailer = FakeMailer {
            fail: true,
            ..Default::default()
        };
        let composer = MailComposer::new(&MessageTemplates::default()).unwrap();

        let err = email_summaries(&mailer, &composer, "Exeter CC", &settings(), today(), &images, &mut ledger)
            .unwrap_err();
        assert!(matches!(err, SummaryError::Collaborator(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_email_records_the_rest_when_one_copy_fails() {
        let (dir, mut images, mut ledger) = setup(&["one", "three"]);
        // never written, so copying it into the sent dir fails
        images.insert(1, dir.path().join("two.JPG"));
        let mailer = FakeMailer::default();
        let composer = MailComposer::new(&MessageTemplates::default()).unwrap();

        let mailed =
            email_summaries(&mailer, &composer, "Exeter CC", &settings(), today(), &images, &mut ledger).unwrap();
        assert_eq!(mailed, images);
        assert_eq!(mailer.sent.borrow().len(), 1);
        assert!(ledger.contains("one"));
        assert!(!ledger.contains("two"));
        assert!(ledger.contains("three"));
    }

    #[test]
    fn test_sync_continues_past_failures() {
        let (_dir, images, mut ledger) = setup(&["good one", "bad one", "good two"]);

        let uploaded = sync_summaries(&PickySync, "gphotos:album/club_scorecards", &images, &mut ledger);
        assert_eq!(uploaded.len(), 2);
        assert!(ledger.contains("good one"));
        assert!(!ledger.contains("bad one"));
        assert!(ledger.contains("good two"));
    }
}
