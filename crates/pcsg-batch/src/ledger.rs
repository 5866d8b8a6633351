//! Sent ledger: which summaries have already been distributed.
//!
//! The ledger is the sent directory itself. A summary counts as sent when an
//! image named `<filename>.JPG` sits there, so the state survives restarts
//! and can be reset by hand.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pcsg_core::SummaryError;
use tracing::{debug, info};

use crate::store::IMAGE_EXTENSION;

pub struct SentLedger {
    dir: PathBuf,
    sent: HashSet<String>,
}

impl SentLedger {
    /// Read the image stems present in the sent directory
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, SummaryError> {
        let dir = dir.as_ref().to_path_buf();
        let mut sent = HashSet::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(IMAGE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                sent.insert(stem.to_string());
            }
        }
        debug!(dir = %dir.display(), count = sent.len(), "loaded sent ledger");
        Ok(Self { dir, sent })
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.sent.contains(filename)
    }

    pub fn len(&self) -> usize {
        self.sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty()
    }

    /// Copy a distributed image into the sent directory and record it
    pub fn mark_sent(&mut self, image: &Path) -> Result<PathBuf, SummaryError> {
        let (name, stem) = match (image.file_name(), image.file_stem().and_then(|s| s.to_str())) {
            (Some(name), Some(stem)) => (name, stem.to_string()),
            _ => {
                return Err(SummaryError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not an image file: {}", image.display()),
                )))
            }
        };

        let target = self.dir.join(name);
        fs::copy(image, &target)?;
        info!(filename = %stem, "marked summary as sent");
        self.sent.insert(stem);
        Ok(target)
    }
}
