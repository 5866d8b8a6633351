//! PCSG Render: summary record to image job and mail message
//!
//! This crate turns a derived `SummaryRecord` into what the output
//! collaborators consume: a fully placed `RenderJob` for the
//! `ImageRenderer`, and a composed `MailMessage` for the mailer.
//!
//! # Example
//!
//! ```ignore
//! use pcsg_render::{plan_render, FieldLayout};
//!
//! let layout = FieldLayout::load("resources/layout.yaml")?;
//! let job = plan_render(&summary, &layout, logos)?;
//! let jpeg = renderer.render(&job)?;
//! ```

pub mod layout;
pub mod message;
pub mod placement;

pub use layout::{FieldLayout, LogoSlots, TextAlign, TextField};
pub use message::{MailComposer, MailMessage, MessageTemplates};
pub use placement::{plan_render, ImageRenderer, LogoPlacement, RenderJob, TextPlacement};

use pcsg_core::SummaryError;
use thiserror::Error;

/// Errors that can occur while laying out or composing output
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Layout load failed: {0}")]
    Layout(String),
    #[error("Unknown summary field in layout: {0}")]
    UnknownField(String),
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
}

impl From<RenderError> for SummaryError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Layout(_) | RenderError::UnknownField(_) | RenderError::Template(_) => {
                SummaryError::Config(err.to_string())
            }
            RenderError::Render(_) => SummaryError::Collaborator(err.to_string()),
        }
    }
}
