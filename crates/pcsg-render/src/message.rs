//! Mail message composition for a batch of new summary images.
//!
//! Subject and body are Handlebars templates rendered against:
//! - `club_name`: the configured club
//! - `date`: the send date, `dd_mm_YYYY`
//! - `matches`: attachment file names, in batch order
//!
//! The output is a plain text mail, so HTML escaping is disabled.

use std::path::PathBuf;

use chrono::NaiveDate;
use handlebars::{handlebars_helper, Handlebars};
use pcsg_core::EmailSettings;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::RenderError;

/// Date format in mail subjects
pub const SUBJECT_DATE_FORMAT: &str = "%d_%m_%Y";

pub const DEFAULT_SUBJECT: &str = "{{club_name}} Match Summaries {{date}}";
pub const DEFAULT_BODY: &str =
    "{{club_name}} match summaries attached for the following matches;\n{{lines matches}}";

handlebars_helper!(lines: |items: array| {
    items
        .iter()
        .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
});

/// Subject and body template sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplates {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_body")]
    pub body: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            body: default_body(),
        }
    }
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_body() -> String {
    DEFAULT_BODY.to_string()
}

/// A composed mail, ready for a `Mailer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
    pub attachments: Vec<PathBuf>,
}

/// Compiled subject and body templates
pub struct MailComposer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> MailComposer<'a> {
    pub fn new(templates: &MessageTemplates) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("lines", Box::new(lines));

        handlebars
            .register_template_string("subject", &templates.subject)
            .map_err(|e| RenderError::Template(format!("subject: {}", e)))?;
        handlebars
            .register_template_string("body", &templates.body)
            .map_err(|e| RenderError::Template(format!("body: {}", e)))?;

        Ok(Self { handlebars })
    }

    /// Message for the given attachments, listing their file names in the body
    pub fn compose(
        &self,
        club_name: &str,
        settings: &EmailSettings,
        date: NaiveDate,
        attachments: Vec<PathBuf>,
    ) -> Result<MailMessage, RenderError> {
        let matches: Vec<String> = attachments
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        let data = json!({
            "club_name": club_name,
            "date": date.format(SUBJECT_DATE_FORMAT).to_string(),
            "matches": matches,
        });

        let subject = self
            .handlebars
            .render("subject", &data)
            .map_err(|e| RenderError::Render(e.to_string()))?;
        let body = self
            .handlebars
            .render("body", &data)
            .map_err(|e| RenderError::Render(e.to_string()))?;

        Ok(MailMessage {
            from: settings.from.clone(),
            to: settings.to.clone(),
            subject,
            body,
            attachments,
        })
    }
}
