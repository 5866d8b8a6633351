//! Field layout loading for summary images.
//!
//! A layout maps summary fields onto a template image:
//! - one text field per summary field drawn, with position and style
//! - two logo slots for the home and away clubs
//!
//! Layouts are YAML. The JSON layout the generator has always shipped is
//! also valid YAML, so its space-separated keys are accepted as aliases.

use std::path::Path;

use pcsg_core::SummaryRecord;
use serde::{Deserialize, Serialize};

use crate::RenderError;

/// Line spacing between wrapped lines of one text field
pub const DEFAULT_LINE_SPACING: u32 = 4;

/// Anchor code for text centered on its point, horizontally and vertically
pub const DEFAULT_ANCHOR: &str = "mm";

/// Top-level layout file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    #[serde(default, alias = "text fields")]
    pub text_fields: Vec<TextField>,
    #[serde(default)]
    pub logos: LogoSlots,
}

/// Where and how one summary field is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextField {
    #[serde(alias = "field name")]
    pub field_name: String,
    pub x: i32,
    pub y: i32,
    /// Font size in pixels
    pub scale: u32,
    #[serde(default)]
    pub rgb: [u8; 3],
    #[serde(default = "default_anchor")]
    pub anchor: String,
    #[serde(default)]
    pub align: TextAlign,
    #[serde(default = "default_line_spacing")]
    pub spacing: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Position and size of the two club logos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoSlots {
    pub home: (i32, i32),
    pub away: (i32, i32),
    /// Logos are scaled to a square of this side
    pub size: u32,
}

impl Default for LogoSlots {
    fn default() -> Self {
        Self {
            home: (107, 180),
            away: (875, 180),
            size: 100,
        }
    }
}

fn default_anchor() -> String {
    DEFAULT_ANCHOR.to_string()
}

fn default_line_spacing() -> u32 {
    DEFAULT_LINE_SPACING
}

impl FieldLayout {
    /// Load and validate a layout file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RenderError::Layout(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate layout YAML (or JSON)
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        let layout: FieldLayout = serde_yaml::from_str(yaml)
            .map_err(|e| RenderError::Layout(format!("failed to parse layout: {}", e)))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Every text field must name a summary field
    pub fn validate(&self) -> Result<(), RenderError> {
        let known = SummaryRecord::field_names();
        for field in &self.text_fields {
            if !known.iter().any(|name| name == &field.field_name) {
                return Err(RenderError::UnknownField(field.field_name.clone()));
            }
        }
        Ok(())
    }

    /// Text field for a summary field, if the layout draws it
    pub fn get(&self, field_name: &str) -> Option<&TextField> {
        self.text_fields.iter().find(|f| f.field_name == field_name)
    }
}
