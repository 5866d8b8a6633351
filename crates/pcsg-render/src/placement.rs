//! Placement planning: summary × layout → a fully resolved render job.
//!
//! The renderer itself is a collaborator. It gets every string, position and
//! style already decided, so all layout logic stays testable without images.

use std::collections::HashMap;

use pcsg_core::{ClubLogos, SummaryError, SummaryRecord};
use tracing::debug;

use crate::layout::{FieldLayout, TextAlign};
use crate::RenderError;

/// One string drawn at one point
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    pub field_name: String,
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub scale: u32,
    pub rgb: [u8; 3],
    pub anchor: String,
    pub align: TextAlign,
    pub spacing: u32,
}

/// Logo bytes pasted into a square slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoPlacement {
    pub image: Vec<u8>,
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

/// Everything an `ImageRenderer` needs for one summary image
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    /// Template image file name, e.g. "mens_batting_first.JPG"
    pub template_id: String,
    pub texts: Vec<TextPlacement>,
    pub home_logo: LogoPlacement,
    pub away_logo: LogoPlacement,
}

/// Composites a render job onto its template image
pub trait ImageRenderer {
    /// Encoded JPEG bytes
    fn render(&self, job: &RenderJob) -> Result<Vec<u8>, SummaryError>;
}

/// Resolve every text field of the layout against the summary.
///
/// Text fields are placed in layout order. A field the summary does not
/// carry is a layout error; `FieldLayout::validate` catches it at load time.
pub fn plan_render(
    summary: &SummaryRecord,
    layout: &FieldLayout,
    logos: ClubLogos,
) -> Result<RenderJob, RenderError> {
    let fields: HashMap<String, &str> = summary.fields().into_iter().collect();
    let texts = layout
        .text_fields
        .iter()
        .map(|field| {
            let text = fields
                .get(&field.field_name)
                .ok_or_else(|| RenderError::UnknownField(field.field_name.clone()))?;
            Ok(TextPlacement {
                field_name: field.field_name.clone(),
                text: text.to_string(),
                x: field.x,
                y: field.y,
                scale: field.scale,
                rgb: field.rgb,
                anchor: field.anchor.clone(),
                align: field.align,
                spacing: field.spacing,
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    debug!(
        filename = %summary.filename,
        template = %summary.template_filename,
        texts = texts.len(),
        "planned render"
    );

    let slots = &layout.logos;
    Ok(RenderJob {
        template_id: summary.template_filename.clone(),
        texts,
        home_logo: LogoPlacement {
            image: logos.home,
            x: slots.home.0,
            y: slots.home.1,
            size: slots.size,
        },
        away_logo: LogoPlacement {
            image: logos.away,
            x: slots.away.0,
            y: slots.away.1,
            size: slots.size,
        },
    })
}
