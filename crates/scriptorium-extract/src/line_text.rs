//! Line tool with a text sub-task: each mark is a two-point line plus the
//! transcription typed for it.
//!
//! Output is grouped per frame, `frame{N}`, with one entry per mark in the
//! order the marks were made.

use std::collections::BTreeMap;

use scriptorium_core::errors::{ExtractionError, MalformedRecordError, ScriptoriumResult};
use scriptorium_core::models::LineRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Absolute tolerance under which a line is treated as vertical-or-dot.
const X_ATOL: f64 = 0.01;
/// Relative tolerance paired with [`X_ATOL`].
const X_RTOL: f64 = 1e-5;

/// A raw classification payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub value: Vec<LineMark>,
}

/// One drawn line with its text sub-task answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineMark {
    #[serde(default)]
    pub frame: u32,
    pub x1: Option<f64>,
    pub x2: Option<f64>,
    pub y1: Option<f64>,
    pub y2: Option<f64>,
    #[serde(default)]
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Detail {
    pub value: Option<String>,
}

/// Marks for one frame, in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameExtract {
    pub points: FramePoints,
    /// One single-element list per mark.
    pub text: Vec<Vec<String>>,
    /// Degrees per mark.
    pub slope: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FramePoints {
    /// `[x1, x2]` per mark.
    pub x: Vec<Vec<f64>>,
    /// `[y1, y2]` per mark.
    pub y: Vec<Vec<f64>>,
}

/// One classification's marks keyed by `frame{N}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineTextExtract {
    pub frames: BTreeMap<String, FrameExtract>,
}

impl Classification {
    /// Parse a classification from JSON.
    pub fn from_json(value: serde_json::Value) -> ScriptoriumResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl FrameExtract {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Line records for this frame, in drawing order.
    pub fn records(&self) -> Result<Vec<LineRecord>, MalformedRecordError> {
        if self.points.x.len() != self.len() || self.points.y.len() != self.len() {
            return Err(MalformedRecordError::new(
                "points",
                format!(
                    "{} x and {} y entries for {} transcriptions",
                    self.points.x.len(),
                    self.points.y.len(),
                    self.len()
                ),
            ));
        }
        self.points
            .x
            .iter()
            .zip(&self.points.y)
            .zip(&self.text)
            .map(|((x, y), text)| LineRecord::from_parts(x, y, text))
            .collect()
    }
}

/// Frame key used in extracts.
pub fn frame_key(frame: u32) -> String {
    format!("frame{frame}")
}

/// Extract every line mark of the classification's first annotation.
pub fn extract_line_text(classification: &Classification) -> ScriptoriumResult<LineTextExtract> {
    let annotation = classification
        .annotations
        .first()
        .ok_or(ExtractionError::MissingAnnotations)?;

    let mut extract = LineTextExtract::default();
    for (mark_index, mark) in annotation.value.iter().enumerate() {
        let malformed = |reason: &str| ExtractionError::MalformedMark {
            frame: mark.frame,
            mark: mark_index,
            reason: reason.to_string(),
        };
        let (Some(x1), Some(x2), Some(y1), Some(y2)) = (mark.x1, mark.x2, mark.y1, mark.y2) else {
            return Err(malformed("missing endpoint coordinate").into());
        };
        let text = mark
            .details
            .first()
            .and_then(|d| d.value.clone())
            .ok_or_else(|| malformed("missing text sub-task value"))?;

        let frame = extract.frames.entry(frame_key(mark.frame)).or_default();
        frame.text.push(vec![text]);
        frame.points.x.push(vec![x1, x2]);
        frame.points.y.push(vec![y1, y2]);
        frame.slope.push(drawn_slope(x1, x2, y1, y2));
    }
    debug!(
        marks = annotation.value.len(),
        frames = extract.frames.len(),
        "extracted line-text marks"
    );
    Ok(extract)
}

/// Angle of the drawn line in degrees; 0 when the x values nearly coincide.
fn drawn_slope(x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    if (x1 - x2).abs() <= X_ATOL + X_RTOL * x2.abs() {
        return 0.0;
    }
    (y2 - y1).atan2(x2 - x1).to_degrees()
}
