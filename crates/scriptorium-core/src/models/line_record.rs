//! One contributor's drawn line plus its transcription.
//!
//! On the wire a record keeps the extraction layer's shape,
//! `{"x": [x_start, x_end], "y": [y_start, y_end], "text": ["..."]}`.
//! Shape problems are rejected when the record is built, so code holding a
//! `LineRecord` never re-checks them.

use serde::{Deserialize, Serialize};

use crate::errors::{MalformedRecordError, ScriptoriumError, ScriptoriumResult};

/// A 2-D point in subject pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An immutable line annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLineRecord", into = "RawLineRecord")]
pub struct LineRecord {
    start: Point,
    end: Point,
    text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawLineRecord {
    #[serde(default)]
    x: Vec<f64>,
    #[serde(default)]
    y: Vec<f64>,
    #[serde(default)]
    text: Vec<String>,
}

impl LineRecord {
    pub fn new(start: Point, end: Point, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Build from the list-shaped parts produced by the extraction layer.
    pub fn from_parts(x: &[f64], y: &[f64], text: &[String]) -> Result<Self, MalformedRecordError> {
        let [x_start, x_end] = endpoints("x", x)?;
        let [y_start, y_end] = endpoints("y", y)?;
        let text = text
            .first()
            .ok_or_else(|| MalformedRecordError::new("text", "missing transcription"))?;
        Ok(Self::new(
            Point::new(x_start, y_start),
            Point::new(x_end, y_end),
            text.clone(),
        ))
    }

    /// Parse a list of JSON records, tagging failures with their data index.
    pub fn parse_all(values: &[serde_json::Value]) -> ScriptoriumResult<Vec<Self>> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                RawLineRecord::deserialize(value)
                    .map_err(|e| MalformedRecordError::new("record", e.to_string()))
                    .and_then(Self::try_from)
                    .map_err(|source| ScriptoriumError::MalformedRecord { index, source })
            })
            .collect()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The raw transcription, markup included.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn xs(&self) -> [f64; 2] {
        [self.start.x, self.end.x]
    }

    pub fn ys(&self) -> [f64; 2] {
        [self.start.y, self.end.y]
    }

    /// Signed angle of the start→end vector in degrees, in (-180, 180].
    /// Coincident endpoints give 0.
    pub fn slope_degrees(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        dy.atan2(dx).to_degrees()
    }
}

fn endpoints(field: &'static str, values: &[f64]) -> Result<[f64; 2], MalformedRecordError> {
    match values {
        [start, end] if start.is_finite() && end.is_finite() => Ok([*start, *end]),
        [_, _] => Err(MalformedRecordError::new(field, "non-finite coordinates")),
        [] => Err(MalformedRecordError::new(field, "missing coordinates")),
        other => Err(MalformedRecordError::new(
            field,
            format!("expected 2 coordinates, got {}", other.len()),
        )),
    }
}

impl TryFrom<RawLineRecord> for LineRecord {
    type Error = MalformedRecordError;

    fn try_from(raw: RawLineRecord) -> Result<Self, Self::Error> {
        Self::from_parts(&raw.x, &raw.y, &raw.text)
    }
}

impl From<LineRecord> for RawLineRecord {
    fn from(record: LineRecord) -> Self {
        Self {
            x: record.xs().to_vec(),
            y: record.ys().to_vec(),
            text: vec![record.text],
        }
    }
}
