/// A line record is missing a field or carries an unusable value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("field `{field}`: {reason}")]
pub struct MalformedRecordError {
    pub field: &'static str,
    pub reason: String,
}

impl MalformedRecordError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
