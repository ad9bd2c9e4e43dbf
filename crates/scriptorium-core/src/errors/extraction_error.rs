/// Errors raised while turning a raw classification into line records.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("classification has no annotations")]
    MissingAnnotations,

    #[error("mark {mark} in frame {frame} is malformed: {reason}")]
    MalformedMark {
        frame: u32,
        mark: usize,
        reason: String,
    },
}
