//! # scriptorium-extract
//!
//! Turns raw line-tool classifications into the per-frame line records and
//! contributor indices the consensus pipeline consumes.

pub mod line_text;
pub mod subject;

pub use line_text::{extract_line_text, Classification, FrameExtract, LineTextExtract};
pub use subject::{subjects_by_frame, UserExtract};
