//! Group many contributors' extracts into one consensus input per frame.

use std::collections::{BTreeMap, HashMap};

use scriptorium_core::errors::{ScriptoriumError, ScriptoriumResult};
use scriptorium_core::models::{LineRecord, SubjectInput};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::line_text::{FrameExtract, LineTextExtract};

/// One contributor's extract for a subject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserExtract {
    /// `None` for anonymous contributors; each anonymous extract counts as its own contributor.
    #[serde(default)]
    pub user_id: Option<String>,
    pub extract: LineTextExtract,
}

/// Build a [`SubjectInput`] per frame.
///
/// User indices follow first appearance of each user id. The contributor
/// count is the number of distinct contributors across all extracts, so a
/// contributor who drew nothing on a frame still raises its density threshold.
pub fn subjects_by_frame(
    extracts: &[UserExtract],
) -> ScriptoriumResult<BTreeMap<String, SubjectInput>> {
    let user_indices = assign_user_indices(extracts);
    let contributor_count = user_indices.iter().max().map_or(0, |&max| max + 1);

    let mut grouped: BTreeMap<String, (Vec<_>, Vec<usize>)> = BTreeMap::new();
    for (user_extract, &user_index) in extracts.iter().zip(&user_indices) {
        for (frame, frame_extract) in &user_extract.extract.frames {
            let offset = grouped.get(frame).map_or(0, |(records, _)| records.len());
            let records = frame_extract
                .records()
                .map_err(|source| ScriptoriumError::MalformedRecord {
                    index: offset + first_bad_index(frame_extract),
                    source,
                })?;
            let (all_records, users) = grouped.entry(frame.clone()).or_default();
            users.extend(std::iter::repeat(user_index).take(records.len()));
            all_records.extend(records);
        }
    }

    grouped
        .into_iter()
        .map(|(frame, (records, users))| {
            debug!(%frame, observations = records.len(), contributor_count, "built frame subject");
            SubjectInput::with_contributors(records, users, contributor_count)
                .map(|subject| (frame, subject))
        })
        .collect()
}

fn assign_user_indices(extracts: &[UserExtract]) -> Vec<usize> {
    let mut known: HashMap<&str, usize> = HashMap::new();
    let mut next = 0;
    extracts
        .iter()
        .map(|e| {
            let index = match e.user_id.as_deref() {
                Some(id) => *known.entry(id).or_insert(next),
                None => next,
            };
            if index == next {
                next += 1;
            }
            index
        })
        .collect()
}

/// Position of the first mark in a frame that fails to build, for error reporting.
///
/// When the point and text lists disagree in length, this is the first
/// position one of them lacks.
fn first_bad_index(frame_extract: &FrameExtract) -> usize {
    let points = &frame_extract.points;
    let (xs, ys, texts) = (points.x.len(), points.y.len(), frame_extract.len());
    if xs != texts || ys != texts {
        return xs.min(ys).min(texts);
    }
    points
        .x
        .iter()
        .zip(&points.y)
        .zip(&frame_extract.text)
        .position(|((x, y), text)| LineRecord::from_parts(x, y, text).is_err())
        .unwrap_or(0)
}
