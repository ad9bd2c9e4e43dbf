//! Property tests for scriptorium-consensus.

use proptest::prelude::*;

use scriptorium_consensus::{
    dissimilarity, enforce_user_uniqueness, min_samples, strip_tags, ConsensusEngine,
};
use scriptorium_core::constants::NOISE;
use scriptorium_core::models::{LineRecord, ObservationKey, Point, SubjectInput};

fn record_strategy() -> impl Strategy<Value = LineRecord> {
    (
        0.0f64..1000.0,
        0.0f64..1000.0,
        0.0f64..1000.0,
        0.0f64..1000.0,
        "[a-z ]{0,12}",
    )
        .prop_map(|(x0, y0, x1, y1, text)| {
            LineRecord::new(Point::new(x0, y0), Point::new(x1, y1), text)
        })
}

fn subject_strategy() -> impl Strategy<Value = SubjectInput> {
    prop::collection::vec((record_strategy(), 0usize..5), 0..12).prop_map(|rows| {
        let (records, users): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        SubjectInput::new(records, users).unwrap()
    })
}

// =============================================================================
// Dissimilarity: identity, same-user infinity, symmetry
// =============================================================================
proptest! {
    #[test]
    fn prop_dissimilarity_identity(record in record_strategy(), user in 0usize..10) {
        let records = vec![record];
        let a = ObservationKey::new(0, user);
        prop_assert_eq!(dissimilarity(a, a, &records), 0.0);
    }

    #[test]
    fn prop_same_user_is_infinite(a in record_strategy(), b in record_strategy(), user in 0usize..10) {
        let records = vec![a, b];
        let d = dissimilarity(ObservationKey::new(0, user), ObservationKey::new(1, user), &records);
        prop_assert!(d.is_infinite() && d > 0.0);
    }

    #[test]
    fn prop_distinct_users_symmetric_and_finite(a in record_strategy(), b in record_strategy()) {
        let records = vec![a, b];
        let ka = ObservationKey::new(0, 0);
        let kb = ObservationKey::new(1, 1);
        let ab = dissimilarity(ka, kb, &records);
        prop_assert!(ab.is_finite() && ab >= 0.0);
        prop_assert_eq!(ab, dissimilarity(kb, ka, &records));
    }
}

// =============================================================================
// Density threshold: monotone, never below 2
// =============================================================================
proptest! {
    #[test]
    fn prop_min_samples_monotone(n in 1usize..500) {
        prop_assert!(min_samples(n) >= 2);
        prop_assert!(min_samples(n + 1) >= min_samples(n));
    }
}

// =============================================================================
// Normalisation: idempotent, no bracket pairs, no double spaces
// =============================================================================
proptest! {
    #[test]
    fn prop_strip_tags_idempotent(text in "[a-z \\[\\]\t]{0,30}") {
        let once = strip_tags(&text);
        prop_assert_eq!(strip_tags(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert_eq!(once.trim(), once.as_str());
    }
}

// =============================================================================
// Uniqueness: only demotions, at most one observation per user per label
// =============================================================================
proptest! {
    #[test]
    fn prop_uniqueness_only_demotes(
        rows in prop::collection::vec((-1i32..4, 0.0f64..10.0, 0usize..4), 0..40)
    ) {
        let labels: Vec<i32> = rows.iter().map(|r| r.0).collect();
        let core: Vec<f64> = rows.iter().map(|r| r.1).collect();
        let users: Vec<usize> = rows.iter().map(|r| r.2).collect();
        let clean = enforce_user_uniqueness(&labels, &core, &users);

        prop_assert_eq!(clean.len(), labels.len());
        for (before, after) in labels.iter().zip(&clean) {
            prop_assert!(after == before || *after == NOISE);
        }
        for i in 0..clean.len() {
            for j in (i + 1)..clean.len() {
                if clean[i] >= 0 && clean[i] == clean[j] {
                    prop_assert_ne!(users[i], users[j]);
                }
            }
        }
    }
}

// =============================================================================
// Pipeline: every observation represented, users unique, deterministic
// =============================================================================
proptest! {
    #[test]
    fn prop_pipeline_accounts_for_every_observation(subject in subject_strategy()) {
        let engine = ConsensusEngine::default();
        let result = engine.reduce(&subject).unwrap();

        let views: usize = result.lines.iter().map(|l| l.number_views).sum();
        prop_assert_eq!(views, subject.len());
        prop_assert_eq!(result.labels.len(), subject.len());

        for i in 0..result.labels.len() {
            for j in (i + 1)..result.labels.len() {
                if result.labels[i] >= 0 && result.labels[i] == result.labels[j] {
                    prop_assert_ne!(subject.users[i], subject.users[j]);
                }
            }
        }

        let again = engine.reduce(&subject).unwrap();
        prop_assert_eq!(again.labels, result.labels);
        prop_assert_eq!(again.lines, result.lines);
    }
}
