//! Phase 3 (aggregation): one consensus record per surviving multi-member cluster.
//!
//! Clusters are emitted in ascending label order, members in input order.
//! A label left with a single member after uniqueness enforcement still
//! goes through the aggregator.

use std::collections::BTreeMap;

use scriptorium_core::errors::ScriptoriumResult;
use scriptorium_core::models::{ConsensusRecord, LineRecord, Point};
use scriptorium_core::traits::ClusterAggregator;

/// Aggregate every non-noise label in `labels`.
pub fn aggregate_clusters(
    labels: &[i32],
    records: &[LineRecord],
    aggregator: &dyn ClusterAggregator,
) -> ScriptoriumResult<Vec<ConsensusRecord>> {
    let mut clusters: BTreeMap<i32, Vec<&LineRecord>> = BTreeMap::new();
    for (&label, record) in labels.iter().zip(records) {
        if label >= 0 {
            clusters.entry(label).or_default().push(record);
        }
    }
    clusters
        .values()
        .map(|members| aggregator.aggregate(members))
        .collect()
}

/// Median endpoints with positional word voting.
///
/// Word column `i` holds the `i`-th whitespace-separated word of every member
/// that has one. The consensus score is the mean, over columns, of the size
/// of the largest group of identical words (0.0 when no member has a word).
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianAggregator;

impl ClusterAggregator for MedianAggregator {
    fn aggregate(&self, members: &[&LineRecord]) -> ScriptoriumResult<ConsensusRecord> {
        let start = Point::new(
            median(members.iter().map(|m| m.start().x)),
            median(members.iter().map(|m| m.start().y)),
        );
        let end = Point::new(
            median(members.iter().map(|m| m.end().x)),
            median(members.iter().map(|m| m.end().y)),
        );
        let consensus_line = LineRecord::new(start, end, "");

        let mut columns: Vec<Vec<String>> = Vec::new();
        for member in members {
            for (i, word) in member.text().split_whitespace().enumerate() {
                if columns.len() <= i {
                    columns.push(Vec::new());
                }
                columns[i].push(word.to_string());
            }
        }

        Ok(ConsensusRecord {
            clusters_x: consensus_line.xs().to_vec(),
            clusters_y: consensus_line.ys().to_vec(),
            consensus_score: mean_top_vote(&columns),
            clusters_text: columns,
            number_views: members.len(),
            line_slope: consensus_line.slope_degrees(),
        })
    }

    fn name(&self) -> &str {
        "median"
    }
}

/// Median of a non-empty sample; even counts average the middle pair.
fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

fn mean_top_vote(columns: &[Vec<String>]) -> f64 {
    if columns.is_empty() {
        return 0.0;
    }
    let total: usize = columns
        .iter()
        .map(|column| {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for word in column {
                *counts.entry(word.as_str()).or_default() += 1;
            }
            counts.values().copied().max().unwrap_or(0)
        })
        .sum();
    total as f64 / columns.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptorium_core::constants::NOISE;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64, text: &str) -> LineRecord {
        LineRecord::new(Point::new(x0, y0), Point::new(x1, y1), text)
    }

    #[test]
    fn median_endpoints_and_word_columns() {
        let a = line(0.0, 0.0, 100.0, 0.0, "the cat sat");
        let b = line(2.0, 1.0, 102.0, 1.0, "the cat sat");
        let c = line(1.0, 5.0, 101.0, 5.0, "the hat");
        let record = MedianAggregator.aggregate(&[&a, &b, &c]).unwrap();

        assert_eq!(record.clusters_x, vec![1.0, 101.0]);
        assert_eq!(record.clusters_y, vec![1.0, 1.0]);
        assert_eq!(record.number_views, 3);
        assert_eq!(record.line_slope, 0.0);
        assert_eq!(record.clusters_text.len(), 3);
        assert_eq!(record.clusters_text[1], vec!["cat", "cat", "hat"]);
        assert_eq!(record.clusters_text[2], vec!["sat", "sat"]);
        // (3 + 2 + 2) / 3
        assert!((record.consensus_score - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn even_member_count_averages_middle_pair() {
        let a = line(0.0, 0.0, 10.0, 0.0, "x");
        let b = line(4.0, 0.0, 14.0, 0.0, "x");
        let record = MedianAggregator.aggregate(&[&a, &b]).unwrap();
        assert_eq!(record.clusters_x, vec![2.0, 12.0]);
        assert_eq!(record.consensus_score, 2.0);
    }

    #[test]
    fn empty_transcriptions_score_zero() {
        let a = line(0.0, 0.0, 10.0, 0.0, "");
        let b = line(0.0, 0.0, 10.0, 0.0, "  ");
        let record = MedianAggregator.aggregate(&[&a, &b]).unwrap();
        assert!(record.clusters_text.is_empty());
        assert_eq!(record.consensus_score, 0.0);
    }

    #[test]
    fn clusters_emitted_in_label_order_and_noise_skipped() {
        let records = vec![
            line(0.0, 50.0, 10.0, 50.0, "second"),
            line(0.0, 0.0, 10.0, 0.0, "first"),
            line(0.0, 99.0, 10.0, 99.0, "noise"),
        ];
        let labels = [1, 0, NOISE];
        let out = aggregate_clusters(&labels, &records, &MedianAggregator).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].clusters_text, vec![vec!["first".to_string()]]);
        assert_eq!(out[1].clusters_text, vec![vec!["second".to_string()]]);
    }
}
