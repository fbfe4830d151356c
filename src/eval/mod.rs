//! Evaluation loop and report generation.
//!
//! Drives one strategy over a sequence of dataset records and aggregates a
//! score. Baseline scores on exact match of the normalized prediction; the
//! Tree-of-Thought strategy scores on membership of the ground truth in the
//! run's candidate-answer set. An empty normalized string never counts as a
//! match in either direction.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::SearchConfig;
use crate::dataset::Gsm8kRecord;
use crate::ollama::CompletionService;
use crate::strategies::{Baseline, TreeOfThought};

/// Aggregated result of one evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// Strategy name ("baseline" or "tot")
    pub strategy: String,
    /// Number of records evaluated
    pub total: usize,
    /// Number of correctly answered records
    pub correct: usize,
    /// Accuracy (correct / total), 0.0 for an empty run
    pub score: f64,
    /// RFC 3339 timestamp of report creation
    pub timestamp: String,
}

impl EvalReport {
    /// Create a report, computing the score fraction
    pub fn new(strategy: impl Into<String>, total: usize, correct: usize) -> Self {
        let score = if total > 0 {
            correct as f64 / total as f64
        } else {
            0.0
        };

        Self {
            strategy: strategy.into(),
            total,
            correct,
            score,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} final score: {}/{} ({:.2}%)",
            self.strategy,
            self.correct,
            self.total,
            self.score * 100.0
        )
    }
}

/// Evaluate the baseline strategy over `records`.
///
/// A failed prediction is logged and scored as incorrect; the run always
/// completes.
pub async fn run_baseline(
    service: Arc<dyn CompletionService>,
    records: &[Gsm8kRecord],
) -> EvalReport {
    let baseline = Baseline::new(service);
    let mut correct = 0;

    for (idx, record) in records.iter().enumerate() {
        let expected = record.ground_truth();

        match baseline.predict(&record.question).await {
            Ok(predicted) => {
                let hit = !expected.is_empty() && predicted == expected;
                if hit {
                    correct += 1;
                }
                info!(
                    question = idx + 1,
                    expected = %expected,
                    predicted = %predicted,
                    hit,
                    "Baseline question scored"
                );
            }
            Err(e) => {
                warn!(question = idx + 1, error = %e, "Baseline prediction failed");
            }
        }
    }

    EvalReport::new("baseline", records.len(), correct)
}

/// Evaluate the Tree-of-Thought strategy over `records`.
///
/// Each record gets a fresh explorer; the question scores as correct when
/// the normalized ground truth appears in the returned candidate-answer set.
pub async fn run_tot(
    service: Arc<dyn CompletionService>,
    records: &[Gsm8kRecord],
    search: &SearchConfig,
) -> EvalReport {
    let mut correct = 0;

    for (idx, record) in records.iter().enumerate() {
        let expected = record.ground_truth();

        let mut tot = match TreeOfThought::new(service.clone(), &record.question, search.clone()) {
            Ok(tot) => tot,
            Err(e) => {
                warn!(question = idx + 1, error = %e, "Skipping record");
                continue;
            }
        };

        let candidates = tot.run().await;
        let hit = !expected.is_empty() && candidates.contains(&expected);
        if hit {
            correct += 1;
        }

        info!(
            question = idx + 1,
            expected = %expected,
            candidates = candidates.len(),
            nodes = tot.tree().len(),
            hit,
            "ToT question scored"
        );
    }

    EvalReport::new("tot", records.len(), correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_score_fraction() {
        let report = EvalReport::new("baseline", 100, 42);
        assert_eq!(report.total, 100);
        assert_eq!(report.correct, 42);
        assert!((report.score - 0.42).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_empty_run_scores_zero() {
        let report = EvalReport::new("tot", 0, 0);
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_report_summary_format() {
        let report = EvalReport::new("baseline", 100, 42);
        assert_eq!(report.summary(), "baseline final score: 42/100 (42.00%)");
    }
}
