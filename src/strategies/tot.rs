//! Tree-of-Thought exploration - bounded breadth-first search over
//! candidate reasoning branches.
//!
//! Each iteration expands every frontier node into up to `breadth_limit`
//! children, one completion call per child, each prompt carrying the full
//! ancestor history of its branch. Every new node then has a numeric answer
//! extracted from it; the unique normalized answers accumulated across all
//! iterations are the run's result.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::normalize_answer;
use super::tree::{NodeId, ThoughtTree};
use crate::config::{FrontierPolicy, SearchConfig};
use crate::error::{AppError, AppResult};
use crate::ollama::CompletionService;
use crate::prompts;

/// Neutral mid-scale rating used when a score response cannot be parsed.
const FALLBACK_SCORE: f64 = 5.0;

/// Tree-of-Thought explorer for a single question.
///
/// Owns the tree of reasoning attempts and the current frontier. A fresh
/// explorer is constructed per question; [`TreeOfThought::run`] drives the
/// whole search and returns the candidate-answer set.
pub struct TreeOfThought {
    service: Arc<dyn CompletionService>,
    question: String,
    tree: ThoughtTree,
    frontier: Vec<NodeId>,
    search: SearchConfig,
}

impl TreeOfThought {
    /// Create an explorer holding a singleton root node and a frontier
    /// containing only the root.
    pub fn new(
        service: Arc<dyn CompletionService>,
        question: impl Into<String>,
        search: SearchConfig,
    ) -> AppResult<Self> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(AppError::Validation {
                field: "question".to_string(),
                reason: "Question cannot be empty".to_string(),
            });
        }

        let tree = ThoughtTree::new(question.clone());
        let frontier = vec![tree.root()];

        Ok(Self {
            service,
            question,
            tree,
            frontier,
            search,
        })
    }

    /// Run the bounded breadth-first search and return the set of unique
    /// normalized candidate answers extracted from every created node.
    ///
    /// Terminates after `max_iterations` rounds, or earlier if an entire
    /// frontier produced only empty or failed completions. Never fails:
    /// per-branch errors are logged and dropped.
    pub async fn run(&mut self) -> BTreeSet<String> {
        let mut answers = BTreeSet::new();
        let mut iteration = 0;

        while !self.frontier.is_empty() && iteration < self.search.max_iterations {
            debug!(
                iteration = iteration + 1,
                frontier = self.frontier.len(),
                "Expanding frontier"
            );

            let current = std::mem::take(&mut self.frontier);
            let expanded = self.explore_bfs(&current).await;

            for &node in &expanded {
                let answer = self.extract_answer(node).await;
                answers.insert(answer.trim().to_string());
            }

            self.frontier = self.apply_frontier_policy(expanded).await;
            iteration += 1;
        }

        info!(
            iterations = iteration,
            nodes = self.tree.len(),
            candidates = answers.len(),
            "Tree-of-Thought run finished"
        );

        answers
    }

    /// Expand every node in `frontier` into up to `breadth_limit` children.
    ///
    /// Each candidate prompt restates the original question plus the full
    /// ancestor history of the expanded node. Empty and failed completions
    /// produce no child. Returns the new nodes in frontier order then branch
    /// order; children are appended to their parent in generation order.
    pub async fn explore_bfs(&mut self, frontier: &[NodeId]) -> Vec<NodeId> {
        let mut expanded = Vec::new();

        for &node in frontier {
            let history = self.tree.history(node);
            let prompt = prompts::expansion_prompt(&self.question, &history);

            for branch in 0..self.search.breadth_limit {
                match self.service.generate(&prompt).await {
                    Ok(text) if !text.trim().is_empty() => {
                        let child = self.tree.add_child(node, text);
                        expanded.push(child);
                    }
                    Ok(_) => {
                        debug!(branch, "Empty completion, branch dropped");
                    }
                    Err(e) => {
                        warn!(error = %e, branch, "Completion failed, branch dropped");
                    }
                }
            }
        }

        expanded
    }

    /// Ask the service for the final numeric answer in a node's text, then
    /// strip every non-digit character.
    ///
    /// Returns an empty string when no digit could be isolated or the call
    /// failed; callers treat that as "no valid numeric answer extracted".
    pub async fn extract_answer(&self, node: NodeId) -> String {
        let prompt = prompts::extraction_prompt(self.tree.text(node));

        match self.service.generate(&prompt).await {
            Ok(text) => normalize_answer(&text),
            Err(e) => {
                warn!(error = %e, "Answer extraction failed");
                String::new()
            }
        }
    }

    /// Narrow an expanded frontier according to the configured policy.
    async fn apply_frontier_policy(&self, expanded: Vec<NodeId>) -> Vec<NodeId> {
        match self.search.frontier_policy {
            FrontierPolicy::Unbounded => expanded,
            FrontierPolicy::TopK(k) => {
                if expanded.len() <= k {
                    return expanded;
                }

                let mut scored = Vec::with_capacity(expanded.len());
                for &node in &expanded {
                    scored.push((node, self.score_thought(node).await));
                }

                scored.sort_by(|a, b| {
                    b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
                });
                scored.truncate(k);
                // Restore generation order among the survivors
                scored.sort_by_key(|(node, _)| *node);

                debug!(
                    kept = k,
                    dropped = expanded.len() - k,
                    "Frontier narrowed to top-k nodes"
                );

                scored.into_iter().map(|(node, _)| node).collect()
            }
        }
    }

    /// Ask the service for a 0-10 quality rating of a node's text.
    async fn score_thought(&self, node: NodeId) -> f64 {
        let prompt = prompts::score_prompt(&self.question, self.tree.text(node));

        match self.service.generate(&prompt).await {
            Ok(text) => text.trim().trim_end_matches('.').parse().unwrap_or_else(|_| {
                debug!(response = %text, "Unparseable score, using fallback");
                FALLBACK_SCORE
            }),
            Err(e) => {
                warn!(error = %e, "Scoring call failed, using fallback");
                FALLBACK_SCORE
            }
        }
    }

    /// The question this explorer was constructed for.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The tree of reasoning attempts built so far.
    pub fn tree(&self) -> &ThoughtTree {
        &self.tree
    }

    /// The current frontier.
    pub fn frontier(&self) -> &[NodeId] {
        &self.frontier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompletionResult;
    use async_trait::async_trait;

    struct FixedService(&'static str);

    #[async_trait]
    impl CompletionService for FixedService {
        async fn generate(&self, _prompt: &str) -> CompletionResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn service(text: &'static str) -> Arc<dyn CompletionService> {
        Arc::new(FixedService(text))
    }

    #[test]
    fn test_empty_question_is_rejected() {
        let result = TreeOfThought::new(service("x"), "   ", SearchConfig::default());
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_new_explorer_frontier_is_the_root() {
        let tot = TreeOfThought::new(service("x"), "2+2?", SearchConfig::default()).unwrap();
        assert_eq!(tot.frontier(), &[tot.tree().root()]);
        assert_eq!(tot.tree().len(), 1);
        assert_eq!(tot.question(), "2+2?");
    }

    #[tokio::test]
    async fn test_extract_answer_normalizes_digits() {
        let tot = TreeOfThought::new(
            service("The answer is 42 dollars."),
            "q",
            SearchConfig::default(),
        )
        .unwrap();
        let answer = tot.extract_answer(tot.tree().root()).await;
        assert_eq!(answer, "42");
    }
}
