//! Centralized prompt templates for evaluation strategies
//!
//! This module contains every prompt sent to the completion service.
//! Centralizing them makes the exact wording easy to audit and version,
//! which matters for benchmark comparability.

/// Prompt asking for the next candidate solution on a reasoning branch.
///
/// States the original question, the full ancestor history of the branch,
/// and a request for an improved or corrected solution.
pub fn expansion_prompt(question: &str, history: &str) -> String {
    format!(
        "Problem: '{}'.\nPrevious attempts: '{}'.\nPlease provide an improved or corrected solution.",
        question, history
    )
}

/// Prompt asking the model to isolate the final numeric answer from free text.
pub fn extraction_prompt(text: &str) -> String {
    format!(
        "Extract the final answer number from the text: '{}'. Return only the number.",
        text
    )
}

/// Single-shot baseline prompt.
pub fn baseline_prompt(question: &str) -> String {
    format!("Question: {}. Provide the correct answer.", question)
}

/// Prompt asking for a 0-10 quality rating of a candidate solution.
///
/// Used only when a top-k frontier policy is active.
pub fn score_prompt(question: &str, solution: &str) -> String {
    format!(
        "Problem: '{}'.\nCandidate solution: '{}'.\nRate how likely this solution is correct on a scale from 0 to 10. Return only the number.",
        question, solution
    )
}
