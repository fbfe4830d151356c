//! Evaluation strategies.
//!
//! This module provides the two ways a question is posed to the model:
//! - [`Baseline`]: one single-shot prompt, one extraction call
//! - [`TreeOfThought`]: bounded breadth-first search over a tree of
//!   candidate reasoning branches, accumulating a set of candidate answers
//!
//! Both strategies share one injected [`CompletionService`] and the
//! digit-only answer normalization below.
//!
//! [`CompletionService`]: crate::ollama::CompletionService

mod baseline;
mod tot;
mod tree;

pub use baseline::*;
pub use tot::*;
pub use tree::*;

/// Strip every non-digit character from a model response.
///
/// This normalizes away currency symbols, commas, units, whitespace and
/// trailing punctuation, so "$1,200." becomes "1200". It is a best-effort
/// textual simplification: negative numbers lose their sign and decimals
/// lose their point. Returns an empty string when the input contains no
/// digit at all.
pub fn normalize_answer(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_answer_strips_punctuation_and_units() {
        assert_eq!(normalize_answer("The answer is 42 dollars."), "42");
        assert_eq!(normalize_answer("$1,200."), "1200");
        assert_eq!(normalize_answer(" 7 "), "7");
    }

    #[test]
    fn test_normalize_answer_without_digits_is_empty() {
        assert_eq!(normalize_answer("no number here"), "");
        assert_eq!(normalize_answer(""), "");
    }

    #[test]
    fn test_normalize_answer_is_idempotent() {
        let once = normalize_answer("answer: 1,234!");
        assert_eq!(once, "1234");
        assert_eq!(normalize_answer(&once), once);
    }

    #[test]
    fn test_normalize_answer_loses_sign_and_decimal_point() {
        // Accepted limitation of character-class stripping
        assert_eq!(normalize_answer("-3"), "3");
        assert_eq!(normalize_answer("2.5"), "25");
    }
}
