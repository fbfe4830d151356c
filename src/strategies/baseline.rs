//! Single-shot baseline strategy.

use std::sync::Arc;

use tracing::debug;

use super::normalize_answer;
use crate::error::AppResult;
use crate::ollama::CompletionService;
use crate::prompts;

/// Baseline evaluator: one prompt per question, one extraction call,
/// exact-match scoring against the normalized ground truth.
pub struct Baseline {
    service: Arc<dyn CompletionService>,
}

impl Baseline {
    /// Create a new baseline evaluator
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Get the model's full text answer for a question
    pub async fn answer(&self, question: &str) -> AppResult<String> {
        let prompt = prompts::baseline_prompt(question);
        let response = self.service.generate(&prompt).await?;
        debug!(chars = response.len(), "Baseline answer received");
        Ok(response)
    }

    /// Extract the normalized numeric answer from a model response
    pub async fn extract_answer(&self, response: &str) -> AppResult<String> {
        let prompt = prompts::extraction_prompt(response);
        let extracted = self.service.generate(&prompt).await?;
        Ok(normalize_answer(&extracted))
    }

    /// Answer a question and reduce the response to a normalized numeric
    /// prediction. An empty result means no digit could be isolated.
    pub async fn predict(&self, question: &str) -> AppResult<String> {
        let response = self.answer(question).await?;
        self.extract_answer(&response).await
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

    #[tokio::test]
    async fn test_predict_normalizes_the_extracted_answer() {
        let baseline = Baseline::new(Arc::new(FixedService("The answer is 4.")));
        let predicted = baseline.predict("2+2?").await.unwrap();
        assert_eq!(predicted, "4");
    }

    #[tokio::test]
    async fn test_predict_without_digits_is_empty() {
        let baseline = Baseline::new(Arc::new(FixedService("I cannot tell.")));
        let predicted = baseline.predict("2+2?").await.unwrap();
        assert_eq!(predicted, "");
    }
}
