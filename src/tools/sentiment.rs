// ABOUTME: AnalyzeSentimentTool - averages headline polarity scores.
// ABOUTME: An empty headline list averages to zero.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::backend::PolarityScorer;
use crate::tool::{ParamType, ParameterSchema, Tool, ToolOutput};

/// Tool that reports the mean polarity of a set of headlines.
pub struct AnalyzeSentimentTool {
    scorer: Arc<dyn PolarityScorer>,
}

impl AnalyzeSentimentTool {
    pub const NAME: &'static str = "analyze_sentiment";

    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Mean polarity rounded to three decimals, or 0.0 with no headlines.
    pub fn average<S: AsRef<str>>(&self, headlines: &[S]) -> f64 {
        if headlines.is_empty() {
            return 0.0;
        }
        let total: f64 = headlines
            .iter()
            .map(|h| self.scorer.polarity(h.as_ref()))
            .sum();
        round3(total / headlines.len() as f64)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[async_trait]
impl Tool for AnalyzeSentimentTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Analyze sentiment of text headlines"
    }

    fn parameters(&self) -> ParameterSchema {
        ParameterSchema::new().required("headlines", ParamType::array(ParamType::String))
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolOutput, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            headlines: Vec<String>,
        }
        let params: Params = serde_json::from_value(args)?;

        let average = self.average(params.headlines.as_slice());
        Ok(ToolOutput::new().with("averageSentiment", average))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Scores a headline by looking it up in a fixed table.
    struct TableScorer(Vec<(&'static str, f64)>);

    impl PolarityScorer for TableScorer {
        fn polarity(&self, text: &str) -> f64 {
            self.0
                .iter()
                .find(|(t, _)| *t == text)
                .map(|(_, s)| *s)
                .unwrap_or(0.0)
        }
    }

    fn tool(table: Vec<(&'static str, f64)>) -> AnalyzeSentimentTool {
        AnalyzeSentimentTool::new(Arc::new(TableScorer(table)))
    }

    #[tokio::test]
    async fn test_empty_headlines_average_zero() {
        let output = tool(Vec::new())
            .execute(json!({"headlines": []}))
            .await
            .unwrap();
        assert_eq!(output.get("averageSentiment").and_then(|v| v.as_f64()), Some(0.0));
    }

    #[tokio::test]
    async fn test_average_is_rounded() {
        let tool = tool(vec![("up", 1.0), ("down", -0.5), ("flat", 0.0)]);
        let output = tool
            .execute(json!({"headlines": ["up", "down", "flat"]}))
            .await
            .unwrap();

        // 0.5 / 3 = 0.1666...
        assert_eq!(output.get("averageSentiment").and_then(|v| v.as_f64()), Some(0.167));
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.12345), 0.123);
        assert_eq!(round3(-0.3337), -0.334);
        assert_eq!(round3(1.0), 1.0);
    }

    #[tokio::test]
    async fn test_non_array_headlines_rejected() {
        let result = tool(Vec::new())
            .execute(json!({"headlines": "not a list"}))
            .await;
        assert!(result.is_err());
    }
}
