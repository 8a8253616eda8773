// ABOUTME: PlotTopicFrequencyTool - counts frequent headline words and sends a
// ABOUTME: bar chart of the top ten to a ChartSink.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::backend::{BarChart, ChartSink};
use crate::tool::{ParamType, ParameterSchema, Tool, ToolOutput};

/// Words this many characters or shorter are ignored.
const MIN_WORD_CHARS: usize = 3;

const TOP_WORDS: usize = 10;

const CHART_TITLE: &str = "Top words in news headlines";

pub const STATUS_PLOTTED: &str = "plot_created";
pub const STATUS_NO_DATA: &str = "no_data";

/// Tool that charts the most frequent words across headlines.
pub struct PlotTopicFrequencyTool {
    sink: Arc<dyn ChartSink>,
}

impl PlotTopicFrequencyTool {
    pub const NAME: &'static str = "plot_topic_frequency";

    pub fn new(sink: Arc<dyn ChartSink>) -> Self {
        Self { sink }
    }

    /// The `n` most common lowercase words longer than three characters.
    ///
    /// Ties keep the order in which words were first seen.
    pub fn top_words<S: AsRef<str>>(headlines: &[S], n: usize) -> Vec<(String, u64)> {
        let mut counts: Vec<(String, u64)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        let words = headlines
            .iter()
            .flat_map(|h| h.as_ref().split_whitespace())
            .filter(|w| w.chars().count() > MIN_WORD_CHARS)
            .map(str::to_lowercase);

        for word in words {
            match index.get(&word) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push((word, 1));
                }
            }
        }

        // Stable sort preserves first-seen order among equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }
}

#[async_trait]
impl Tool for PlotTopicFrequencyTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Plot most frequent words in headlines"
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

        let bars = Self::top_words(params.headlines.as_slice(), TOP_WORDS);
        if bars.is_empty() {
            debug!("no words to plot");
            return Ok(ToolOutput::new().with("status", STATUS_NO_DATA));
        }

        self.sink.render(&BarChart::new(CHART_TITLE, bars))?;
        Ok(ToolOutput::new().with("status", STATUS_PLOTTED))
    }
}
