// ABOUTME: Built-in tools for transport planning and headline analysis.
// ABOUTME: Also wires them into a registry with real or injected collaborators.

mod cost;
mod latency;
mod news;
mod sentiment;
mod topic_frequency;
mod transport;

use std::sync::Arc;

pub use cost::EstimateCostTool;
pub use latency::EstimateLatencyTool;
pub use news::FetchNewsTool;
pub use sentiment::AnalyzeSentimentTool;
pub use topic_frequency::{PlotTopicFrequencyTool, STATUS_NO_DATA, STATUS_PLOTTED};
pub use transport::{ChooseTransportTool, Transport};

use crate::backend::{ChartSink, FeedSource, LexiconScorer, PolarityScorer, RssFeed, TextChart};
use crate::config::Config;
use crate::error::{Error, ToolError};
use crate::tool::Registry;

/// Build a registry of all six tools around the given collaborators.
pub fn registry_with(
    feed: Arc<dyn FeedSource>,
    chart: Arc<dyn ChartSink>,
    scorer: Arc<dyn PolarityScorer>,
) -> Result<Registry, ToolError> {
    Registry::builder()
        .tool(ChooseTransportTool)
        .tool(EstimateCostTool)
        .tool(EstimateLatencyTool)
        .tool(FetchNewsTool::new(feed))
        .tool(PlotTopicFrequencyTool::new(chart))
        .tool(AnalyzeSentimentTool::new(scorer))
        .build()
}

/// Build a registry of all six tools with the default collaborators.
pub fn builtin_registry(config: &Config) -> Result<Registry, Error> {
    let feed = RssFeed::new(&config.feed)?;
    let chart = match &config.chart.output {
        Some(path) => TextChart::file(path),
        None => TextChart::stdout(),
    };

    Ok(registry_with(
        Arc::new(feed),
        Arc::new(chart),
        Arc::new(LexiconScorer::new()),
    )?)
}
