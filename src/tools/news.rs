// ABOUTME: FetchNewsTool - retrieves headline titles for a topic from a feed.
// ABOUTME: Truncates to the requested limit while keeping source order.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::backend::FeedSource;
use crate::tool::{ParamType, ParameterSchema, Tool, ToolOutput};

/// Tool that fetches headlines from a [`FeedSource`].
pub struct FetchNewsTool {
    feed: Arc<dyn FeedSource>,
}

impl FetchNewsTool {
    pub const NAME: &'static str = "fetch_news";

    pub fn new(feed: Arc<dyn FeedSource>) -> Self {
        Self { feed }
    }
}

#[async_trait]
impl Tool for FetchNewsTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Fetch latest news headlines using open RSS feeds"
    }

    fn parameters(&self) -> ParameterSchema {
        ParameterSchema::new()
            .required("topic", ParamType::String)
            .required("limit", ParamType::Integer)
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolOutput, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            topic: String,
            limit: usize,
        }
        let params: Params = serde_json::from_value(args)?;

        let items = self.feed.fetch(&params.topic).await?;
        let headlines: Vec<String> = items
            .into_iter()
            .take(params.limit)
            .map(|item| item.title)
            .collect();
        debug!(topic = %params.topic, count = headlines.len(), "fetched headlines");

        Ok(ToolOutput::new().with("headlines", headlines))
    }
}
