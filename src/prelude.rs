// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use tooldispatch::prelude::*;` to get started quickly.

pub use crate::backend::{
    BarChart, ChartSink, FeedItem, FeedSource, LexiconScorer, NoopChart, PolarityScorer,
    RecordingChart, RssFeed, TextChart,
};
pub use crate::config::{Config, FeedConfig, LoggingConfig};
pub use crate::error::{ChartError, ConfigError, Error, FeedError, ToolError};
pub use crate::tool::{
    ParamType, Parameter, ParameterSchema, Registry, RegistryBuilder, Tool, ToolDescriptor,
    ToolOutput, ToolSchema,
};
pub use crate::tools::{
    AnalyzeSentimentTool, ChooseTransportTool, EstimateCostTool, EstimateLatencyTool,
    FetchNewsTool, PlotTopicFrequencyTool, Transport, builtin_registry, registry_with,
};
