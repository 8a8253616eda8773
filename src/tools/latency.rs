// ABOUTME: EstimateLatencyTool - qualitative end-to-end latency per transport.
// ABOUTME: slaHours is accepted but intentionally does not change the estimate.

use async_trait::async_trait;
use serde::Deserialize;

use super::Transport;
use crate::tool::{ParamType, ParameterSchema, Tool, ToolOutput};

/// Tool that looks up a latency label for a transport.
pub struct EstimateLatencyTool;

impl EstimateLatencyTool {
    pub const NAME: &'static str = "estimate_latency";

    pub fn latency(transport: Transport) -> &'static str {
        match transport {
            Transport::Kafka => "Seconds–Minutes (async)",
            Transport::Api => "Milliseconds–Seconds (sync)",
        }
    }
}

#[async_trait]
impl Tool for EstimateLatencyTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Estimate end-to-end system latency"
    }

    fn parameters(&self) -> ParameterSchema {
        ParameterSchema::new()
            .required_enum("transport", &Transport::ALL)
            .required("slaHours", ParamType::Integer)
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolOutput, anyhow::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            transport: Transport,
            #[allow(dead_code)]
            sla_hours: i64,
        }
        let params: Params = serde_json::from_value(args)?;

        Ok(ToolOutput::new().with("latency", Self::latency(params.transport)))
    }
}
