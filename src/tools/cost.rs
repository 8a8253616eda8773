// ABOUTME: EstimateCostTool - qualitative infrastructure cost per transport.
// ABOUTME: Volume is accepted but intentionally does not change the estimate.

use async_trait::async_trait;
use serde::Deserialize;

use super::Transport;
use crate::tool::{ParamType, ParameterSchema, Tool, ToolOutput};

/// Tool that looks up a relative cost label for a transport.
pub struct EstimateCostTool;

impl EstimateCostTool {
    pub const NAME: &'static str = "estimate_cost";

    pub fn cost(transport: Transport) -> &'static str {
        match transport {
            Transport::Kafka => "Medium–High (broker, ops, storage)",
            Transport::Api => "Low–Medium (stateless scaling)",
        }
    }
}

#[async_trait]
impl Tool for EstimateCostTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Estimate relative infrastructure cost"
    }

    fn parameters(&self) -> ParameterSchema {
        ParameterSchema::new()
            .required_enum("transport", &Transport::ALL)
            .required("volume", ParamType::Integer)
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolOutput, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            transport: Transport,
            #[allow(dead_code)]
            volume: i64,
        }
        let params: Params = serde_json::from_value(args)?;

        Ok(ToolOutput::new().with("cost", Self::cost(params.transport)))
    }
}
