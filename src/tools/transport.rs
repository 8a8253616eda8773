// ABOUTME: ChooseTransportTool - picks Kafka or API from delivery constraints.
// ABOUTME: Also defines the Transport enum shared by the estimator tools.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::tool::{ParamType, ParameterSchema, Tool, ToolOutput};

/// Minimum SLA window, in hours, that tolerates asynchronous delivery.
const KAFKA_MIN_SLA_HOURS: i64 = 2;

/// Minimum message volume that justifies running a broker.
const KAFKA_MIN_VOLUME: i64 = 1000;

/// Integration transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transport {
    Kafka,
    #[serde(rename = "API")]
    Api,
}

impl Transport {
    pub const ALL: [&'static str; 2] = ["Kafka", "API"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kafka => "Kafka",
            Self::Api => "API",
        }
    }

    /// Kafka only when the producer pushes, the SLA allows async delivery,
    /// and volume is high enough.
    pub fn choose(sla_hours: i64, volume: i64, push: bool) -> Self {
        if push && sla_hours >= KAFKA_MIN_SLA_HOURS && volume >= KAFKA_MIN_VOLUME {
            Self::Kafka
        } else {
            Self::Api
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tool that selects a transport for a workload.
pub struct ChooseTransportTool;

impl ChooseTransportTool {
    pub const NAME: &'static str = "choose_transport";
}

#[async_trait]
impl Tool for ChooseTransportTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Choose Kafka vs API based on system constraints"
    }

    fn parameters(&self) -> ParameterSchema {
        ParameterSchema::new()
            .required("slaHours", ParamType::Integer)
            .required("volume", ParamType::Integer)
            .required("push", ParamType::Boolean)
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolOutput, anyhow::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            sla_hours: i64,
            volume: i64,
            push: bool,
        }
        let params: Params = serde_json::from_value(args)?;

        let transport = Transport::choose(params.sla_hours, params.volume, params.push);
        Ok(ToolOutput::new().with("transport", transport))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn choose(args: serde_json::Value) -> String {
        let output = tokio_test::block_on(ChooseTransportTool.execute(args)).unwrap();
        output.get("transport").unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_kafka_at_thresholds() {
        assert_eq!(choose(json!({"slaHours": 2, "volume": 1000, "push": true})), "Kafka");
    }

    #[test]
    fn test_short_sla_uses_api() {
        assert_eq!(choose(json!({"slaHours": 1, "volume": 1000, "push": true})), "API");
    }

    #[test]
    fn test_pull_uses_api() {
        assert_eq!(choose(json!({"slaHours": 5, "volume": 5000, "push": false})), "API");
    }

    #[test]
    fn test_low_volume_uses_api() {
        assert_eq!(choose(json!({"slaHours": 24, "volume": 999, "push": true})), "API");
    }

    #[test]
    fn test_total_over_inputs() {
        for sla in [-1, 0, 1, 2, 3, 1_000] {
            for volume in [-5, 0, 999, 1000, 1_000_000] {
                for push in [true, false] {
                    let expected = if push && sla >= 2 && volume >= 1000 {
                        Transport::Kafka
                    } else {
                        Transport::Api
                    };
                    assert_eq!(Transport::choose(sla, volume, push), expected);
                }
            }
        }
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let result = tokio_test::block_on(ChooseTransportTool.execute(json!({"slaHours": 2})));
        assert!(result.is_err());
    }

    #[test]
    fn test_transport_serializes_to_wire_names() {
        assert_eq!(serde_json::to_value(Transport::Api).unwrap(), "API");
        assert_eq!(serde_json::to_value(Transport::Kafka).unwrap(), "Kafka");
        assert_eq!(Transport::Api.to_string(), "API");
    }
}
