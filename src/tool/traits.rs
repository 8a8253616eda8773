// ABOUTME: Defines the Tool trait - the capability contract every tool honors.
// ABOUTME: Tools have a name, description, parameter schema, and async execute.

use async_trait::async_trait;

use super::{ParameterSchema, ToolDescriptor, ToolOutput, ToolSchema};

/// A named, self-describing operation that can be invoked through a registry.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the caller.
    fn description(&self) -> &str;

    /// Returns the declared parameters this tool accepts.
    fn parameters(&self) -> ParameterSchema;

    /// Returns the full static description of this tool.
    fn describe(&self) -> ToolSchema {
        ToolSchema::new(
            ToolDescriptor::new(self.name(), self.description()),
            self.parameters(),
        )
    }

    /// Execute the tool. Arguments are expected to satisfy `parameters()`.
    async fn execute(&self, args: serde_json::Value) -> Result<ToolOutput, anyhow::Error>;
}
