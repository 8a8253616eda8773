// ABOUTME: Implements the Registry - an immutable name-keyed collection of tools
// ABOUTME: that exposes their schemas and dispatches invocations by name.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::{Tool, ToolOutput, ToolSchema};
use crate::error::ToolError;

/// A read-only registry of tools, built once and shared freely.
///
/// Cloning is cheap and clones share the same tools. There is no mutation
/// API, so concurrent lookups need no locking.
#[derive(Clone)]
pub struct Registry {
    tools: Arc<[Arc<dyn Tool>]>,
    index: Arc<HashMap<String, usize>>,
}

impl Registry {
    /// Build a registry from tools in the given order.
    ///
    /// Fails on an empty tool name or when two tools share a name.
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Result<Self, ToolError> {
        let mut index = HashMap::with_capacity(tools.len());

        for (pos, tool) in tools.iter().enumerate() {
            let name = tool.name();
            if name.is_empty() {
                return Err(ToolError::InvalidDefinition(format!(
                    "tool at position {} has an empty name",
                    pos
                )));
            }
            if index.insert(name.to_string(), pos).is_some() {
                return Err(ToolError::DuplicateName(name.to_string()));
            }
        }

        debug!(count = tools.len(), "tool registry built");

        Ok(Self {
            tools: tools.into(),
            index: Arc::new(index),
        })
    }

    /// Create a new registry builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.index.get(name).map(|&pos| Arc::clone(&self.tools[pos]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Tool names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Describe every tool, in registration order.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.describe()).collect()
    }

    /// The function-calling export array for every tool.
    pub fn schemas_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.tools.iter().map(|t| t.describe().to_json()).collect())
    }

    /// Execute a tool by name.
    ///
    /// `args` are forwarded untouched and the tool's output is returned as-is.
    /// A tool failure comes back as [`ToolError::Execution`] holding the
    /// tool's own error.
    pub async fn execute(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self.resolve(name)?;
        debug!(tool = name, "dispatching tool call");
        tool.execute(args).await.map_err(ToolError::Execution)
    }

    /// Validate `args` against the tool's declared parameters, then execute.
    pub async fn execute_checked(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self.resolve(name)?;
        tool.parameters().validate(&args)?;
        debug!(tool = name, "dispatching validated tool call");
        tool.execute(args).await.map_err(ToolError::Execution)
    }

    fn resolve(&self, name: &str) -> Result<Arc<dyn Tool>, ToolError> {
        self.get(name).ok_or_else(|| {
            warn!(tool = name, "unknown tool requested");
            ToolError::NotFound(name.to_string())
        })
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("tools", &self.names())
            .finish()
    }
}

/// Builder for constructing a registry one tool at a time.
#[derive(Default)]
pub struct RegistryBuilder {
    tools: Vec<Arc<dyn Tool>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool.
    pub fn tool<T: Tool + 'static>(self, tool: T) -> Self {
        self.tool_arc(Arc::new(tool))
    }

    /// Add a tool from an Arc.
    pub fn tool_arc(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Result<Registry, ToolError> {
        Registry::new(self.tools)
    }
}
