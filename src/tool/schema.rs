// ABOUTME: Declarative tool metadata - descriptors, parameter schemas, and the
// ABOUTME: function-calling export shape consumed by external planners.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use crate::error::ToolError;

/// Type tag for a single parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Array(Box<ParamType>),
}

impl ParamType {
    /// An array whose elements have the given type.
    pub fn array(items: ParamType) -> Self {
        Self::Array(Box::new(items))
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array(_) => "array",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array(items) => value
                .as_array()
                .is_some_and(|values| values.iter().all(|v| items.matches(v))),
        }
    }
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParamType,
    pub enum_values: Vec<String>,
    pub required: bool,
}

impl Parameter {
    /// JSON Schema fragment for this parameter: `{type, enum?, items?}`.
    fn property(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".into(), json!(self.kind.type_name()));
        if !self.enum_values.is_empty() {
            prop.insert("enum".into(), json!(self.enum_values));
        }
        if let ParamType::Array(items) = &self.kind {
            prop.insert("items".into(), json!({ "type": items.type_name() }));
        }
        Value::Object(prop)
    }

    fn check(&self, value: &Value) -> Result<(), ToolError> {
        if !self.kind.matches(value) {
            return Err(ToolError::InvalidParams(format!(
                "'{}' must be of type {}",
                self.name,
                self.kind.type_name()
            )));
        }
        if !self.enum_values.is_empty() {
            let allowed = value
                .as_str()
                .is_some_and(|s| self.enum_values.iter().any(|e| e == s));
            if !allowed {
                return Err(ToolError::InvalidParams(format!(
                    "'{}' must be one of {:?}",
                    self.name, self.enum_values
                )));
            }
        }
        Ok(())
    }
}

/// Ordered description of the arguments a tool accepts.
///
/// This is data, not an enforced contract: the registry only consults it in
/// [`Registry::execute_checked`](super::Registry::execute_checked).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSchema {
    params: Vec<Parameter>,
}

impl ParameterSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required parameter.
    pub fn required(self, name: impl Into<String>, kind: ParamType) -> Self {
        self.push(name.into(), kind, Vec::new(), true)
    }

    /// Declare an optional parameter.
    pub fn optional(self, name: impl Into<String>, kind: ParamType) -> Self {
        self.push(name.into(), kind, Vec::new(), false)
    }

    /// Declare a required string parameter restricted to fixed values.
    pub fn required_enum(self, name: impl Into<String>, values: &[&str]) -> Self {
        let values = values.iter().map(|v| v.to_string()).collect();
        self.push(name.into(), ParamType::String, values, true)
    }

    fn push(
        mut self,
        name: String,
        kind: ParamType,
        enum_values: Vec<String>,
        required: bool,
    ) -> Self {
        self.params.push(Parameter {
            name,
            kind,
            enum_values,
            required,
        });
        self
    }

    /// All parameters in declaration order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Names of required parameters in declaration order.
    pub fn required_names(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// The `{type: "object", properties, required}` JSON Schema object.
    pub fn to_json(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.clone(), p.property()))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_names(),
        })
    }

    /// Check `args` against the declared parameters.
    ///
    /// Undeclared keys are allowed; declared keys must match their type tag.
    pub fn validate(&self, args: &Value) -> Result<(), ToolError> {
        let Some(obj) = args.as_object() else {
            return Err(ToolError::InvalidParams(
                "arguments must be a JSON object".to_string(),
            ));
        };

        for param in &self.params {
            match obj.get(&param.name) {
                Some(value) => param.check(value)?,
                None if param.required => {
                    return Err(ToolError::InvalidParams(format!(
                        "missing required parameter '{}'",
                        param.name
                    )));
                }
                None => {}
            }
        }
        Ok(())
    }
}

impl Serialize for ParameterSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Name and human-readable description of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Everything a caller needs to discover and invoke one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    pub descriptor: ToolDescriptor,
    pub parameters: ParameterSchema,
}

impl ToolSchema {
    pub fn new(descriptor: ToolDescriptor, parameters: ParameterSchema) -> Self {
        Self {
            descriptor,
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// The `{type: "function", function: {...}}` export object.
    pub fn to_json(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.descriptor.name,
                "description": self.descriptor.description,
                "parameters": self.parameters.to_json(),
            }
        })
    }
}

impl Serialize for ToolSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
