// ABOUTME: Tool module - defines tools, schemas, outputs, and the registry.
// ABOUTME: Core abstraction for name-based capability dispatch.

mod output;
mod registry;
mod schema;
mod traits;

pub use output::*;
pub use registry::*;
pub use schema::*;
pub use traits::*;

#[cfg(test)]
mod output_test;
