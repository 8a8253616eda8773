// ABOUTME: Root module for tooldispatch - a registry of self-describing tools.
// ABOUTME: Re-exports all public types from submodules.

pub mod backend;
pub mod config;
pub mod error;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use error::Error;
