//! Ember Core - Foundational types for the Ember engine
//!
//! This crate provides the types that all other Ember crates depend on:
//! - `EmberError` - Error taxonomy for the runtime and host
//! - `Result` - Result alias used throughout the workspace

mod error;

pub use error::{EmberError, Result};
