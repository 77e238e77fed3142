//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - The reqwest-based backend client for the module feed
//! - Tokio runtime bridge for async operations

pub mod backend;
pub mod runtime;

pub use backend::{BackendClient, BackendError};
pub use runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
