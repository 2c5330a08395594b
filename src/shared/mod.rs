//! Shared types used across layers

pub mod types;

pub use types::{DomainError, DomainResult};
