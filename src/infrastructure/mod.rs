//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: creature record stores and the domain storage adapter
//! - Config: Application configuration
//! - State: Wiring of repositories, services and facade

pub mod config;
pub mod persistence;
pub mod state;
