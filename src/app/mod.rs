//! Application-level configuration for agent creation.

pub mod config;

pub use config::AgentConfig;
