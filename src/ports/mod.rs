//! Ports - boundaries between the agent core and the external simulation

pub mod snapshot;

pub use snapshot::GameSnapshot;
