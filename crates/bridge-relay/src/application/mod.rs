//! Application layer: use cases for the relay.

pub mod relay_command;
