//! The stdin/stdout wire protocol: typed messages and the line codec.

pub mod codec;
pub mod messages;
