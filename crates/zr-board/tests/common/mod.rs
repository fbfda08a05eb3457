#![allow(dead_code, unused_imports)]

pub(crate) mod fake_gateway;
pub(crate) mod fixtures;

pub use fake_gateway::*;
pub use fixtures::*;
