//! Shared utilities for the relay server and client.

pub mod logger;
pub mod time;
