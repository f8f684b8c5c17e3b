//! Wire codec implementations.

pub mod json;

pub use json::JsonCodec;
