//! Data transfer objects exposed over HTTP.

pub mod http;
