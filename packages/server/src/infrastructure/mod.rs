//! Infrastructure layer: concrete codec, registry storage and DTOs.

pub mod codec;
pub mod dto;
pub mod repository;
