//! Persisted document shape and request DTOs.

pub mod character;
