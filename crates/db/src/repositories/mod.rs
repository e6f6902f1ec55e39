//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async catalog methods
//! that accept `&JsonStore` as the first argument.

pub mod character_repo;

pub use character_repo::CharacterRepo;
