//! Domain building blocks shared by the store, the API service and the
//! client: identifier types, the error taxonomy and character field rules.

pub mod character;
pub mod error;
pub mod types;
