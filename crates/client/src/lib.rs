//! `charcat-client` library crate.
//!
//! The catalog UI logic: an HTTP client for the API service, the view state
//! it drives, and the interactive seams (prompt, confirm, notify) a front
//! end plugs in. The terminal front end lives in `main.rs`.

pub mod api;
pub mod command;
pub mod interaction;
pub mod view;
