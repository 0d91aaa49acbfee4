//! Shared Dioxus components and browser transport for the budget report app.
//!
//! This crate provides:
//! - `api`: `window.fetch` transport for the report endpoint
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (form inputs, results region, etc.)

pub mod api;
pub mod state;
pub mod components;
