//! Server-only glue between the Leptos server functions and muse-core.

pub mod ai;
pub mod state;
