//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal` per state struct; pages and components read
//! them with `expect_context`.

pub mod auth;
pub mod route;
