//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and map surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod map_view;
pub mod route_summary;
pub mod session_gate;
pub mod trip_form;
pub mod user_header;
