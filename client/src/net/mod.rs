//! Networking modules for the server's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the session and route-workflow endpoints. Wire types come from
//! the shared `trip` crate.

pub mod api;
