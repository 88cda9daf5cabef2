//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own provider I/O and session bookkeeping so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod auth;
pub mod directions;
pub mod geocode;
pub mod session;
