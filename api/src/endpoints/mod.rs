//! Typed endpoint wrappers, one module per API resource. Each is an
//! `impl ApiClient` block so callers see a single client surface.

mod audit_logs;
mod auth;
mod cases;
mod members;
mod offense_types;
mod punishments;
mod students;

pub use auth::{LoginResponse, ProfileUpdate};
