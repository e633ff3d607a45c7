//! # API crate — REST client for the Discipline Tracker frontends
//!
//! Everything the screens need to talk to the disciplinary-case backend:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Bearer-token JSON client and the `{ data, count }` envelopes |
//! | [`config`] | Base-URL configuration with an environment override |
//! | [`error`] | Failure taxonomy: auth rejection, non-2xx, transport |
//! | [`models`] | Entity models: students, cases, offense types, punishments, members, audit logs |
//! | [`endpoints`] | Per-resource CRUD plus the case lifecycle transitions |
//! | [`aggregate`] | Pure rollups: per-student case groups, dashboard stats |
//!
//! The client holds no authority over entity data: every mutation is
//! reconciled by a re-fetch, so mutation helpers return `()` and callers
//! reload their lists.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::{ApiClient, ItemResponse, ListResponse};
pub use config::ApiConfig;
pub use error::ApiError;

pub use store::{Profile, Role};
