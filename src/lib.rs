#![doc = "The `teamsync` library crate."]
#![doc = ""]
#![doc = "Multi-tenant project and task tracking: configuration, the session and"]
#![doc = "bearer-token auth layer, the CORS gate, domain models, the REST route"]
#![doc = "groups, centralized error handling, and the typed client-side HTTP"]
#![doc = "wrapper with its persisted token store. The server binary (`main.rs`)"]
#![doc = "composes these into a running application."]

pub mod auth;
pub mod client;
pub mod config;
pub mod cors;
pub mod error;
pub mod models;
pub mod routes;

pub use crate::config::AppConfig;
pub use crate::error::AppError;
