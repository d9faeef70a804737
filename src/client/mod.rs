//!
//! # Typed HTTP Client
//!
//! Consumer-side counterpart to the server: a thin wrapper over `reqwest`
//! that injects the current bearer token into every request and normalizes
//! failures into [`ApiError`], plus the persisted session store holding the
//! token between requests. The store is handed to the client at construction
//! rather than reached through a global, so token state has exactly one
//! explicit owner.

pub mod api;
pub mod store;

pub use api::{ApiClient, ApiError, TokenSource, UNKNOWN_ERROR_CODE};
pub use store::{InMemorySessionStorage, SessionStore, StorageBackend, UserIdentity};
