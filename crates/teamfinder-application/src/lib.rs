//! Application layer of the Teamfinder client.
//!
//! Credential resolution, the session store, the auth bootstrap and its
//! gate, single-flight query caching, auto-saving editors and the resource
//! services, wired together by [`TeamfinderApp`].

pub mod app;
pub mod auth;
pub mod autosave;
pub mod launch;
pub mod query;
pub mod services;
pub mod session_store;

pub use app::TeamfinderApp;
pub use auth::{AuthBootstrap, AuthGate, AuthQuery, GateView, Gated};
pub use session_store::SessionStore;
