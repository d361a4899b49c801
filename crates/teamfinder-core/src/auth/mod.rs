//! Authentication domain module.
//!
//! - `model`: the session and the placeholder developer identity
//! - `slot`: the bearer token attached to outgoing requests
//! - `backend`: the auth endpoints the bootstrap talks to

mod backend;
mod model;
mod slot;

pub use backend::AuthBackend;
pub use model::{AUTH_STORAGE_KEY, DevIdentity, Session};
pub use slot::AuthorizationSlot;
