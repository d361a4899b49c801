//! Authentication: bootstrap state machine, its cached query, and the gate
//! in front of everything else.

mod bootstrap;
mod gate;
mod query;

pub use bootstrap::{AuthBootstrap, BootstrapState, LoginPolicy};
pub use gate::{AuthGate, GateView, Gated, LOADING_PLACEHOLDER};
pub use query::AuthQuery;
