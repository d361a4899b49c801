//! Domain layer of the Teamfinder client.
//!
//! Models, the shared error type, configuration, and the traits the
//! infrastructure and interaction crates implement.

pub mod achievement;
pub mod application;
pub mod auth;
pub mod config;
pub mod error;
pub mod format;
pub mod hackathon;
pub mod launch;
pub mod page;
pub mod role;
pub mod skill;
pub mod storage;
pub mod user;
pub mod validation;

// Re-export common error type
pub use error::{Result, TeamfinderError};
