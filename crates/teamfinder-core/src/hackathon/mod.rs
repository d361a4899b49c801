//! Hackathon domain module.

mod model;

pub use model::{Hackathon, HackathonMode, HackathonStatus};
