//! Applications to join a hackathon looking for a team.

mod model;

pub use model::{Application, ApplicationRequest};
