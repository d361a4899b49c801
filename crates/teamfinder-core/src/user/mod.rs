//! User domain module.
//!
//! - `model`: the user profile as held by the client
//! - `patch`: partial profile updates sent with `PATCH /users/me`
//! - `backend`: the profile edit call

mod backend;
mod model;
mod patch;

pub use backend::ProfileBackend;
pub use model::User;
pub use patch::UserMainInfoPatch;
