//! Resource endpoints, one module per backend resource. Each module adds
//! methods to [`ApiClient`](crate::ApiClient).

mod achievements;
mod applications;
mod auth;
mod hackathons;
mod skills;
mod users;
