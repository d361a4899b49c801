//! HTTP interaction with the Teamfinder backend.

mod api;
mod client;

pub use client::ApiClient;
