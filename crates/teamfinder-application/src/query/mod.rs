//! Single-flight query caching.

mod cache;
mod cell;

pub use cache::QueryCache;
pub use cell::{QueryCell, QueryFn, QueryStatus, query_fn};

use std::time::Duration;

/// The auth query never goes stale on its own.
pub const STALE_NEVER: Option<Duration> = None;

/// Current user, other users' profiles and the skill catalogue.
pub const STALE_PROFILE: Option<Duration> = Some(Duration::from_secs(5 * 60));

/// Hackathons, achievements and applications.
pub const STALE_DEFAULT: Option<Duration> = Some(Duration::from_secs(60));
