use std::sync::Arc;
use teamfinder_core::Result;
use teamfinder_core::auth::Session;
use tokio::sync::watch;

use super::bootstrap::AuthBootstrap;
use crate::query::{QueryCell, QueryStatus, STALE_NEVER, query_fn};

/// The cached result of the auth bootstrap.
///
/// The bootstrap runs at most once; concurrent callers share the in-flight
/// run, and the outcome (session or error) is kept until [`refetch`] is
/// called explicitly.
///
/// [`refetch`]: AuthQuery::refetch
#[derive(Clone)]
pub struct AuthQuery {
    cell: QueryCell<Arc<Session>>,
}

impl AuthQuery {
    pub fn new(bootstrap: Arc<AuthBootstrap>) -> Self {
        let cell = QueryCell::new(
            "auth",
            STALE_NEVER,
            query_fn(move || {
                let bootstrap = bootstrap.clone();
                async move { bootstrap.run().await.map(Arc::new) }
            }),
        );
        Self { cell }
    }

    /// The session, running the bootstrap on first use.
    pub async fn session(&self) -> Result<Arc<Session>> {
        self.cell.fetch().await
    }

    /// Runs the bootstrap again, replacing the cached outcome.
    pub async fn refetch(&self) -> Result<Arc<Session>> {
        tracing::info!("[AuthQuery] Refetch requested");
        self.cell.refetch().await
    }

    /// Forgets the cached outcome without running the bootstrap.
    pub fn reset(&self) {
        self.cell.reset();
    }

    pub fn status(&self) -> QueryStatus<Arc<Session>> {
        self.cell.status()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryStatus<Arc<Session>>> {
        self.cell.subscribe()
    }
}
