use std::sync::Arc;
use teamfinder_core::auth::Session;
use tokio::sync::watch;

use super::query::AuthQuery;
use crate::query::QueryStatus;

/// Placeholder shown while the bootstrap is pending.
pub const LOADING_PLACEHOLDER: &str = "Signing in...";

/// What the gate shows for the current auth state.
#[derive(Debug, Clone, PartialEq)]
pub enum GateView {
    Loading,
    /// Fatal bootstrap error, as a user-facing message.
    Failed(String),
    Ready(Arc<Session>),
}

/// Output of [`AuthGate::render`].
#[derive(Debug, Clone, PartialEq)]
pub enum Gated<R> {
    Loading(&'static str),
    Failed(String),
    Ready(R),
}

impl<R> Gated<R> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Gated::Ready(_))
    }
}

/// Blocks everything behind it until the auth bootstrap has resolved.
///
/// The gate only observes [`AuthQuery`]; it never retries. A retry is an
/// explicit [`AuthQuery::refetch`].
pub struct AuthGate {
    query: AuthQuery,
    status: watch::Receiver<QueryStatus<Arc<Session>>>,
}

impl AuthGate {
    pub fn new(query: &AuthQuery) -> Self {
        Self {
            query: query.clone(),
            status: query.subscribe(),
        }
    }

    pub fn view(&self) -> GateView {
        view_of(&self.status.borrow())
    }

    /// Renders `children` with the session once authenticated, or a
    /// placeholder otherwise. `children` is not called before then.
    pub fn render<R, F>(&self, children: F) -> Gated<R>
    where
        F: FnOnce(Arc<Session>) -> R,
    {
        match self.view() {
            GateView::Loading => Gated::Loading(LOADING_PLACEHOLDER),
            GateView::Failed(message) => Gated::Failed(message),
            GateView::Ready(session) => Gated::Ready(children(session)),
        }
    }

    /// Waits until the bootstrap has settled, starting it if nobody has.
    ///
    /// A cached failure is returned as is; no new request is made.
    pub async fn settled(&mut self) -> GateView {
        if let Err(e) = self.query.session().await {
            tracing::debug!("[AuthGate] Bootstrap failed: {}", e);
        }
        self.status.borrow_and_update();
        self.view()
    }

    /// Waits for the next auth state change.
    pub async fn changed(&mut self) -> GateView {
        if self.status.changed().await.is_err() {
            tracing::debug!("[AuthGate] Auth query dropped");
        }
        view_of(&self.status.borrow_and_update())
    }
}

fn view_of(status: &QueryStatus<Arc<Session>>) -> GateView {
    match status {
        QueryStatus::Idle | QueryStatus::Loading => GateView::Loading,
        QueryStatus::Failed(e) => GateView::Failed(e.user_message().to_string()),
        QueryStatus::Ready(session) => GateView::Ready(session.clone()),
    }
}
