use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;
use teamfinder_core::{Result, TeamfinderError};
use tokio::sync::watch;
use tokio::time::Instant;

/// Produces one fresh request for a cell.
pub type QueryFn<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;

/// Wraps an async closure as a [`QueryFn`].
pub fn query_fn<T, F, Fut>(f: F) -> QueryFn<T>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

/// Observable state of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryStatus<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(TeamfinderError),
}

impl<T> QueryStatus<T> {
    /// `Ready` or `Failed`.
    pub fn is_settled(&self) -> bool {
        matches!(self, QueryStatus::Ready(_) | QueryStatus::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryStatus::Ready(value) => Some(value),
            _ => None,
        }
    }
}

type SharedFetch<T> = Shared<BoxFuture<'static, Result<T>>>;

enum Slot<T> {
    Empty,
    InFlight(SharedFetch<T>),
    Settled {
        result: Result<T>,
        fetched_at: Instant,
        invalidated: bool,
    },
}

struct CellState<T> {
    /// Bumped by every new request, invalidation and reset. A request only
    /// stores its result while its generation is still current.
    generation: u64,
    slot: Slot<T>,
}

struct CellInner<T> {
    name: String,
    stale_time: Option<Duration>,
    fetcher: QueryFn<T>,
    state: Mutex<CellState<T>>,
    status: watch::Sender<QueryStatus<T>>,
}

/// A cached asynchronous query with single-flight semantics.
///
/// Concurrent `fetch` calls share one in-flight request. A settled result is
/// served until it goes stale (`stale_time`, `None` = never), is invalidated,
/// or is explicitly refetched. A failure is cached only when `stale_time` is
/// `None`; otherwise it is stale at once and the next `fetch` retries.
pub struct QueryCell<T> {
    inner: Arc<CellInner<T>>,
}

impl<T> Clone for QueryCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> QueryCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an idle cell.
    ///
    /// # Arguments
    ///
    /// * `name` - Tag used in log messages
    /// * `stale_time` - How long a value stays fresh; `None` keeps it forever
    /// * `fetcher` - Issues one request for the value
    pub fn new(name: impl Into<String>, stale_time: Option<Duration>, fetcher: QueryFn<T>) -> Self {
        let (status, _) = watch::channel(QueryStatus::Idle);
        Self {
            inner: Arc::new(CellInner {
                name: name.into(),
                stale_time,
                fetcher,
                state: Mutex::new(CellState {
                    generation: 0,
                    slot: Slot::Empty,
                }),
                status,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the cached result, joins the in-flight request, or starts a
    /// new one, in that order.
    pub async fn fetch(&self) -> Result<T> {
        let request = {
            let mut state = self.inner.lock_state();
            if let Some(result) = self.inner.cached(&state) {
                tracing::debug!("[QueryCell:{}] Serving cached result", self.inner.name);
                return result;
            }
            match in_flight(&state) {
                Some(request) => {
                    tracing::debug!("[QueryCell:{}] Joining in-flight request", self.inner.name);
                    request
                }
                None => CellInner::start(&self.inner, &mut state),
            }
        };
        request.await
    }

    /// Starts a new request even if a result is cached or one is in flight.
    ///
    /// An in-flight request is superseded: its callers still receive its
    /// result, but the cell keeps only the new one.
    pub async fn refetch(&self) -> Result<T> {
        let request = {
            let mut state = self.inner.lock_state();
            CellInner::start(&self.inner, &mut state)
        };
        request.await
    }

    /// Marks the cached result as stale; the next `fetch` issues a request.
    ///
    /// A request already in flight is detached and will not store its result.
    pub fn invalidate(&self) {
        let mut state = self.inner.lock_state();
        state.generation += 1;
        let detach = match &mut state.slot {
            Slot::Settled { invalidated, .. } => {
                *invalidated = true;
                false
            }
            Slot::InFlight(_) => true,
            Slot::Empty => false,
        };
        if detach {
            state.slot = Slot::Empty;
            self.inner.publish(QueryStatus::Idle);
        }
        tracing::debug!("[QueryCell:{}] Invalidated", self.inner.name);
    }

    /// Drops every cached result and returns to `Idle`.
    pub fn reset(&self) {
        let mut state = self.inner.lock_state();
        state.generation += 1;
        state.slot = Slot::Empty;
        self.inner.publish(QueryStatus::Idle);
    }

    /// Stores `value` as a fresh result without a request.
    pub fn set_data(&self, value: T) {
        let mut state = self.inner.lock_state();
        state.generation += 1;
        state.slot = Slot::Settled {
            result: Ok(value.clone()),
            fetched_at: Instant::now(),
            invalidated: false,
        };
        self.inner.publish(QueryStatus::Ready(value));
    }

    pub fn status(&self) -> QueryStatus<T> {
        self.inner.status.borrow().clone()
    }

    /// Receiver notified on every status change.
    pub fn subscribe(&self) -> watch::Receiver<QueryStatus<T>> {
        self.inner.status.subscribe()
    }
}

impl<T> CellInner<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn lock_state(&self) -> MutexGuard<'_, CellState<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn cached(&self, state: &CellState<T>) -> Option<Result<T>> {
        match &state.slot {
            Slot::Settled {
                result,
                fetched_at,
                invalidated,
            } if !*invalidated && self.serves(result, *fetched_at) => Some(result.clone()),
            _ => None,
        }
    }

    /// Values are served while fresh. Failures are kept only by cells that
    /// never go stale; elsewhere the next `fetch` retries.
    fn serves(&self, result: &Result<T>, fetched_at: Instant) -> bool {
        match result {
            Ok(_) => self.is_fresh(fetched_at),
            Err(_) => self.stale_time.is_none(),
        }
    }

    fn is_fresh(&self, fetched_at: Instant) -> bool {
        match self.stale_time {
            None => true,
            Some(stale_time) => fetched_at.elapsed() < stale_time,
        }
    }

    fn start(inner: &Arc<Self>, state: &mut CellState<T>) -> SharedFetch<T> {
        state.generation += 1;
        let generation = state.generation;
        tracing::debug!(
            "[QueryCell:{}] Starting request (generation {})",
            inner.name,
            generation
        );

        let request = (inner.fetcher)();
        let owner: Weak<Self> = Arc::downgrade(inner);
        let shared = async move {
            let result = request.await;
            if let Some(owner) = owner.upgrade() {
                owner.complete(generation, &result);
            }
            result
        }
        .boxed()
        .shared();

        state.slot = Slot::InFlight(shared.clone());
        inner.publish(QueryStatus::Loading);
        shared
    }

    fn complete(&self, generation: u64, result: &Result<T>) {
        let mut state = self.lock_state();
        if state.generation != generation {
            tracing::debug!(
                "[QueryCell:{}] Discarding result of superseded request (generation {})",
                self.name,
                generation
            );
            return;
        }

        state.slot = Slot::Settled {
            result: result.clone(),
            fetched_at: Instant::now(),
            invalidated: false,
        };
        match result {
            Ok(value) => self.publish(QueryStatus::Ready(value.clone())),
            Err(e) => {
                tracing::debug!("[QueryCell:{}] Request failed: {}", self.name, e);
                self.publish(QueryStatus::Failed(e.clone()));
            }
        }
    }

    fn publish(&self, status: QueryStatus<T>) {
        self.status.send_replace(status);
    }
}

fn in_flight<T>(state: &CellState<T>) -> Option<SharedFetch<T>>
where
    T: Clone + Send + Sync + 'static,
{
    match &state.slot {
        Slot::InFlight(request) => Some(request.clone()),
        _ => None,
    }
}
