use futures::FutureExt;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Submits one debounced value.
pub type SubmitFn<T> = Arc<dyn Fn(T) -> BoxFuture<'static, ()> + Send + Sync>;

struct Pending<T> {
    token: CancellationToken,
    /// Taken by whichever of the timer and `flush` gets there first.
    value: Arc<Mutex<Option<T>>>,
}

/// Delays submissions until the input has been quiet for `delay`.
///
/// Each `schedule` cancels the pending submission and starts a new timer, so
/// only the last value within a window is submitted. Dropping the debouncer
/// cancels whatever is pending.
pub struct Debouncer<T> {
    name: &'static str,
    delay: Duration,
    submit: SubmitFn<T>,
    pending: Mutex<Option<Pending<T>>>,
}

impl<T> Debouncer<T>
where
    T: Send + 'static,
{
    pub fn new<F, Fut>(name: &'static str, delay: Duration, submit: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            name,
            delay,
            submit: Arc::new(move |value| submit(value).boxed()),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces the pending value and restarts the timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&self, value: T) {
        let token = CancellationToken::new();
        let slot = Arc::new(Mutex::new(Some(value)));

        let previous = self.lock_pending().replace(Pending {
            token: token.clone(),
            value: slot.clone(),
        });
        if let Some(previous) = previous {
            previous.token.cancel();
        }

        let submit = self.submit.clone();
        let delay = self.delay;
        let name = self.name;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::trace!("[Debouncer:{}] Superseded", name);
                }
                _ = tokio::time::sleep(delay) => {
                    let value = take(&slot);
                    if let Some(value) = value {
                        tracing::debug!("[Debouncer:{}] Submitting after {:?}", name, delay);
                        submit(value).await;
                    }
                }
            }
        });
    }

    /// Submits the pending value now, if any, and waits for the submission.
    /// Returns whether a value was submitted.
    pub async fn flush(&self) -> bool {
        let pending = self.lock_pending().take();
        let Some(pending) = pending else {
            return false;
        };
        pending.token.cancel();

        let value = take(&pending.value);
        match value {
            Some(value) => {
                tracing::debug!("[Debouncer:{}] Flushing", self.name);
                (self.submit)(value).await;
                true
            }
            None => false,
        }
    }

    /// Drops the pending value. Returns whether one was dropped.
    pub fn cancel(&self) -> bool {
        let pending = self.lock_pending().take();
        match pending {
            Some(pending) => {
                pending.token.cancel();
                take(&pending.value).is_some()
            }
            None => false,
        }
    }

    /// Whether a value is waiting for its timer.
    pub fn is_pending(&self) -> bool {
        self.lock_pending().as_ref().is_some_and(|pending| {
            pending
                .value
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .is_some()
        })
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<Pending<T>>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(pending) = pending.take() {
            pending.token.cancel();
        }
    }
}

fn take<T>(slot: &Mutex<Option<T>>) -> Option<T> {
    slot.lock().unwrap_or_else(|e| e.into_inner()).take()
}
