//! Fetch-on-mount plus interval refresh for a single view.
//!
//! The timer task and one detached task per request share the view state with
//! the UI loop. Unmounting aborts the timer and disposes the state, so a
//! request still in flight completes into a no-op.

use futures::future::BoxFuture;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::view_state::ViewState;
use crate::request::FetchError;

/// Produces one request future per call: endpoint plus decoder.
pub type Fetcher<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, FetchError>> + Send + Sync>;

pub type SharedState<T> = Arc<Mutex<ViewState<T>>>;

/// Poisoning only means another task panicked mid-update; the state itself
/// is always consistent, so keep using it.
pub fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct PollingResource<T> {
    name: &'static str,
    state: SharedState<T>,
    fetcher: Fetcher<T>,
    refresh: Option<Duration>,
    mounted: bool,
    timer: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> PollingResource<T> {
    pub fn new(name: &'static str, refresh: Option<Duration>, fetcher: Fetcher<T>) -> Self {
        Self {
            name,
            state: Arc::new(Mutex::new(ViewState::new())),
            fetcher,
            refresh,
            mounted: false,
            timer: None,
        }
    }

    /// Issues the initial request and starts the refresh timer. Must run
    /// inside a tokio runtime. A second call while mounted does nothing.
    pub fn mount(&mut self) {
        if self.mounted || lock(&self.state).is_disposed() {
            return;
        }
        self.mounted = true;
        log::info!("{}: mounted (refresh {:?})", self.name, self.refresh);
        issue(self.name, &self.state, &self.fetcher);

        if let Some(period) = self.refresh {
            let name = self.name;
            let state = Arc::clone(&self.state);
            let fetcher = Arc::clone(&self.fetcher);
            self.timer = Some(tokio::spawn(async move {
                let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    log::debug!("{name}: scheduled refresh");
                    issue(name, &state, &fetcher);
                }
            }));
        }
    }

    /// Re-fetches now, outside the timer schedule.
    pub fn refresh(&self) {
        if self.mounted {
            issue(self.name, &self.state, &self.fetcher);
        }
    }

    /// Stops the timer and disposes the state. The resource cannot be
    /// mounted again afterwards.
    pub fn unmount(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let mut state = lock(&self.state);
        if !state.is_disposed() {
            state.dispose();
            log::info!("{}: unmounted", self.name);
        }
        self.mounted = false;
    }

    pub fn state(&self) -> MutexGuard<'_, ViewState<T>> {
        lock(&self.state)
    }

    pub fn shared_state(&self) -> SharedState<T> {
        Arc::clone(&self.state)
    }
}

impl<T> Drop for PollingResource<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        lock(&self.state).dispose();
    }
}

fn issue<T: Send + 'static>(name: &'static str, state: &SharedState<T>, fetcher: &Fetcher<T>) {
    let Some(seq) = lock(state).begin() else {
        return;
    };
    let request = fetcher();
    let state = Arc::clone(state);
    tokio::spawn(async move {
        let result = request.await;
        if let Err(err) = &result {
            match err.status() {
                Some(status) => log::warn!("{name}: request #{seq} failed with {status}: {err}"),
                None => log::warn!("{name}: request #{seq} failed: {err}"),
            }
        }
        if !lock(&state).complete(seq, result) {
            log::debug!("{name}: discarded response #{seq}");
        }
    });
}
