//! User-triggered, state-changing request whose result replaces the value held
//! by a polling view.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::resource::{Fetcher, SharedState, lock};

pub struct UpdateAction<T> {
    name: &'static str,
    action: Fetcher<T>,
    target: SharedState<T>,
    in_flight: Arc<AtomicBool>,
    error: Arc<Mutex<Option<String>>>,
}

impl<T: Send + 'static> UpdateAction<T> {
    pub fn new(name: &'static str, target: SharedState<T>, action: Fetcher<T>) -> Self {
        Self {
            name,
            action,
            target,
            in_flight: Arc::new(AtomicBool::new(false)),
            error: Arc::new(Mutex::new(None)),
        }
    }

    /// Starts the action unless one is already running. Returns whether a
    /// request was issued.
    pub fn trigger(&self) -> bool {
        if lock(&self.target).is_disposed() {
            return false;
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("{}: already running, trigger ignored", self.name);
            return false;
        }

        log::info!("{}: started", self.name);
        let request = (self.action)();
        let name = self.name;
        let target = Arc::clone(&self.target);
        let in_flight = Arc::clone(&self.in_flight);
        let error = Arc::clone(&self.error);
        tokio::spawn(async move {
            match request.await {
                Ok(value) => {
                    if lock(&target).replace(value) {
                        *lock(&error) = None;
                        log::info!("{name}: completed");
                    }
                }
                Err(err) => {
                    if lock(&target).is_disposed() {
                        log::debug!("{name}: discarded failure after unmount: {err}");
                    } else {
                        log::warn!("{name}: failed: {err}");
                        *lock(&error) = Some(err.to_string());
                    }
                }
            }
            in_flight.store(false, Ordering::Release);
        });
        true
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Message from the last failed run, cleared by the next success.
    pub fn error(&self) -> Option<String> {
        lock(&self.error).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::view_state::ViewState;
    use crate::request::FetchError;
    use futures::FutureExt;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::oneshot;

    async fn settle() {
        for _ in 0..3 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    type Reply = Result<&'static str, FetchError>;

    fn gated_action(
        calls: Arc<AtomicUsize>,
        gate: Arc<Mutex<Option<oneshot::Receiver<Reply>>>>,
    ) -> Fetcher<&'static str> {
        Arc::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            let rx = lock(&gate).take();
            async move {
                match rx {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(FetchError::Transport("dropped".to_string()))),
                    None => Err(FetchError::Transport("no gate".to_string())),
                }
            }
            .boxed()
        })
    }

    fn ready_state(value: &'static str) -> SharedState<&'static str> {
        let mut state = ViewState::new();
        state.replace(value);
        Arc::new(Mutex::new(state))
    }

    #[tokio::test(start_paused = true)]
    async fn second_trigger_while_running_is_noop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel();
        let gate = Arc::new(Mutex::new(Some(rx)));
        let target = ready_state("GCZ24");
        let action = UpdateAction::new("update", target.clone(), gated_action(calls.clone(), gate));

        assert!(action.trigger());
        assert!(action.is_in_flight());
        assert!(!action.trigger());
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tx.send(Ok("GCM25")).unwrap();
        settle().await;
        assert!(!action.is_in_flight());
        assert_eq!(lock(&target).data(), Some(&"GCM25"));
        assert_eq!(action.error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_keeps_previous_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel();
        let gate = Arc::new(Mutex::new(Some(rx)));
        let target = ready_state("GCZ24");
        let action = UpdateAction::new("update", target.clone(), gated_action(calls, gate));

        action.trigger();
        tx.send(Err(FetchError::Api {
            status: 500,
            message: "주 계약 업데이트 실패".to_string(),
        }))
        .unwrap();
        settle().await;

        assert_eq!(lock(&target).data(), Some(&"GCZ24"));
        assert_eq!(action.error().as_deref(), Some("주 계약 업데이트 실패"));
        assert!(!action.is_in_flight());
    }

    #[tokio::test(start_paused = true)]
    async fn failure_after_unmount_is_discarded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel();
        let gate = Arc::new(Mutex::new(Some(rx)));
        let target = ready_state("GCZ24");
        let action = UpdateAction::new("update", target.clone(), gated_action(calls, gate));

        assert!(action.trigger());
        lock(&target).dispose();
        tx.send(Err(FetchError::Transport("late".to_string()))).unwrap();
        settle().await;

        assert_eq!(action.error(), None);
        assert_eq!(lock(&target).data(), Some(&"GCZ24"));
        assert!(!action.is_in_flight());
    }

    #[tokio::test(start_paused = true)]
    async fn success_after_unmount_is_discarded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel();
        let gate = Arc::new(Mutex::new(Some(rx)));
        let target = ready_state("GCZ24");
        let action = UpdateAction::new("update", target.clone(), gated_action(calls, gate));

        assert!(action.trigger());
        lock(&target).dispose();
        tx.send(Ok("GCM25")).unwrap();
        settle().await;

        assert_eq!(lock(&target).data(), Some(&"GCZ24"));
        assert!(!action.is_in_flight());
    }

    #[tokio::test(start_paused = true)]
    async fn disposed_target_rejects_trigger() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Arc::new(Mutex::new(None));
        let target = ready_state("GCZ24");
        lock(&target).dispose();
        let action = UpdateAction::new("update", target, gated_action(calls.clone(), gate));

        assert!(!action.trigger());
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
