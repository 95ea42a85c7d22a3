//! Local state of one data-bearing view.
//!
//! `Idle -> Loading -> {Ready, Failed}`, and back to `Loading` on every new
//! request. Each request carries a sequence number; only the response to the
//! latest issued request is applied. Once disposed nothing is applied.

use crate::request::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Whether a view keeps showing the previous payload while reloading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StalePolicy {
    Blank,
    KeepStale,
}

/// What a view should draw right now.
#[derive(Debug, PartialEq)]
pub enum Visible<'a, T> {
    Loading,
    Failed(&'a str),
    Data(&'a T),
}

#[derive(Debug)]
pub struct ViewState<T> {
    phase: Phase,
    data: Option<T>,
    error: Option<String>,
    latest_seq: u64,
    disposed: bool,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error: None,
            latest_seq: 0,
            disposed: false,
        }
    }

    /// Registers a new request and returns its sequence number, or `None`
    /// when the view is gone and no request should be made.
    pub fn begin(&mut self) -> Option<u64> {
        if self.disposed {
            return None;
        }
        self.latest_seq += 1;
        self.phase = Phase::Loading;
        self.error = None;
        Some(self.latest_seq)
    }

    /// Applies a response. Returns `false` if it was discarded as stale or
    /// because the view was disposed.
    pub fn complete(&mut self, seq: u64, result: Result<T, FetchError>) -> bool {
        if self.disposed || seq != self.latest_seq {
            return false;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.phase = Phase::Ready;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Installs a value obtained outside the polling cycle, such as the result
    /// of a user action. Any request still in flight becomes stale.
    pub fn replace(&mut self, data: T) -> bool {
        if self.disposed {
            return false;
        }
        self.latest_seq += 1;
        self.data = Some(data);
        self.error = None;
        self.phase = Phase::Ready;
        true
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Loading)
    }

    pub fn visible(&self, policy: StalePolicy) -> Visible<'_, T> {
        match (self.phase, policy, self.data.as_ref(), self.error.as_deref()) {
            (Phase::Failed, _, _, Some(message)) => Visible::Failed(message),
            (Phase::Ready, _, Some(data), _) => Visible::Data(data),
            (Phase::Loading | Phase::Idle, StalePolicy::KeepStale, Some(data), _) => {
                Visible::Data(data)
            }
            _ => Visible::Loading,
        }
    }
}
