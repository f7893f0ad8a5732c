use futures::future::{BoxFuture, FutureExt};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{
    models::{Network, Snapshot, ValidatorData},
    services::dashboard_service::DashboardService,
    utils::errors::Result,
};

/// What a page renders: a skeleton, an error panel with retry, or its data.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

type Loader<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;

/// Drives one page through loading, error and ready.
///
/// Each activation spawns a single fetch guarded by its own cancellation
/// token. A newer activation or a deactivation cancels the token, and a
/// cancelled fetch never publishes its result. Publishing happens under the
/// same lock `deactivate` takes, so no result lands after deactivation returns.
pub struct PageController<T> {
    name: &'static str,
    loader: Loader<T>,
    state: Arc<watch::Sender<ViewState<T>>>,
    in_flight: Arc<Mutex<Option<CancellationToken>>>,
}

impl<T> PageController<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<T>> + Send + Sync + 'static,
    {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            name,
            loader: Arc::new(loader),
            state: Arc::new(state),
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Enters `Loading` and issues the page's fetch, superseding any fetch
    /// still pending from an earlier activation.
    pub fn activate(&self) -> JoinHandle<()> {
        let token = CancellationToken::new();
        {
            let mut in_flight = lock(&self.in_flight);
            if let Some(previous) = in_flight.replace(token.clone()) {
                previous.cancel();
            }
            self.state.send_replace(ViewState::Loading);
        }

        let page = self.name;
        let fetch = (self.loader)();
        let state = Arc::clone(&self.state);
        let in_flight = Arc::clone(&self.in_flight);

        tokio::spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => {
                    debug!(page, "Page deactivated before fetch resolved");
                    return;
                }
                result = fetch => result,
            };

            let _guard = lock(&in_flight);
            if token.is_cancelled() {
                debug!(page, "Discarding result for deactivated page");
                return;
            }

            let next = match result {
                Ok(data) => ViewState::Ready(data),
                Err(err) => {
                    error!(page, error = %err, "Error fetching data");
                    ViewState::Error(err.user_message())
                }
            };
            state.send_replace(next);
        })
    }

    /// Re-issues the same fetch.
    pub fn retry(&self) -> JoinHandle<()> {
        info!(page = self.name, "Retrying");
        self.activate()
    }

    /// Cancels the pending fetch, if any. The current state is left as is.
    pub fn deactivate(&self) {
        if let Some(token) = lock(&self.in_flight).take() {
            token.cancel();
        }
    }

    pub fn state(&self) -> ViewState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.state.subscribe()
    }

    /// Waits for the current activation to leave `Loading`.
    ///
    /// Returns `Loading` right away if nothing is in flight, i.e. the page
    /// was never activated or was deactivated before its fetch resolved.
    /// A superseded fetch keeps the wait going on its replacement.
    pub async fn settled(&self) -> ViewState<T> {
        let mut rx = self.subscribe();
        loop {
            {
                let current = rx.borrow_and_update();
                if !current.is_loading() {
                    return current.clone();
                }
            }

            let pending = lock(&self.in_flight).clone();
            let token = match pending {
                Some(token) if !token.is_cancelled() => token,
                _ => return self.state(),
            };

            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        return self.state();
                    }
                }
                _ = token.cancelled() => {}
            }
        }
    }
}

impl<T> Drop for PageController<T> {
    fn drop(&mut self) {
        if let Some(token) = lock(&self.in_flight).take() {
            token.cancel();
        }
    }
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PageController<ValidatorData> {
    pub fn dashboard(service: DashboardService) -> Self {
        Self::new("dashboard", move || {
            let service = service.clone();
            async move { service.fetch_validator_data().await }.boxed()
        })
    }
}

impl PageController<Vec<Network>> {
    pub fn networks(service: DashboardService) -> Self {
        Self::new("networks", move || {
            let service = service.clone();
            async move { service.fetch_network_data().await }.boxed()
        })
    }
}

impl PageController<Vec<Snapshot>> {
    pub fn snapshots(service: DashboardService) -> Self {
        Self::new("snapshots", move || {
            let service = service.clone();
            async move { service.fetch_snapshot_data().await }.boxed()
        })
    }
}
