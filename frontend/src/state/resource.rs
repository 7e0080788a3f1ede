use crate::api::{ApiError, Employee};
use leptos::*;
use std::future::Future;

/// Records addressable by a stable identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Employee {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Idle,
    Fetching,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Single-writer cache of a remote collection.
///
/// The list is only ever replaced wholesale by a fetch response. At most one
/// fetch is in flight; refreshes requested meanwhile bump the generation and
/// are served by exactly one follow-up fetch once the in-flight one lands.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSync<T> {
    items: Vec<T>,
    status: SyncStatus,
    generation: u64,
    in_flight: Option<u64>,
    last_error: Option<ApiError>,
    loaded: bool,
}

impl<T> Default for ResourceSync<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: SyncStatus::Idle,
            generation: 0,
            in_flight: None,
            last_error: None,
            loaded: false,
        }
    }
}

impl<T> ResourceSync<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The shown list may be out of date because the last fetch failed.
    pub fn is_stale(&self) -> bool {
        self.status == SyncStatus::Error
    }

    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the ticket for a fetch to issue now, or `None` when the
    /// request was folded into the one already in flight.
    pub fn request_refresh(&mut self) -> Option<FetchTicket> {
        self.generation += 1;
        if self.in_flight.is_some() {
            return None;
        }
        Some(self.issue())
    }

    fn issue(&mut self) -> FetchTicket {
        self.in_flight = Some(self.generation);
        self.status = SyncStatus::Fetching;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Applies a fetch response. Returns the follow-up ticket when the
    /// response was superseded and another fetch must be issued.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<T>, ApiError>,
    ) -> Option<FetchTicket> {
        if self.in_flight != Some(ticket.generation) {
            log::debug!("ignoring response for unknown fetch {}", ticket.generation);
            return None;
        }
        self.in_flight = None;

        if ticket.generation < self.generation {
            log::debug!(
                "discarding superseded response {} (latest {})",
                ticket.generation,
                self.generation
            );
            return Some(self.issue());
        }

        match result {
            Ok(items) => {
                self.items = items;
                self.status = SyncStatus::Idle;
                self.last_error = None;
                self.loaded = true;
            }
            Err(err) => {
                self.status = SyncStatus::Error;
                self.last_error = Some(err);
            }
        }
        None
    }
}

impl<T: Keyed> ResourceSync<T> {
    pub fn find(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }
}

/// Drives one refresh request to completion, including any follow-up
/// fetches. Returns the error that was applied to the store, if any.
pub async fn run_refresh<T, F, Fut>(
    store: RwSignal<ResourceSync<T>>,
    fetch: F,
) -> Result<(), ApiError>
where
    T: 'static,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let Some(mut ticket) = store.try_update(ResourceSync::request_refresh).flatten() else {
        return Ok(());
    };
    loop {
        let result = fetch().await;
        let outcome = match &result {
            Ok(_) => Ok(()),
            Err(err) => {
                log::warn!("fetch {} failed: {}", ticket.generation(), err);
                Err(err.clone())
            }
        };
        match store.try_update(|sync| sync.complete(ticket, result)).flatten() {
            Some(next) => ticket = next,
            None => return outcome,
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use futures::channel::oneshot;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.into(),
            first_name: id.into(),
            last_name: "L".into(),
            role: Role::Employee,
            email: String::new(),
        }
    }

    /// Fetcher whose responses are released manually, in any order.
    #[derive(Clone, Default)]
    struct ManualFetcher {
        calls: Rc<Cell<usize>>,
        in_flight: Rc<Cell<usize>>,
        max_in_flight: Rc<Cell<usize>>,
        pending: Rc<RefCell<Vec<oneshot::Sender<Result<Vec<Employee>, ApiError>>>>>,
    }

    impl ManualFetcher {
        async fn fetch(&self) -> Result<Vec<Employee>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.in_flight.set(self.in_flight.get() + 1);
            self.max_in_flight
                .set(self.max_in_flight.get().max(self.in_flight.get()));
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push(tx);
            let result = rx
                .await
                .unwrap_or_else(|_| Err(ApiError::unknown("dropped")));
            self.in_flight.set(self.in_flight.get() - 1);
            result
        }

        fn release(&self, result: Result<Vec<Employee>, ApiError>) {
            let tx = self.pending.borrow_mut().remove(0);
            let _ = tx.send(result);
        }
    }

    #[tokio::test]
    async fn concurrent_refreshes_keep_one_fetch_in_flight() {
        let runtime = create_runtime();
        let store = create_rw_signal(ResourceSync::<Employee>::new());
        let fetcher = ManualFetcher::default();

        let first = {
            let fetcher = fetcher.clone();
            async move { run_refresh(store, || fetcher.fetch()).await }
        };
        let second = {
            let fetcher = fetcher.clone();
            async move { run_refresh(store, || fetcher.fetch()).await }
        };
        let third = {
            let fetcher = fetcher.clone();
            async move { run_refresh(store, || fetcher.fetch()).await }
        };
        let driver = {
            let fetcher = fetcher.clone();
            async move {
                tokio::task::yield_now().await;
                fetcher.release(Ok(vec![employee("stale")]));
                tokio::task::yield_now().await;
                fetcher.release(Ok(vec![employee("fresh")]));
            }
        };

        let (a, b, c, ()) = futures::join!(first, second, third, driver);
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(fetcher.calls.get(), 2);
        assert_eq!(fetcher.max_in_flight.get(), 1);
        let snapshot = store.get();
        assert_eq!(snapshot.items().len(), 1);
        assert_eq!(snapshot.items()[0].id, "fresh");
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_refresh_reports_error_and_keeps_list() {
        let runtime = create_runtime();
        let mut seeded = ResourceSync::new();
        let ticket = seeded.request_refresh().unwrap();
        seeded.complete(ticket, Ok(vec![employee("kept")]));
        let store = create_rw_signal(seeded);

        let result = run_refresh(store, || async {
            Err::<Vec<Employee>, _>(ApiError::unauthorized("expired"))
        })
        .await;

        assert!(result.unwrap_err().is_unauthorized());
        let snapshot = store.get();
        assert!(snapshot.is_stale());
        assert_eq!(snapshot.items()[0].id, "kept");
        runtime.dispose();
    }
}
