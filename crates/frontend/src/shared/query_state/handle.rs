use std::future::Future;
use std::pin::Pin;

use contracts::shared::{Envelope, PageInfo, SortState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::machine::{FetchTicket, QueryEvent, QueryRequest, QueryState};
use crate::shared::api_utils::ClientError;

type FetchFuture<R> = Pin<Box<dyn Future<Output = Result<Envelope<R>, ClientError>>>>;
type Fetcher<R, F> = Box<dyn Fn(QueryRequest<F>) -> FetchFuture<R>>;

/// Reactive handle to a list query owned by the current component.
///
/// Copyable; every mutator dispatches into the state machine and runs the
/// resulting fetch, if any.
pub struct QueryHandle<R: 'static, F: 'static> {
    state: RwSignal<QueryState<R, F>>,
    fetcher: StoredValue<Fetcher<R, F>, LocalStorage>,
}

impl<R: 'static, F: 'static> Clone for QueryHandle<R, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static, F: 'static> Copy for QueryHandle<R, F> {}

/// Creates the query state of a list and issues its first fetch.
///
/// The state is disposed together with the calling component.
pub fn use_query_state<R, F, Fetch, Fut>(
    fetch_fn: Fetch,
    default_sort: SortState,
    default_filters: F,
    default_page_size: u32,
) -> QueryHandle<R, F>
where
    R: Clone + Send + Sync + 'static,
    F: Clone + PartialEq + Send + Sync + 'static,
    Fetch: Fn(u32, u32, SortState, F) -> Fut + 'static,
    Fut: Future<Output = Result<Envelope<R>, ClientError>> + 'static,
{
    let fetcher: Fetcher<R, F> = Box::new(move |q: QueryRequest<F>| {
        Box::pin(fetch_fn(q.page, q.page_size, q.sort, q.filters)) as FetchFuture<R>
    });
    let handle = QueryHandle {
        state: RwSignal::new(QueryState::new(
            default_sort,
            default_filters,
            default_page_size,
        )),
        fetcher: StoredValue::new_local(fetcher),
    };

    if let Some(ticket) = handle.state.try_update(|s| s.start()).flatten() {
        handle.execute(ticket);
    }

    let state = handle.state;
    on_cleanup(move || {
        state.try_update_untracked(|s| s.dispose());
    });

    handle
}

impl<R, F> QueryHandle<R, F>
where
    R: Clone + Send + Sync + 'static,
    F: Clone + PartialEq + Send + Sync + 'static,
{
    fn run(self, event: QueryEvent<R, F>) {
        let ticket = self
            .state
            .try_update(|s| {
                s.dispatch(event);
                s.process()
            })
            .flatten();
        if let Some(ticket) = ticket {
            self.execute(ticket);
        }
    }

    fn execute(self, ticket: FetchTicket<F>) {
        let Some(future) = self.fetcher.try_with_value(|f| f(ticket.query)) else {
            return;
        };
        let generation = ticket.generation;
        spawn_local(async move {
            let outcome = future.await.map_err(|e| e.to_string());
            self.run(QueryEvent::Resolved {
                generation,
                outcome,
            });
        });
    }

    pub fn set_page(&self, page: u32) {
        self.run(QueryEvent::SetPage(page));
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.run(QueryEvent::SetPageSize(page_size));
    }

    pub fn set_sort(&self, sort: SortState) {
        self.run(QueryEvent::SetSort(sort));
    }

    pub fn set_filters(&self, filters: F) {
        self.run(QueryEvent::SetFilters(filters));
    }

    /// Edits a copy of the current filters and applies it.
    pub fn update_filters(&self, edit: impl FnOnce(&mut F)) {
        let Some(mut filters) = self.state.try_with_untracked(|s| s.filters().clone()) else {
            return;
        };
        edit(&mut filters);
        self.set_filters(filters);
    }

    pub fn refresh(&self) {
        self.run(QueryEvent::Refresh);
    }

    pub fn data(&self) -> Signal<Vec<R>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.data().to_vec()))
    }

    pub fn pagination(&self) -> Signal<PageInfo> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pagination()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(String::from)))
    }

    pub fn sort(&self) -> Signal<SortState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort().clone()))
    }

    pub fn filters(&self) -> Signal<F> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters().clone()))
    }

    pub fn page(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page()))
    }

    pub fn page_size(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page_size()))
    }

    /// Current filters without subscribing, for one-off reads in handlers.
    pub fn filters_untracked(&self) -> F {
        self.state.with_untracked(|s| s.filters().clone())
    }
}
