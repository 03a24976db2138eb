use std::collections::VecDeque;

use contracts::shared::{Envelope, PageInfo, SortState};

use crate::shared::config::MAX_PAGE_SIZE;

/// Everything that can happen to a list query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent<R, F> {
    SetPage(u32),
    SetPageSize(u32),
    SetSort(SortState),
    SetFilters(F),
    /// Re-issue the current query as is.
    Refresh,
    /// Outcome of the fetch issued for `generation`.
    Resolved {
        generation: u64,
        outcome: Result<Envelope<R>, String>,
    },
}

/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest<F> {
    pub page: u32,
    pub page_size: u32,
    pub sort: SortState,
    pub filters: F,
}

/// A fetch the caller must run and report back as `Resolved { generation, .. }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<F> {
    pub generation: u64,
    pub query: QueryRequest<F>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Page/size/sort/filter tuple of one list and the result of its latest fetch.
///
/// Events are queued by `dispatch` and applied in order by `process`. Every
/// change that needs new data bumps `generation`; a `Resolved` event is only
/// applied when it carries the latest generation, so a slow response can never
/// overwrite the result of a newer query.
#[derive(Debug, Clone)]
pub struct QueryState<R, F> {
    page: u32,
    page_size: u32,
    sort: SortState,
    filters: F,

    data: Vec<R>,
    pagination: PageInfo,
    error: Option<String>,
    status: QueryStatus,

    generation: u64,
    queue: VecDeque<QueryEvent<R, F>>,
    disposed: bool,
}

impl<R, F> QueryState<R, F>
where
    F: Clone + PartialEq,
{
    pub fn new(default_sort: SortState, default_filters: F, default_page_size: u32) -> Self {
        let page_size = clamp_page_size(default_page_size);
        Self {
            page: 1,
            page_size,
            sort: default_sort,
            filters: default_filters,
            data: Vec::new(),
            pagination: PageInfo::empty(page_size),
            error: None,
            status: QueryStatus::Idle,
            generation: 0,
            queue: VecDeque::new(),
            disposed: false,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn pagination(&self) -> PageInfo {
        self.pagination
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn status(&self) -> QueryStatus {
        self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn query(&self) -> QueryRequest<F> {
        QueryRequest {
            page: self.page,
            page_size: self.page_size,
            sort: self.sort.clone(),
            filters: self.filters.clone(),
        }
    }

    /// Initial fetch at mount. Only an idle state issues one.
    pub fn start(&mut self) -> Option<FetchTicket<F>> {
        if self.disposed || self.status != QueryStatus::Idle {
            return None;
        }
        self.begin_fetch();
        Some(self.ticket())
    }

    pub fn dispatch(&mut self, event: QueryEvent<R, F>) {
        if self.disposed {
            return;
        }
        self.queue.push_back(event);
    }

    /// Applies queued events in order.
    ///
    /// Returns the single fetch to run for the resulting state, if any change
    /// asked for one.
    pub fn process(&mut self) -> Option<FetchTicket<F>> {
        let mut fetch = false;
        while let Some(event) = self.queue.pop_front() {
            if self.disposed {
                break;
            }
            fetch |= self.apply(event);
        }
        if fetch && !self.disposed {
            let ticket = self.ticket();
            log::debug!(
                "query generation {} issued (page {}, size {}, sort {} {})",
                ticket.generation,
                ticket.query.page,
                ticket.query.page_size,
                ticket.query.sort.sort_by,
                ticket.query.sort.sort_order
            );
            Some(ticket)
        } else {
            None
        }
    }

    /// Stops all further processing; later events and resolutions are dropped.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.queue.clear();
    }

    fn apply(&mut self, event: QueryEvent<R, F>) -> bool {
        match event {
            QueryEvent::SetPage(page) => {
                let page = page.max(1);
                if page == self.page {
                    return false;
                }
                self.page = page;
            }
            QueryEvent::SetPageSize(size) => {
                let size = clamp_page_size(size);
                if size == self.page_size {
                    return false;
                }
                self.page_size = size;
                self.page = 1;
            }
            QueryEvent::SetSort(sort) => {
                if sort == self.sort {
                    return false;
                }
                self.sort = sort;
            }
            QueryEvent::SetFilters(filters) => {
                if filters == self.filters {
                    return false;
                }
                self.filters = filters;
                self.page = 1;
            }
            QueryEvent::Refresh => {}
            QueryEvent::Resolved {
                generation,
                outcome,
            } => {
                self.resolve(generation, outcome);
                return false;
            }
        }
        self.begin_fetch();
        true
    }

    fn begin_fetch(&mut self) {
        self.generation += 1;
        self.status = QueryStatus::Loading;
        self.error = None;
    }

    fn resolve(&mut self, generation: u64, outcome: Result<Envelope<R>, String>) {
        if generation != self.generation || self.status != QueryStatus::Loading {
            log::debug!(
                "discarding stale result of generation {} (latest {})",
                generation,
                self.generation
            );
            return;
        }
        match outcome {
            Ok(envelope) => {
                self.data = envelope.data;
                self.pagination = envelope.pagination.normalized();
                self.error = None;
                self.status = QueryStatus::Success;
            }
            Err(message) => {
                log::warn!("query generation {} failed: {}", generation, message);
                self.data.clear();
                self.error = Some(message);
                self.status = QueryStatus::Failure;
            }
        }
    }

    fn ticket(&self) -> FetchTicket<F> {
        FetchTicket {
            generation: self.generation,
            query: self.query(),
        }
    }
}

fn clamp_page_size(size: u32) -> u32 {
    size.clamp(1, MAX_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_survey_response::ResponseFilters;

    type State = QueryState<u32, ResponseFilters>;

    fn page_of(rows: Vec<u32>, page: u32, page_size: u32, total: u64) -> Envelope<u32> {
        Envelope {
            data: rows,
            pagination: PageInfo {
                page,
                page_size,
                total_records: total,
                total_pages: PageInfo::pages_for(total, page_size),
            },
        }
    }

    fn started() -> (State, FetchTicket<ResponseFilters>) {
        let mut state = State::new(
            SortState::desc("created_at"),
            ResponseFilters::default(),
            25,
        );
        let ticket = state.start().unwrap();
        (state, ticket)
    }

    fn resolve_ok(state: &mut State, generation: u64, envelope: Envelope<u32>) {
        state.dispatch(QueryEvent::Resolved {
            generation,
            outcome: Ok(envelope),
        });
        assert_eq!(state.process(), None);
    }

    #[test]
    fn test_start_issues_initial_fetch() {
        let (state, ticket) = started();
        assert_eq!(ticket.generation, 1);
        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.page_size, 25);
        assert!(state.loading());
        assert_eq!(state.status(), QueryStatus::Loading);
    }

    #[test]
    fn test_start_only_once() {
        let (mut state, _) = started();
        assert_eq!(state.start(), None);
    }

    #[test]
    fn test_success_replaces_data_and_pagination() {
        let (mut state, ticket) = started();
        resolve_ok(&mut state, ticket.generation, page_of(vec![1, 2, 3], 1, 25, 57));
        assert_eq!(state.data(), &[1, 2, 3]);
        assert_eq!(state.pagination().total_pages, 3);
        assert!(!state.loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.status(), QueryStatus::Success);
    }

    #[test]
    fn test_filter_change_resets_page_before_resolution() {
        let (mut state, ticket) = started();
        resolve_ok(&mut state, ticket.generation, page_of(vec![1], 1, 25, 57));

        state.dispatch(QueryEvent::SetPage(3));
        let ticket = state.process().unwrap();
        assert_eq!(ticket.query.page, 3);
        resolve_ok(&mut state, ticket.generation, page_of(vec![9], 3, 25, 57));

        state.dispatch(QueryEvent::SetFilters(ResponseFilters::for_question("q2")));
        let ticket = state.process().unwrap();
        assert_eq!(state.page(), 1);
        assert_eq!(ticket.query.page, 1);
        assert!(state.loading());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let (mut state, _) = started();
        state.dispatch(QueryEvent::SetPage(2));
        state.dispatch(QueryEvent::SetPageSize(50));
        let ticket = state.process().unwrap();
        assert_eq!(state.page(), 1);
        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.page_size, 50);
    }

    #[test]
    fn test_batch_issues_one_ticket_for_newest_state() {
        let (mut state, _) = started();
        state.dispatch(QueryEvent::SetSort(SortState::asc("id")));
        state.dispatch(QueryEvent::SetPage(2));
        let ticket = state.process().unwrap();
        assert_eq!(ticket.query.sort, SortState::asc("id"));
        assert_eq!(ticket.query.page, 2);
        assert_eq!(ticket.generation, state.generation());
    }

    #[test]
    fn test_stale_resolution_is_discarded_whatever_the_order() {
        let (mut state, first) = started();
        state.dispatch(QueryEvent::SetFilters(ResponseFilters::for_question("q1")));
        let second = state.process().unwrap();
        assert!(second.generation > first.generation);

        // Newer response first, then the slow older one.
        resolve_ok(&mut state, second.generation, page_of(vec![2], 1, 25, 1));
        resolve_ok(&mut state, first.generation, page_of(vec![1, 1, 1], 1, 25, 3));
        assert_eq!(state.data(), &[2]);
        assert_eq!(state.pagination().total_records, 1);

        // Older response first: it must not show up even briefly.
        let (mut state, first) = started();
        state.dispatch(QueryEvent::SetFilters(ResponseFilters::for_question("q1")));
        let second = state.process().unwrap();
        resolve_ok(&mut state, first.generation, page_of(vec![1, 1, 1], 1, 25, 3));
        assert!(state.data().is_empty());
        assert!(state.loading());
        resolve_ok(&mut state, second.generation, page_of(vec![2], 1, 25, 1));
        assert_eq!(state.data(), &[2]);
    }

    #[test]
    fn test_failure_clears_data_and_keeps_pagination() {
        let (mut state, ticket) = started();
        resolve_ok(&mut state, ticket.generation, page_of(vec![1, 2], 1, 25, 57));

        state.dispatch(QueryEvent::Refresh);
        let ticket = state.process().unwrap();
        state.dispatch(QueryEvent::Resolved {
            generation: ticket.generation,
            outcome: Err("API error 500: db down".to_string()),
        });
        assert_eq!(state.process(), None);
        assert!(state.data().is_empty());
        assert_eq!(state.error(), Some("API error 500: db down"));
        assert!(!state.loading());
        assert_eq!(state.status(), QueryStatus::Failure);
        assert_eq!(state.pagination().total_records, 57);
    }

    #[test]
    fn test_change_after_failure_clears_error() {
        let (mut state, ticket) = started();
        state.dispatch(QueryEvent::Resolved {
            generation: ticket.generation,
            outcome: Err("boom".to_string()),
        });
        state.process();
        state.dispatch(QueryEvent::SetPage(2));
        assert!(state.process().is_some());
        assert_eq!(state.error(), None);
        assert!(state.loading());
    }

    #[test]
    fn test_refresh_keeps_page() {
        let (mut state, _) = started();
        state.dispatch(QueryEvent::SetPage(4));
        state.process();
        state.dispatch(QueryEvent::Refresh);
        let ticket = state.process().unwrap();
        assert_eq!(ticket.query.page, 4);
    }

    #[test]
    fn test_setting_same_value_is_not_a_change() {
        let (mut state, ticket) = started();
        resolve_ok(&mut state, ticket.generation, page_of(vec![1], 1, 25, 1));
        let generation = state.generation();

        state.dispatch(QueryEvent::SetPage(1));
        state.dispatch(QueryEvent::SetPageSize(25));
        state.dispatch(QueryEvent::SetSort(SortState::desc("created_at")));
        state.dispatch(QueryEvent::SetFilters(ResponseFilters::default()));
        assert_eq!(state.process(), None);
        assert_eq!(state.generation(), generation);
        assert!(!state.loading());
    }

    #[test]
    fn test_applied_pagination_is_normalized() {
        let (mut state, ticket) = started();
        resolve_ok(
            &mut state,
            ticket.generation,
            Envelope {
                data: vec![],
                pagination: PageInfo {
                    page: 1,
                    page_size: 0,
                    total_records: 0,
                    total_pages: 1,
                },
            },
        );
        let info = state.pagination();
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.page_size, 1);
    }

    #[test]
    fn test_dispose_ignores_later_events() {
        let (mut state, ticket) = started();
        state.dispose();
        state.dispatch(QueryEvent::Resolved {
            generation: ticket.generation,
            outcome: Ok(page_of(vec![1], 1, 25, 1)),
        });
        state.dispatch(QueryEvent::SetPage(2));
        assert_eq!(state.process(), None);
        assert!(state.data().is_empty());
        assert_eq!(state.page(), 1);
        assert!(state.is_disposed());
    }

    #[test]
    fn test_page_size_is_clamped() {
        let mut state = State::new(SortState::asc("id"), ResponseFilters::default(), 0);
        assert_eq!(state.page_size(), 1);
        state.dispatch(QueryEvent::SetPageSize(500));
        let ticket = state.process().unwrap();
        assert_eq!(ticket.query.page_size, MAX_PAGE_SIZE);
    }
}
