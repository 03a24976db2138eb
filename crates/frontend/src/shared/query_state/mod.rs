//! List query orchestration.
//!
//! `machine` holds the framework-free state machine; `handle` binds it to the
//! component lifecycle.

pub mod handle;
pub mod machine;

pub use handle::{use_query_state, QueryHandle};
pub use machine::{FetchTicket, QueryEvent, QueryRequest, QueryState, QueryStatus};
