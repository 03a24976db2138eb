pub mod export;
pub mod filters;
pub mod flag;
pub mod pagination;
pub mod sort;

pub use export::ExportFormat;
pub use filters::QueryFilters;
pub use pagination::{Envelope, PageInfo};
pub use sort::{SortOrder, SortState};
