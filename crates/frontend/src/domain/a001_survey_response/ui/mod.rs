pub mod details;
pub mod list;

pub use details::ResponseDetail;
pub use list::ResponsesList;
