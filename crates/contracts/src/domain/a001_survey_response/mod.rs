pub mod dto;

pub use dto::{ResponseFilters, SurveyResponse};
