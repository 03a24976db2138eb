pub mod dto;

pub use dto::{Question, QuestionFilters};
