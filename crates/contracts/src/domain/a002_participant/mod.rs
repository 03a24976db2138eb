pub mod dto;

pub use dto::{Participant, ParticipantFilters};
