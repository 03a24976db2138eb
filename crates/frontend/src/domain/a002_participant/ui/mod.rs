pub mod list;

pub use list::ParticipantsList;
