pub mod api;
pub mod badge;

pub use badge::HealthBadge;
