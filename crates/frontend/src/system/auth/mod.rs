pub mod context;
pub mod gate;
pub mod storage;

pub use context::{use_auth, AuthState};
pub use gate::PasswordGate;
