//! Wire types shared between the survey console and the survey API.

pub mod domain;
pub mod shared;
pub mod system;
