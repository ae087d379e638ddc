//! Users module - platform accounts mirrored from the server.

mod users_model;

pub use users_model::{User, UserRole};
