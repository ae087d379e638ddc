//! Companies module - sub-company models mirrored from the server.

mod companies_model;

pub use companies_model::Company;
