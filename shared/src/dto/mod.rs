//! Data Transfer Objects shared between the student client and the backend.

pub mod assignments;
pub mod auth;
pub mod classroom;
pub mod tests;

pub use auth::*;
pub use tests::*;
