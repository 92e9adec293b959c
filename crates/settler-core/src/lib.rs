//! Settler Core — domain models and shared error types.

pub mod error;
pub mod models;

pub use error::{SettlerError, SettlerResult};
