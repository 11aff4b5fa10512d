//! HTTP surface: router, handlers and response helpers.

pub mod handler;
pub mod helpers;

pub use handler::{AppState, router};
