//! HTTP API controllers.
//!
//! Handlers validate input at the boundary, resolve the caller through the
//! auth guard where the route requires it, and delegate to repositories or
//! services. All responses are JSON; errors flow out as `AppError`.

pub mod auth;
pub mod bookmark;
pub mod headcount;
pub mod marker;
pub mod place;
pub mod search_history;
pub mod user;
