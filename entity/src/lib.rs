//! SeaORM entity definitions for every persistent table.
//!
//! One module per table. Repositories convert these models into domain
//! models or DTOs at their own boundaries; no business logic lives here.

pub mod bookmark;
pub mod headcount;
pub mod marker;
pub mod place;
pub mod prelude;
pub mod search_history;
pub mod user;
pub mod withdrawal_reason;
