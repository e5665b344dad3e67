//! Factories for inserting test rows with sensible defaults.
//!
//! Each factory follows a builder pattern: construct with a database
//! reference, override the fields the test cares about, then `build()` to
//! insert and get the created model back.

pub mod bookmark;
pub mod headcount;
pub mod helpers;
pub mod marker;
pub mod place;
pub mod search_history;
pub mod user;
