//! Database repository layer for all domain entities.
//!
//! Repository structs own every query, insert, update, and delete. Methods
//! return SeaORM entity models (or domain models where a query spans
//! entities) and `DbErr`; mapping to HTTP errors happens above this layer.
//! Multi-step operations that must not interleave run inside a transaction.

pub mod bookmark;
pub mod headcount;
pub mod marker;
pub mod place;
pub mod search_history;
pub mod user;
