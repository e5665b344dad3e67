pub mod bookmark;
pub mod headcount;
pub mod place;
pub mod search_history;
pub mod user;
