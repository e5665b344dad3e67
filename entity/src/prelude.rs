pub use super::bookmark::Entity as Bookmark;
pub use super::headcount::Entity as Headcount;
pub use super::marker::Entity as Marker;
pub use super::place::Entity as Place;
pub use super::search_history::Entity as SearchHistory;
pub use super::user::Entity as User;
pub use super::withdrawal_reason::Entity as WithdrawalReason;
