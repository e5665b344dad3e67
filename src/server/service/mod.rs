//! Service layer for business logic and orchestration.
//!
//! Sits between the controller (API) layer and the data (repository) layer.
//! Services own the logic that spans more than one repository call or needs
//! something beyond storage: token issuance, outbound mail, the headcount
//! aggregation, and bookmark place-list maintenance. Plain CRUD goes from
//! controller to repository directly.

pub mod auth;
pub mod bookmark;
pub mod headcount;
pub mod mailer;

#[cfg(test)]
mod test;
