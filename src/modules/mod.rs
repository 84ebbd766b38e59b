pub mod auth;
pub mod branches;
pub mod summary;
pub mod transactions;
pub mod users;
