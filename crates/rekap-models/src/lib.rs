//! # Rekap Models
//!
//! Storage rows, request DTOs, and response bodies for the Rekap API.
//!
//! - [`auth`]: Register/login/refresh requests and token responses
//! - [`users`]: User accounts (public record and stored credentials)
//! - [`transactions`]: Point-of-sale transactions and list filters
//! - [`summary`]: Daily and date-range aggregates
//! - [`branches`]: Per-branch statistics

pub mod auth;
pub mod branches;
pub mod summary;
pub mod transactions;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{
    AccessTokenResponse, AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};
pub use branches::BranchStats;
pub use summary::{DailySummary, DailySummaryParams, RangeSummaryParams, RangeSummaryRow};
pub use transactions::{Transaction, TransactionFilterParams};
pub use users::{NewUser, User, UserCredentials};
