//! # Rekap Core
//!
//! Core types, errors, and utilities for the Rekap API.
//!
//! This crate provides foundational types used throughout the Rekap application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page-based pagination for list endpoints
//! - [`password`]: bcrypt password hashing and verification
//! - [`response`]: The `{"data": ...}` response envelope
//! - [`serde`]: Query-string deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use rekap_core::errors::AppError;
//! use rekap_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Transaction not found"));
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//! ```

pub mod errors;
pub mod pagination;
pub mod password;
pub mod response;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{Paginated, PaginationParams};
pub use password::{hash_password, verify_password};
pub use response::DataResponse;
