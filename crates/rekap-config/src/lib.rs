//! # Rekap Config
//!
//! Configuration types for the Rekap API.
//!
//! Every configuration struct is loaded once at startup from environment
//! variables and passed by value into the components that need it. Nothing
//! here reads the environment after boot.
//!
//! - [`jwt`]: Token signing secrets and lifetimes
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address
//!
//! # Example
//!
//! ```ignore
//! use rekap_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
