//! # Texnouz Ijara
//!
//! Property-rental management backend: houses, rooms, tenants, monthly
//! billing records and payment receipts, served over an authenticated
//! REST API with email verification and bill delivery.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, charge calculation, status
//!   classification and repository traits
//! - **application**: Services orchestrating the domain, outbound ports
//! - **infrastructure**: External concerns (database, crypto, SMTP)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error types used across layers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, RouterContext};
