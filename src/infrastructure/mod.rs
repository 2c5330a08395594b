//! External concerns: database, crypto, email transport

pub mod crypto;
pub mod database;
pub mod email;

pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use email::SmtpMailer;
