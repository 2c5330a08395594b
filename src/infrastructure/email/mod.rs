//! Email delivery (SMTP via lettre)

pub mod smtp;

pub use smtp::SmtpMailer;
