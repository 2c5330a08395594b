pub mod outbound;

pub use outbound::Mailer;
