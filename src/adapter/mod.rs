//! Concrete implementations of the outbound ports.

pub mod practicum;
pub mod telegram;

pub use practicum::PracticumClient;
pub use telegram::TelegramMessenger;
