pub mod book;
pub mod engine;
#[cfg(feature = "cli")]
pub mod logger;
pub mod position;
pub mod search;
