pub mod config;
pub mod game;
pub mod id_generator;
pub mod identifiers;
pub mod logger;

pub use identifiers::SessionId;
