pub mod server;

pub use server::{ServerConfig, Transport};
