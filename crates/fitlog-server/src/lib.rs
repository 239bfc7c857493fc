pub mod error;
pub mod exercises;
pub mod health;
pub mod plans;
pub mod server;
pub mod sessions;
pub mod stats;

pub use error::ApiError;
pub use server::{build_router, start, AppState, ServerConfig, ServerHandle};
