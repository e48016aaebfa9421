pub mod config;
pub mod error;
pub mod models;
pub mod random;
pub mod server;
pub mod unsplash;
pub mod view;

pub use config::Config;
pub use error::{AppError, AppResult};
