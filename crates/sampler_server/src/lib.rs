//! HTTP boundary for the sampler preset catalog.
//!
//! # Responsibility
//! - Map catalog operations onto the public JSON routes.
//! - Run blocking store calls off the async runtime.
//! - Translate the core error taxonomy into status codes.

#![forbid(unsafe_code)]

pub mod config;
pub mod http;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use http::build_router;
pub use state::AppState;
