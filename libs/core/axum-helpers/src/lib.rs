//! # Axum Helpers
//!
//! Shared pieces for building the HTTP surface of a service.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, serving, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers, panic catching)
//! - **[`errors`]**: `{"error": ...}` error responses with error codes
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_router, serve};
//! use core_config::server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let routes = Router::new(); // Add your routes
//!     serve(create_router(routes), &ServerConfig::default()).await
//! }
//! ```

pub mod errors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{ShutdownCoordinator, create_router, serve, serve_until};

// Re-export HTTP middleware
pub use http::{catch_panic_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};
