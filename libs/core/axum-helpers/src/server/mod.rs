//! Server infrastructure module.
//!
//! - Router assembly with the JSON 404 fallback and security headers
//! - Serving with peer addresses exposed to handlers
//! - Graceful shutdown coordination

pub mod app;
pub mod shutdown;

pub use app::{create_router, serve, serve_until};
pub use shutdown::ShutdownCoordinator;
