//! HTTP middleware module.
//!
//! - Security headers
//! - Panic to 500 conversion
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{catch_panic_layer, security_headers};
//!
//! let app = Router::new()
//!     .layer(catch_panic_layer())
//!     .layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod catch_panic;
pub mod security;

pub use catch_panic::{PanicHandler, catch_panic_layer};
pub use security::security_headers;
