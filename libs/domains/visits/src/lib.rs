//! Visits Domain
//!
//! A single shared visit counter kept in Redis, plus the health contract of
//! the service around it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /count, GET /health
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← degraded-mode policy, logging, metrics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← CounterStore trait + Redis implementation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::redis::RedisConfig;
//! use domain_visits::{RedisCounterStore, VisitService, handlers};
//!
//! # async fn example() {
//! let store = RedisCounterStore::connect(&RedisConfig::host("127.0.0.1", 6379))
//!     .await
//!     .ok();
//!
//! // `None` means degraded mode: /count answers 503, /health reports it.
//! let service = VisitService::new(store);
//! let router = handlers::router(service);
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{VisitError, VisitResult};
pub use handlers::ApiDoc;
pub use models::{HealthReport, HealthStatus, RedisStatus, VisitsResponse};
pub use service::VisitService;
pub use store::{COUNTER_KEY, CounterStore, RedisCounterStore, StoreResult};
