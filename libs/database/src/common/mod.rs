//! Common utilities shared by the store implementations

pub mod error;
pub mod timeout;

pub use error::{DatabaseError, DatabaseResult};
pub use timeout::with_timeout;
