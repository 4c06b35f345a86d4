//! REST Gateway
//!
//! Stateless bindings to the backend, organized by resource. Each function
//! maps one domain operation onto one HTTP call and normalizes the response
//! envelope; no retries, no caching, no interpretation beyond that.

pub mod http;

mod categories;
mod courses;
mod dashboard;
mod ebooks;
mod enrollments;
mod jobs;
mod shorts;

// Re-export all public items
pub use categories::*;
pub use courses::*;
pub use dashboard::*;
pub use ebooks::*;
pub use enrollments::*;
pub use jobs::*;
pub use shorts::*;
