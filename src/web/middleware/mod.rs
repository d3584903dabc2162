//! HTTP middleware for request processing and protection.
//!
//! - [`rate_limit`] - Per-IP token bucket for form submissions
//! - [`tracing`] - Structured request/response logging

pub mod rate_limit;
pub mod tracing;
