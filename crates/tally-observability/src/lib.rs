//! Tracing setup for the Tally pipeline.
//!
//! - Span macros per pipeline stage (estimate, correction, aggregation).
//! - [`init_tracing`] installs a `fmt` subscriber driven by [`ObservabilityConfig`].

pub mod spans;
mod subscriber;

pub use subscriber::{build_filter, init_tracing};

pub use tally_core::config::ObservabilityConfig;
