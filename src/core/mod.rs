//! Core components of the `fmp-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FmpClient`] and its builder.
//! - The primary [`FmpError`] type.
//! - The [`Transport`] seam and the rate-limit aware [`RequestBatch`].
//! - The [`FieldMapped`] capability and the [`ResultKind`] registry used by caches.

/// Eagerly dispatched request batches with 429 replay.
pub mod batch;
/// The main client (`FmpClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FmpError`) for the crate.
pub mod error;
pub(crate) mod fields;
/// Typed result capability and registry.
pub mod result;
/// The HTTP seam.
pub mod transport;

// convenient re-exports so most code can just `use crate::core::FmpClient`
pub use batch::{HandleState, RepeatableResponse, RequestBatch, RequestId};
pub use client::{ApiVersion, FmpClient, FmpClientBuilder, RetryConfig};
pub use error::FmpError;
pub use fields::FieldMap;
pub use result::{FieldMapped, ResultKind};
pub use transport::{HttpResponse, Transport};
