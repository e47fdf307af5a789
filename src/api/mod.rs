//! Remote resource client for the diary service
//!
//! This module provides:
//! - The [`ResourceClient`] trait, the only seam between the controller and the network
//! - Wire types for the service's `{ data, errorMessage }` envelope
//! - Path builders for the endpoints the controller uses
//! - [`HttpResourceClient`], the reqwest-backed implementation

pub mod client;
pub mod http;
pub mod paths;
pub mod types;

pub use client::ResourceClient;
pub use http::HttpResourceClient;
pub use types::*;
