//! HTTP plumbing for checker communication
//!
//! This module provides:
//! - Request building from validate options
//! - A configured client wrapping reqwest
//! - Capture of transport failures as data rather than errors

pub mod builder;
pub mod client;

pub use builder::{RequestBuilder, USER_AGENT};
pub use client::{CheckOutcome, CheckResponse, HttpClient, HttpClientConfig, TransportFailure};

// Re-export commonly used types
pub use reqwest::{Method, StatusCode};
