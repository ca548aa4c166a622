//! HTTP client module: one JSON GET per call, typed failures.

mod client;
mod error;

pub use client::HttpClient;
pub use error::FetchError;
