pub mod client;
pub mod error;

pub use client::{ApiClient, HttpTransport, Transport};
pub use error::FetchError;
