//! AnythingLLM REST API access.
//!
//! - `client.rs` - authenticated request execution against `/api/v1`
//! - `error.rs` - failure taxonomy and the user-facing error messages

mod client;
mod error;

pub use client::{ApiClient, json_response};
pub use error::{ApiError, ApiResult, json_kind};
