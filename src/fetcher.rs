//! Fetcher trait for the REST transport

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Abstract "GET a path, get JSON back" capability
///
/// Fetchers know nothing about the payload shape: they return whatever JSON
/// the API produced and leave unwrapping and normalization to the caller.
/// Implementations must be shareable across tasks since the driver search
/// spawns one task per in-flight request.
#[async_trait]
pub trait Fetcher: Send + Sync + 'static {
    /// Fetch `path` (relative to the API base URL) with query parameters
    ///
    /// Returns:
    /// - `Ok(value)` - Parsed JSON body of a successful response
    /// - `Err(e)` - Transport failure, non-success status, or invalid JSON
    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Value>;
}
