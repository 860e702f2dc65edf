//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "count": n }` body for count endpoints and bulk updates/deletes.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

impl CountResponse {
    pub fn new(count: impl TryInto<u64>) -> Self {
        Self {
            count: count.try_into().unwrap_or(0),
        }
    }
}
