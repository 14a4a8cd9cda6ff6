//! Shared application state: the single catalog store handle.

use crate::http::response::ApiError;
use rusqlite::Connection;
use sampler_core::RepoResult;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps an opened, migrated catalog connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs one catalog operation on the blocking pool.
    ///
    /// Repository errors are mapped to their HTTP class and a failed task is
    /// an internal error. A lock poisoned by an earlier panic is reclaimed:
    /// any write that panicked was rolled back with its transaction.
    pub async fn run<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> RepoResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().unwrap_or_else(PoisonError::into_inner);
            op(&*guard).map_err(ApiError::from)
        })
        .await
        .map_err(|err| ApiError::internal(format!("catalog task failed: {err}")))?
    }
}
