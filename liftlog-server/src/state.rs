use liftlog_core::db::operations::ReorderMode;
use liftlog_core::db::{DbPool, SqliteConnection};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pool: DbPool,
    pub reorder_mode: ReorderMode,
}

impl AppState {
    pub fn new(pool: DbPool, reorder_mode: ReorderMode) -> Self {
        Self { pool, reorder_mode }
    }

    /// Runs a store operation on the blocking pool. Diesel connections are
    /// synchronous; keeping them off the async workers stops a slow query
    /// from stalling unrelated requests.
    ///
    /// The closure may return `StoreError` or a pre-mapped `ApiError`; the
    /// latter lets a handler chain several store calls on one connection
    /// while keeping per-call error messages.
    pub async fn store<T, E, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: Into<ApiError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| ApiError::Internal(format!("Failed to get database connection: {e}")))?;
            f(&mut conn).map_err(Into::into)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("Blocking task failed: {e}")))?
    }
}
