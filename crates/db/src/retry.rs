//! Bounded retry for transaction conflicts.
//!
//! Row locks make most contention on one event's records block rather
//! than fail, but PostgreSQL can still abort a transaction with a
//! serialization failure (40001) or deadlock (40P01). Those are
//! transient: the repository retries the whole transaction with
//! exponential backoff. Business-rule rejections are enum outcomes, not
//! errors, so they never enter this path.

use std::future::Future;
use std::time::Duration;

use crate::StoreError;

/// Backoff schedule between attempts, in milliseconds.
pub const RETRY_DELAYS_MS: [u64; 3] = [50, 100, 200];

/// Whether a sqlx error is a transient transaction conflict worth
/// retrying.
pub fn is_retryable_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => matches!(
            db_err.code().as_deref(),
            Some("40001") | Some("40P01")
        ),
        _ => false,
    }
}

/// Run a transactional operation, retrying on transient conflicts.
///
/// `f` is invoked once per attempt and must start a fresh transaction
/// each time. Non-conflict errors return immediately; when the backoff
/// schedule is exhausted the caller gets [`StoreError::RetriesExhausted`].
pub async fn with_conflict_retry<T, F, Fut>(op: &str, f: F) -> Result<T, StoreError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    for (attempt, delay_ms) in RETRY_DELAYS_MS.iter().enumerate() {
        match f().await {
            Ok(value) => return Ok(value),
            Err(e) if is_retryable_conflict(&e) => {
                tracing::warn!(
                    op,
                    attempt = attempt + 1,
                    error = %e,
                    "Transaction conflict, retrying"
                );
                tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
            }
            Err(e) => return Err(e.into()),
        }
    }

    // Final attempt after the last backoff.
    match f().await {
        Ok(value) => Ok(value),
        Err(e) if is_retryable_conflict(&e) => {
            let attempts = RETRY_DELAYS_MS.len() as u32 + 1;
            tracing::error!(op, attempts, "Transaction retries exhausted");
            Err(StoreError::RetriesExhausted { attempts })
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn returns_first_success() {
        let calls = AtomicU32::new(0);
        let result = with_conflict_retry("test", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, sqlx::Error>(42) }
        })
        .await
        .unwrap();

        assert_eq!(result, 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_conflict_error_is_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), StoreError> = with_conflict_retry("test", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(sqlx::Error::RowNotFound) }
        })
        .await;

        assert!(matches!(result, Err(StoreError::Sqlx(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn row_not_found_is_not_a_conflict() {
        assert!(!is_retryable_conflict(&sqlx::Error::RowNotFound));
    }
}
