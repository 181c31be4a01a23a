//! Throttled batch runner
//!
//! Releases async jobs in fixed-size chunks, waiting out the remainder of a
//! time window after each non-final chunk. At most `quota` jobs *start* per
//! window regardless of how long individual jobs run; a slow job simply
//! delays the next chunk by its overrun. The runner knows nothing about
//! what a job does.

use crate::error::Result;
use futures_util::future::join_all;
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Run `jobs` in chunks of `quota`, one chunk per `window`, and return every
/// job's settled outcome in input order.
///
/// A failing job settles as `Err` without aborting its siblings; the result
/// length equals the input length. `quota == 0` terminates immediately with
/// an empty result rather than deadlocking. No trailing wait is performed
/// after the final chunk.
pub async fn run_batched<F, T>(jobs: Vec<F>, quota: usize, window: Duration) -> Vec<Result<T>>
where
    F: Future<Output = Result<T>>,
{
    if quota == 0 {
        return Vec::new();
    }

    let mut outcomes = Vec::with_capacity(jobs.len());
    let mut queue = jobs.into_iter().peekable();

    while queue.peek().is_some() {
        let chunk: Vec<F> = queue.by_ref().take(quota).collect();
        let began = Instant::now();

        tracing::debug!(chunk_size = chunk.len(), "Releasing chunk");
        outcomes.extend(join_all(chunk).await);

        if queue.peek().is_none() {
            break;
        }

        let elapsed = began.elapsed();
        if elapsed < window {
            sleep(window - elapsed).await;
        }
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test(start_paused = true)]
    async fn waits_out_window_between_chunks() {
        // 5 jobs at quota 2 -> chunks of 2, 2, 1 with a wait after the
        // first two chunks only.
        let jobs: Vec<_> = (0..5u32).map(|i| async move { Ok(i) }).collect();

        let began = Instant::now();
        let outcomes = run_batched(jobs, 2, Duration::from_millis(1000)).await;
        let elapsed = began.elapsed();

        assert_eq!(outcomes.len(), 5);
        assert!(elapsed >= Duration::from_millis(2000), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(3000), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn no_trailing_wait_on_exact_multiple() {
        let jobs: Vec<_> = (0..4u32).map(|i| async move { Ok(i) }).collect();

        let began = Instant::now();
        let outcomes = run_batched(jobs, 2, Duration::from_millis(1000)).await;
        let elapsed = began.elapsed();

        assert_eq!(outcomes.len(), 4);
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(2000), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn outcomes_preserve_input_order() {
        // Later jobs finish first within a chunk; collected order must
        // still match input order.
        let delays = [300u64, 100, 200, 50];
        let jobs: Vec<_> = delays
            .iter()
            .enumerate()
            .map(|(i, &ms)| async move {
                sleep(Duration::from_millis(ms)).await;
                Ok(i)
            })
            .collect();

        let outcomes = run_batched(jobs, 4, Duration::from_millis(1000)).await;
        let values: Vec<usize> = outcomes.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn failing_job_does_not_abort_siblings() {
        let jobs: Vec<_> = (0..5u32)
            .map(|i| async move {
                if i == 1 {
                    Err(AppError::Validation(format!("job {} failed", i)))
                } else {
                    Ok(i)
                }
            })
            .collect();

        let outcomes = run_batched(jobs, 2, Duration::from_millis(100)).await;

        assert_eq!(outcomes.len(), 5);
        assert!(outcomes[1].is_err());
        for (i, outcome) in outcomes.iter().enumerate() {
            if i != 1 {
                assert!(outcome.is_ok(), "job {} should have settled ok", i);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_job_delays_next_chunk_by_its_overrun() {
        // First chunk runs 1500ms against a 1000ms window: no extra wait is
        // inserted, the second chunk starts right after the overrun.
        let delays = [1500u64, 10];
        let jobs: Vec<_> = delays
            .iter()
            .map(|&ms| async move {
                sleep(Duration::from_millis(ms)).await;
                Ok(ms)
            })
            .collect();

        let began = Instant::now();
        let outcomes = run_batched(jobs, 1, Duration::from_millis(1000)).await;
        let elapsed = began.elapsed();

        assert_eq!(outcomes.len(), 2);
        assert!(elapsed >= Duration::from_millis(1510));
        assert!(elapsed < Duration::from_millis(2000), "elapsed {:?}", elapsed);
    }

    #[tokio::test]
    async fn zero_quota_terminates_immediately() {
        let jobs: Vec<_> = (0..3u32).map(|i| async move { Ok(i) }).collect();
        let outcomes = run_batched(jobs, 0, Duration::from_millis(1000)).await;
        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn empty_input_terminates_immediately() {
        let jobs: Vec<std::future::Ready<Result<u32>>> = Vec::new();
        let outcomes = run_batched(jobs, 3, Duration::from_millis(1000)).await;
        assert!(outcomes.is_empty());
    }
}
