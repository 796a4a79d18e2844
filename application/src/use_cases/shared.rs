//! Shared utilities for the coordination loops.
//!
//! Both loops suspend at exactly one point per iteration: a tick of their
//! interval, raced against the loop's cancellation token.

use crate::config::MIN_LOOP_INTERVAL;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

/// Interval whose first tick fires one period from now.
///
/// Periods shorter than [`MIN_LOOP_INTERVAL`] are raised to it.
pub(crate) fn ticker(period: Duration) -> Interval {
    let period = period.max(MIN_LOOP_INTERVAL);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Wait for the next tick.
///
/// Returns `false` if the token was cancelled first.
pub(crate) async fn wait_tick(ticker: &mut Interval, token: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = ticker.tick() => true,
    }
}

/// Lock a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
