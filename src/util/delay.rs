//! Timer future used for simulated service latency.
//!
//! In the browser this is a real `setTimeout`-backed future. Elsewhere it
//! resolves immediately, so native tests can drive simulated backends with a
//! plain executor.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::time::Duration;

/// Wait for `duration` before resolving.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}

/// Convert a millisecond setting into a `Duration`.
pub fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
