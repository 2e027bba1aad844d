//! Wall-clock access and the simulated-latency timer.

#![allow(clippy::unused_async)]

use std::time::Duration;

/// Current calendar year from the browser clock.
#[must_use]
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Wait `duration` on the browser event loop. Resolves immediately outside
/// the browser.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    gloo_timers::future::sleep(duration).await;
}
