//! Async sleep that works on both native and WASM targets.
//!
//! Components run on every render target, so timers cannot assume a tokio
//! runtime: on WASM the browser event loop owns time. Each target gets the
//! timer its platform provides.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}
