//! Data-fetch hooks. Every list screen issues one authenticated GET per
//! collection through these; the value is the loading / error / success
//! tri-state (`None` while the first request is in flight).
//!
//! Resources drop their in-flight future when the owning component unmounts
//! or its inputs change, so navigating away cancels the request instead of
//! writing into dead state. The polled variant restarts the same resource on
//! a fixed tick, which also replaces any request still in flight.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;

use crate::core::{session, timing};

/// One authenticated request against the backend, re-issued whenever the
/// signals read inside `fetch` change.
pub fn use_api_resource<T, F, Fut>(mut fetch: F) -> Resource<Result<T, ApiError>>
where
    T: 'static,
    F: FnMut(api::Client) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    use_resource(move || {
        let request = fetch(session::client());
        async move { request.await }
    })
}

/// Same as [`use_api_resource`], re-fetched every `interval_ms`. The last
/// completed result is kept while a refresh is in flight so polling screens
/// don't flash back to their loading state. Used by the incoming-orders tab
/// for near-live fulfilment status.
pub fn use_polled_resource<T, F, Fut>(
    interval_ms: u64,
    mut fetch: F,
) -> Signal<Option<Result<T, ApiError>>>
where
    T: Clone + 'static,
    F: FnMut(api::Client) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut latest = use_signal(|| None);
    let mut tick = use_signal(|| 0u64);

    let resource = use_resource(move || {
        // Subscribe to the tick so each interval restarts the fetch.
        let _ = tick();
        let request = fetch(session::client());
        async move { request.await }
    });

    use_effect(move || {
        if let Some(value) = resource.read().clone() {
            latest.set(Some(value));
        }
    });

    use_future(move || async move {
        loop {
            timing::sleep_ms(interval_ms).await;
            tick += 1;
        }
    });

    latest
}
