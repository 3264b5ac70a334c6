//! Phase timing for `PerfStats`.
//!
//! The browser has no `Instant`, so wasm builds stamp with `Date.now()`.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
#[inline]
fn stamp() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn stamp() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
#[inline]
fn millis_since(from: Stamp) -> f64 {
    js_sys::Date::now() - from
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn millis_since(from: Stamp) -> f64 {
    from.elapsed().as_secs_f64() * 1000.0
}

/// Running phase timer. Only created while perf metrics are on.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer(Stamp);

impl PerfTimer {
    #[inline]
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(|| PerfTimer(stamp()))
    }
}

/// Add the elapsed time of `timer` (if any) to `slot`.
#[inline]
pub(crate) fn accumulate(timer: Option<PerfTimer>, slot: &mut f64) {
    if let Some(PerfTimer(started)) = timer {
        *slot += millis_since(started);
    }
}
