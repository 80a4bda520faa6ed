//! Pure input normalization.
//!
//! Every public entry point that accepts an iteration count or a
//! withdrawal request runs it through one of these functions first.
//! Invalid input is never an error; it collapses to a safe default.
//! Rates normalize through the [`Rate`](crate::Rate) constructors.

/// Normalize an iteration count. `0` and `1` both mean one iteration.
pub fn ticks(n: u64) -> u64 {
    n.max(1)
}

/// Normalize a signed iteration count. Anything below 2 means one iteration.
pub fn ticks_from_i64(n: i64) -> u64 {
    u64::try_from(n).map_or(1, ticks)
}

/// Validate a signed withdrawal request.
///
/// Returns `None` for negative requests; callers grant nothing and
/// leave state untouched in that case.
pub fn request_from_i64(request: i64) -> Option<u64> {
    u64::try_from(request).ok()
}
