//! Boundary tolerance defaults.
//!
//! Policy
//! - One process-wide default epsilon, read by every boundary test that is not
//!   given an explicit one. Callers that need isolation from other call sites
//!   use the `*_eps` variants and never touch the global.
//! - The value lives in an `AtomicU64` (f64 bits), so concurrent readers see
//!   either the old or the new value, never a torn one.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ShapeError;

/// Default boundary tolerance at process start.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

// 0.01_f64.to_bits(); `f64::to_bits` is only const on recent toolchains.
const DEFAULT_BITS: u64 = 0x3F84_7AE1_47AE_147B;

static TOLERANCE_BITS: AtomicU64 = AtomicU64::new(DEFAULT_BITS);

/// Current default boundary tolerance.
#[inline]
pub fn tolerance() -> f64 {
    f64::from_bits(TOLERANCE_BITS.load(Ordering::Relaxed))
}

/// Replace the default boundary tolerance for all subsequent calls.
///
/// Rejects NaN, infinities and negative values; the previous value stays in place.
pub fn set_tolerance(value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() || value < 0.0 {
        tracing::warn!(value, "rejected boundary tolerance");
        return Err(ShapeError::InvalidTolerance { value });
    }
    let old = f64::from_bits(TOLERANCE_BITS.swap(value.to_bits(), Ordering::Relaxed));
    tracing::debug!(old, new = value, "boundary tolerance changed");
    Ok(())
}

/// Restore [`DEFAULT_TOLERANCE`].
pub fn reset_tolerance() {
    TOLERANCE_BITS.store(DEFAULT_BITS, Ordering::Relaxed);
    tracing::debug!(new = DEFAULT_TOLERANCE, "boundary tolerance reset");
}
