//! Stack growth for deeply nested type expressions.
//!
//! Canonicalization, erasure, rendering, and traversal all recurse once per
//! nesting level. Foreign type trees can be arbitrarily deep, so each
//! recursive step goes through [`ensure_sufficient_stack`].
//!
//! - **Native targets**: grows the stack on demand via `stacker`.
//! - **WASM targets**: plain call (WASM manages its own stack).

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    // 64KB red zone, 1MB per growth step.
    const RED_ZONE: usize = 64 * 1024;
    const STACK_PER_RECURSION: usize = 1024 * 1024;
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
