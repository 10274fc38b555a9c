//! Stack overflow protection for deeply nested expressions.
//!
//! The grammar recurses on nesting (`((((...))))`, `a ? b : a ? b : ...`),
//! so adversarial input can exhaust the thread stack. Expression entry
//! points route through [`ensure_sufficient_stack`], which grows the stack
//! on demand instead of imposing an arbitrary depth limit.

/// Grow the stack when fewer than this many bytes remain.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, growing the stack first if the remaining space is inside the
/// red zone.
#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// On wasm the stack cannot be grown; rely on the host's limits.
#[cfg(target_arch = "wasm32")]
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
