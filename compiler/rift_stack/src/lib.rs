//! Stack growth for recursive tree walks.
//!
//! Templates nest without limit: elements inside elements, loops inside
//! loops. The evaluator and the serializer recurse once per level, so a
//! generated or hostile template can exhaust the native stack. Each
//! recursive step goes through [`ensure_sufficient_stack`], which moves
//! onto a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the call is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the remaining stack
/// is below the red zone.
///
/// ```text
/// fn render_node(&self, node: &VNode, depth: usize, out: &mut impl Emitter) {
///     ensure_sufficient_stack(|| match node {
///         VNode::Element(el) => self.render_element(el, depth, out),
///         ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
