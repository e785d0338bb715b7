//! Virtual document produced by evaluation, and its HTML serializer.
//!
//! A [`VDocument`] shares nothing with the template AST: every evaluation
//! builds a fresh tree, which is rendered once and dropped.
//!
//! ```text
//! let html = rift_vdom::render(&document, &RenderSettings::default());
//! ```

mod emitter;
mod node;
mod render;
mod settings;

pub use emitter::{Emitter, StringEmitter};
pub use node::{VAttribute, VDocument, VElement, VNode, VText};
pub use render::{is_raw_text_element, render, render_node, render_to, DEFAULT_DOCTYPE};
pub use settings::{ParseRenderModeError, RenderMode, RenderSettings};
