//! Output sinks for the serializer.

/// Destination for rendered HTML.
///
/// The serializer only appends; implementations decide where the text goes.
pub trait Emitter {
    fn emit(&mut self, text: &str);

    fn emit_newline(&mut self);

    /// Emit `spaces` spaces.
    fn emit_indent(&mut self, spaces: usize);
}

/// In-memory emitter used by [`render`](crate::render).
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, spaces: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(spaces));
    }
}
