//! The embedded editing engine.
//!
//! An [`Engine`] is constructed with its full initial text and owns the
//! document from then on. Callers interact through two operations only:
//! [`Engine::dispatch`] for commands and [`Engine::serialize`] to extract
//! the markdown source. There is no operation to replace content wholesale;
//! the bridge tears the instance down and constructs a new one instead.

mod buffer;
mod commands;

pub use buffer::{Cursor, Direction, TextBuffer};
pub use commands::EditCommand;

/// A live editing engine instance.
pub struct Engine {
    buffer: TextBuffer,
}

impl Engine {
    /// Construct an engine seeded with `initial` as its document.
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(initial),
        }
    }

    /// Dispatch one command into the engine.
    pub fn dispatch(&mut self, cmd: EditCommand) {
        commands::apply(&mut self.buffer, cmd);
    }

    /// Serialize the current document to markdown source.
    pub fn serialize(&self) -> String {
        self.buffer.text()
    }

    pub const fn cursor(&self) -> Cursor {
        self.buffer.cursor()
    }

    pub const fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    pub const fn mark_clean(&mut self) {
        self.buffer.mark_clean();
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn line_at(&self, idx: usize) -> Option<String> {
        self.buffer.line_at(idx)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("lines", &self.buffer.line_count())
            .field("dirty", &self.buffer.is_dirty())
            .finish()
    }
}
