//! Imperative bridge over the embedded engine.
//!
//! The shell never touches an [`Engine`](crate::engine::Engine) directly;
//! it goes through this bridge, which enforces two invariants:
//!
//! - At most one engine instance is mounted at a time.
//! - External content replacement never mutates a live instance. The old
//!   engine is discarded and a fresh one constructed with the new text,
//!   tracked by a strictly increasing generation counter.
//!
//! The engine cannot safely swap its backing document in place, so the
//! teardown-and-recreate trades a cursor/scroll reset for a consistent
//! internal state.

use crate::engine::{EditCommand, Engine};

/// Owns the (at most one) mounted engine instance.
#[derive(Debug)]
pub struct EditorBridge {
    engine: Option<Engine>,
    generation: u64,
}

impl EditorBridge {
    /// A bridge with no engine mounted yet.
    pub const fn unmounted() -> Self {
        Self {
            engine: None,
            generation: 0,
        }
    }

    /// Replace the document wholesale.
    ///
    /// Discards any mounted engine, constructs a new one seeded with
    /// `text`, and bumps the generation.
    pub fn set_content(&mut self, text: &str) {
        self.engine = Some(Engine::new(text));
        self.generation += 1;
        tracing::debug!(generation = self.generation, "editor remounted");
    }

    /// Serialized document, or `None` when no engine is mounted.
    ///
    /// `None` is an explicit not-ready signal; an empty document reads as
    /// `Some("")`, never `None`.
    pub fn content(&self) -> Option<String> {
        self.engine.as_ref().map(Engine::serialize)
    }

    /// Dispatch a command to the mounted engine.
    ///
    /// Returns `false` when no engine is mounted; the command is dropped,
    /// not queued.
    pub fn dispatch(&mut self, cmd: EditCommand) -> bool {
        match &mut self.engine {
            Some(engine) => {
                engine.dispatch(cmd);
                true
            }
            None => false,
        }
    }

    /// Identity tag of the current engine instance.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_mounted(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut Engine> {
        self.engine.as_mut()
    }
}

impl Default for EditorBridge {
    fn default() -> Self {
        Self::unmounted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EditCommand;

    #[test]
    fn test_unmounted_bridge_reports_not_ready() {
        let bridge = EditorBridge::unmounted();
        assert!(!bridge.is_mounted());
        assert_eq!(bridge.content(), None);
    }

    #[test]
    fn test_unmounted_bridge_drops_commands() {
        let mut bridge = EditorBridge::unmounted();
        assert!(!bridge.dispatch(EditCommand::InsertChar('x')));
        assert_eq!(bridge.content(), None);
    }

    #[test]
    fn test_set_content_mounts_and_bumps_generation() {
        let mut bridge = EditorBridge::unmounted();
        let before = bridge.generation();
        bridge.set_content("X");
        assert!(bridge.generation() > before);
        assert_eq!(bridge.content(), Some("X".to_string()));
    }

    #[test]
    fn test_set_content_discards_old_instance() {
        let mut bridge = EditorBridge::unmounted();
        bridge.set_content("first");
        bridge.dispatch(EditCommand::InsertChar('!'));
        assert!(bridge.engine().is_some_and(Engine::is_dirty));

        let gen_before = bridge.generation();
        bridge.set_content("second");
        // Fresh instance: clean, cursor at origin, new generation.
        assert!(bridge.generation() > gen_before);
        let engine = bridge.engine().unwrap();
        assert!(!engine.is_dirty());
        assert_eq!(engine.cursor().line, 0);
        assert_eq!(engine.cursor().col, 0);
        assert_eq!(bridge.content(), Some("second".to_string()));
    }

    #[test]
    fn test_empty_document_is_some_empty_not_none() {
        let mut bridge = EditorBridge::unmounted();
        bridge.set_content("");
        assert_eq!(bridge.content(), Some(String::new()));
    }
}
