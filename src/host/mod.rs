//! Host runtime abstraction.
//!
//! The shell talks to its surroundings (the file system and the terminal
//! window) through the [`Host`] trait. What the surroundings can actually
//! do is resolved exactly once at startup into a [`HostCapabilities`]
//! descriptor; components branch on capability presence instead of probing
//! the environment themselves.

mod terminal;

use std::path::Path;

pub use terminal::TerminalHost;

/// What the current host can do, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// File open/save is available.
    pub files: bool,
    /// The host window can be minimized/maximized/closed.
    pub window: bool,
}

impl HostCapabilities {
    /// Everything available (interactive terminal).
    pub const fn full() -> Self {
        Self {
            files: true,
            window: true,
        }
    }

    /// Nothing available beyond rendering.
    pub const fn none() -> Self {
        Self {
            files: false,
            window: false,
        }
    }
}

/// Host-operation failures.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The desktop-side collaborators: file system and window manager.
///
/// Window requests are fire-and-forget; the shell confirms resulting state
/// through [`Host::is_maximized`] rather than assuming the request took
/// effect.
pub trait Host {
    fn capabilities(&self) -> HostCapabilities;

    fn read_text(&mut self, path: &Path) -> Result<String, HostError>;
    fn write_text(&mut self, path: &Path, content: &str) -> Result<(), HostError>;

    fn minimize(&mut self);
    fn toggle_maximize(&mut self);
    fn close(&mut self);
    fn is_maximized(&self) -> bool;
    fn start_dragging(&mut self);
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    use super::{Host, HostCapabilities, HostError};

    /// Recording in-memory host for tests.
    #[derive(Debug)]
    pub struct MockHost {
        pub caps: HostCapabilities,
        pub files: HashMap<PathBuf, String>,
        pub reads: Vec<PathBuf>,
        pub writes: Vec<PathBuf>,
        pub maximized: bool,
        pub minimize_calls: usize,
        pub close_calls: usize,
        pub drag_calls: usize,
    }

    impl Default for MockHost {
        fn default() -> Self {
            Self {
                caps: HostCapabilities::full(),
                files: HashMap::new(),
                reads: Vec::new(),
                writes: Vec::new(),
                maximized: false,
                minimize_calls: 0,
                close_calls: 0,
                drag_calls: 0,
            }
        }
    }

    impl MockHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn without_files() -> Self {
            Self {
                caps: HostCapabilities {
                    files: false,
                    window: true,
                },
                ..Self::default()
            }
        }

        pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
            self.files.insert(path.into(), content.to_string());
            self
        }
    }

    impl Host for MockHost {
        fn capabilities(&self) -> HostCapabilities {
            self.caps
        }

        fn read_text(&mut self, path: &Path) -> Result<String, HostError> {
            self.reads.push(path.to_path_buf());
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| HostError::Read {
                    path: path.display().to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }

        fn write_text(&mut self, path: &Path, content: &str) -> Result<(), HostError> {
            self.writes.push(path.to_path_buf());
            self.files.insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn minimize(&mut self) {
            self.minimize_calls += 1;
        }

        fn toggle_maximize(&mut self) {
            self.maximized = !self.maximized;
        }

        fn close(&mut self) {
            self.close_calls += 1;
        }

        fn is_maximized(&self) -> bool {
            self.maximized
        }

        fn start_dragging(&mut self) {
            self.drag_calls += 1;
        }
    }
}
