//! Terminal implementation of the host traits.
//!
//! Window control uses XTWINOPS escape sequences (CSI Ps t), which are
//! fire-and-forget: terminals that honor them act on the request, the rest
//! ignore it. There is no reliable cross-terminal state query, so the
//! maximize flag tracks the last requested state.

use std::io::{IsTerminal, Write, stdout};
use std::path::Path;

use super::{Host, HostCapabilities, HostError};

/// Host backed by the controlling terminal and the local file system.
#[derive(Debug)]
pub struct TerminalHost {
    caps: HostCapabilities,
    maximized: bool,
}

impl TerminalHost {
    /// Build a host with capabilities resolved from the environment.
    ///
    /// `INKPAD_RESTRICTED=1` forces a host without file or window access,
    /// mirroring a sandboxed deployment where only rendering works.
    pub fn detect() -> Self {
        if std::env::var_os("INKPAD_RESTRICTED").is_some_and(|v| v == "1") {
            return Self::with_capabilities(HostCapabilities::none());
        }
        let window = stdout().is_terminal()
            && std::env::var("TERM").is_ok_and(|term| term != "dumb");
        Self::with_capabilities(HostCapabilities {
            files: true,
            window,
        })
    }

    pub const fn with_capabilities(caps: HostCapabilities) -> Self {
        Self {
            caps,
            maximized: false,
        }
    }

    fn write_winop(seq: &[u8]) {
        let mut out = stdout();
        if out.write_all(seq).and_then(|()| out.flush()).is_err() {
            tracing::warn!("window control escape write failed");
        }
    }
}

impl Host for TerminalHost {
    fn capabilities(&self) -> HostCapabilities {
        self.caps
    }

    fn read_text(&mut self, path: &Path) -> Result<String, HostError> {
        std::fs::read_to_string(path).map_err(|source| HostError::Read {
            path: path.display().to_string(),
            source,
        })
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<(), HostError> {
        std::fs::write(path, content).map_err(|source| HostError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    fn minimize(&mut self) {
        if self.caps.window {
            // XTWINOPS iconify
            Self::write_winop(b"\x1b[2t");
        }
    }

    fn toggle_maximize(&mut self) {
        if !self.caps.window {
            return;
        }
        if self.maximized {
            Self::write_winop(b"\x1b[9;0t");
        } else {
            Self::write_winop(b"\x1b[9;1t");
        }
        self.maximized = !self.maximized;
    }

    fn close(&mut self) {
        // The application owns its window: closing is quitting, which the
        // shell performs after issuing this request. Nothing to send.
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn start_dragging(&mut self) {
        // Terminals offer no window-move primitive; the drag region is inert.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_write_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.md");
        let mut host = TerminalHost::with_capabilities(HostCapabilities::full());

        host.write_text(&path, "# hi\n").unwrap();
        assert_eq!(host.read_text(&path).unwrap(), "# hi\n");
    }

    #[test]
    fn test_read_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let mut host = TerminalHost::with_capabilities(HostCapabilities::full());
        let err = host.read_text(&dir.path().join("absent.md")).unwrap_err();
        assert!(matches!(err, HostError::Read { .. }));
    }

    #[test]
    fn test_toggle_maximize_tracks_requested_state() {
        let mut host = TerminalHost::with_capabilities(HostCapabilities {
            files: true,
            window: true,
        });
        assert!(!host.is_maximized());
        host.toggle_maximize();
        assert!(host.is_maximized());
        host.toggle_maximize();
        assert!(!host.is_maximized());
    }

    #[test]
    fn test_toggle_maximize_without_window_capability_is_noop() {
        let mut host = TerminalHost::with_capabilities(HostCapabilities::none());
        host.toggle_maximize();
        assert!(!host.is_maximized());
    }
}
