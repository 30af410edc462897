use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::watcher::FileWatcher;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        // Capabilities are resolved exactly once, before anything renders.
        let caps = self.host.capabilities();

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — inkpad requires an interactive terminal")?;
        execute!(stdout(), EnableMouseCapture)?;
        let size = terminal.size()?;

        let mut model = Model::new(caps, (size.width, size.height));
        model.chrome_enabled = self.chrome_enabled;
        model.preview_visible = self.preview_visible;
        model.split_percent = crate::ui::layout::clamp_split_percent(self.split_percent);
        model.is_maximized = self.host.is_maximized();

        // Mount the initial document. A failed read still mounts an empty
        // Untitled document so the editor is usable.
        match self.file_path.as_deref() {
            Some(path) if caps.files => match self.host.read_text(path) {
                Ok(text) => {
                    model.bridge.set_content(&text);
                    model.file_path = Some(path.to_path_buf());
                }
                Err(err) => {
                    model.bridge.set_content("");
                    model.show_alert(format!("Failed to open file: {err}"));
                }
            },
            Some(_) => {
                model.bridge.set_content("");
                model.show_alert("File access is not available on this host");
            }
            None => model.bridge.set_content(""),
        }

        let result = self.event_loop(&mut terminal, &mut model);

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut file_watcher: Option<FileWatcher> = None;
        Self::rebind_watcher(model, &mut file_watcher);
        let mut watched_path = model.file_path.clone();
        let mut needs_render = true;

        loop {
            // Rebind the watcher when the document binding changed.
            if model.file_path != watched_path {
                Self::rebind_watcher(model, &mut file_watcher);
                watched_path.clone_from(&model.file_path);
            }

            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                let msg = Message::Resize(width, height);
                *model = update(std::mem::take(model), msg.clone());
                // Resize also re-queries window state from the host.
                Self::handle_message_side_effects(
                    model,
                    &mut file_watcher,
                    self.host.as_mut(),
                    &msg,
                );
                needs_render = true;
            }

            if file_watcher
                .as_mut()
                .is_some_and(FileWatcher::take_change_ready)
            {
                *model = update(std::mem::take(model), Message::DiskChanged);
                needs_render = true;
            }

            // Handle events
            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after poll wait so the debouncer uses
                // accurate times.
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let msg =
                    Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                if let Some(msg) = msg {
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    Self::handle_message_side_effects(
                        model,
                        &mut file_watcher,
                        self.host.as_mut(),
                        &side_msg,
                    );
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    let msg = Self::handle_event(
                        &event::read()?,
                        model,
                        drain_ms,
                        &mut resize_debouncer,
                    );
                    if let Some(msg) = msg {
                        let side_msg = msg.clone();
                        *model = update(std::mem::take(model), msg);
                        Self::handle_message_side_effects(
                            model,
                            &mut file_watcher,
                            self.host.as_mut(),
                            &side_msg,
                        );
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
