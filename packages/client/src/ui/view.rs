//! Terminal views that render fetched message lists.

use std::{
    io::{self, Write},
    sync::{Mutex, MutexGuard},
};

use watchparty_shared::time::get_jst_timestamp;

use crate::{
    domain::{Message, RoomId},
    usecase::MessageSink,
};

use super::formatter::{format_header, format_messages};

/// ANSI sequence: clear the screen and move the cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Replaces the whole screen with the latest list on every update.
pub struct RedrawView<W> {
    out: Mutex<W>,
    room_id: RoomId,
    clear: bool,
}

impl<W: Write + Send> RedrawView<W> {
    pub fn new(out: W, room_id: RoomId) -> Self {
        Self {
            out: Mutex::new(out),
            room_id,
            clear: true,
        }
    }

    /// Do not emit the clear-screen sequence (for non-terminal output).
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    /// Consume the view and return the writer.
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self, messages: &[Message]) -> io::Result<()> {
        let mut out = lock(&self.out);
        if self.clear {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        writeln!(
            out,
            "{}",
            format_header(self.room_id, messages.len(), get_jst_timestamp())
        )?;
        out.write_all(format_messages(messages).as_bytes())?;
        out.flush()
    }
}

impl<W: Write + Send> MessageSink for RedrawView<W> {
    fn render(&self, messages: &[Message]) {
        if let Err(e) = self.write(messages) {
            tracing::warn!("Failed to render messages: {}", e);
        }
    }
}

struct TailState<W> {
    out: W,
    rendered: usize,
}

/// Prints only the messages past the last rendered position.
///
/// Lists shorter than what was already shown are stale responses from
/// overlapping polls and are ignored.
pub struct TailView<W> {
    state: Mutex<TailState<W>>,
}

impl<W: Write + Send> TailView<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: Mutex::new(TailState { out, rendered: 0 }),
        }
    }

    /// Number of messages printed so far.
    pub fn rendered(&self) -> usize {
        lock(&self.state).rendered
    }

    /// Consume the view and return the writer.
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .out
    }

    fn write(&self, messages: &[Message]) -> io::Result<()> {
        let mut state = lock(&self.state);
        if messages.len() <= state.rendered {
            return Ok(());
        }
        let new = &messages[state.rendered..];
        state.out.write_all(format_messages(new).as_bytes())?;
        state.out.flush()?;
        state.rendered = messages.len();
        Ok(())
    }
}

impl<W: Write + Send> MessageSink for TailView<W> {
    fn render(&self, messages: &[Message]) {
        if let Err(e) = self.write(messages) {
            tracing::warn!("Failed to render messages: {}", e);
        }
    }
}
