//! Terminal cursor backend.
//!
//! Terminals have no display counter, so one is emulated: the cursor is shown
//! while the counter is `>= 0` and the show/hide escape is written only when
//! the counter crosses that threshold.

use std::io::Write;

use crossterm::{cursor, QueueableCommand};

use crate::core::{CursorBackend, CursorError};

pub struct TerminalCursor<W: Write> {
    out: W,
    display_count: i32,
}

impl<W: Write> TerminalCursor<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            display_count: 0,
        }
    }

    pub fn display_count(&self) -> i32 {
        self.display_count
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit_visibility(&mut self, visible: bool) -> std::io::Result<()> {
        if visible {
            self.out.queue(cursor::Show)?;
        } else {
            self.out.queue(cursor::Hide)?;
        }
        self.out.flush()
    }
}

impl<W: Write> CursorBackend for TerminalCursor<W> {
    fn adjust_display_count(&mut self, show: bool) -> i32 {
        let was_visible = self.display_count >= 0;
        self.display_count += if show { 1 } else { -1 };
        let visible = self.display_count >= 0;

        if visible != was_visible {
            if let Err(e) = self.emit_visibility(visible) {
                log::warn!("failed to write cursor visibility: {e}");
            }
        }
        self.display_count
    }

    fn set_clip(&mut self, _clip: bool) -> Result<(), CursorError> {
        Err(CursorError::Unsupported {
            operation: "clip cursor",
        })
    }

    fn warp(&mut self, x: i32, y: i32) -> Result<(), CursorError> {
        let (Ok(col), Ok(row)) = (u16::try_from(x), u16::try_from(y)) else {
            return Err(CursorError::OutOfBounds { x, y });
        };
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.flush()?;
        Ok(())
    }
}
