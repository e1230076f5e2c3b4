//! TerminalRenderer: puts the terminal into monitor mode and draws text lines.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::Print,
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    mouse_capture: bool,
    enhanced_keys: bool,
    last: Option<Vec<String>>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(mouse_capture: bool) -> Self {
        Self {
            stdout: io::stdout(),
            mouse_capture,
            enhanced_keys: false,
            last: None,
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    /// Whether the terminal accepted key release reporting on `enter`.
    pub fn reports_key_release(&self) -> bool {
        self.enhanced_keys
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableFocusChange)?;
        self.buf.queue(EnableBracketedPaste)?;
        if self.mouse_capture {
            self.buf.queue(EnableMouseCapture)?;
        }
        if self.enhanced_keys {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        log::debug!(
            "terminal entered (mouse capture {}, key releases {})",
            self.mouse_capture,
            self.enhanced_keys
        );
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.enhanced_keys {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        if self.mouse_capture {
            self.buf.queue(DisableMouseCapture)?;
        }
        self.buf.queue(DisableBracketedPaste)?;
        self.buf.queue(DisableFocusChange)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `lines`, rewriting only rows that differ from the previous draw.
    ///
    /// The cursor is parked where it was so warps stay visible.
    pub fn draw(&mut self, lines: Vec<String>) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::SavePosition)?;
        match &self.last {
            Some(prev) => encode_lines_into(prev, &lines, &mut self.buf)?,
            None => {
                self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
                encode_lines_into(&[], &lines, &mut self.buf)?;
            }
        }
        self.buf.queue(cursor::RestorePosition)?;
        self.flush_buf()?;
        self.last = Some(lines);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the rows of `next` that differ from `prev` into `out`.
///
/// Rows past the end of `next` that `prev` still had are cleared.
pub fn encode_lines_into(prev: &[String], next: &[String], out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_line(prev, next, |row, line| {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        if let Some(line) = line {
            out.queue(Print(line))?;
        }
        Ok(())
    })
}

fn for_each_changed_line(
    prev: &[String],
    next: &[String],
    mut f: impl FnMut(u16, Option<&str>) -> Result<()>,
) -> Result<()> {
    let rows = prev.len().max(next.len()).min(u16::MAX as usize);
    for row in 0..rows {
        let before = prev.get(row).map(String::as_str);
        let after = next.get(row).map(String::as_str);
        if before != after {
            f(row as u16, after)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn changed_line_iterator_skips_identical_rows() {
        let prev = lines(&["a", "b", "c"]);
        let next = lines(&["a", "x", "c", "d"]);

        let mut rows = Vec::new();
        for_each_changed_line(&prev, &next, |row, line| {
            rows.push((row, line.map(str::to_string)));
            Ok(())
        })
        .unwrap();
        assert_eq!(rows, vec![(1, Some("x".into())), (3, Some("d".into()))]);
    }

    #[test]
    fn shrinking_clears_stale_rows() {
        let prev = lines(&["a", "b"]);
        let next = lines(&["a"]);

        let mut rows = Vec::new();
        for_each_changed_line(&prev, &next, |row, line| {
            rows.push((row, line.is_some()));
            Ok(())
        })
        .unwrap();
        assert_eq!(rows, vec![(1, false)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let frame = lines(&["same", "frame"]);
        let mut out = Vec::new();
        encode_lines_into(&frame, &frame, &mut out).unwrap();
        assert!(out.is_empty());

        encode_lines_into(&[], &frame, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("same") && text.contains("frame"));
    }
}
