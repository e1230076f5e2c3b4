//! Text input buffers.
//!
//! Two independent FIFO buffers: raw per-keystroke codepoints and characters
//! committed by an input method. Both are gated by a single enable flag and
//! grow until drained; there is no cap, bounding them is the host's job.

use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct TextBuffers {
    enabled: bool,
    characters: VecDeque<u32>,
    composed: VecDeque<char>,
}

impl TextBuffers {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle the gate. Already buffered text is kept either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns false when the character was dropped because input is disabled.
    pub fn push_character(&mut self, codepoint: u32) -> bool {
        if self.enabled {
            self.characters.push_back(codepoint);
        }
        self.enabled
    }

    pub fn push_composed(&mut self, ch: char) -> bool {
        if self.enabled {
            self.composed.push_back(ch);
        }
        self.enabled
    }

    pub fn pending_characters(&self) -> usize {
        self.characters.len()
    }

    pub fn pending_composed(&self) -> usize {
        self.composed.len()
    }

    pub fn drain_characters(&mut self, max: usize) -> Vec<u32> {
        drain_front(&mut self.characters, max)
    }

    pub fn drain_composed(&mut self, max: usize) -> Vec<char> {
        drain_front(&mut self.composed, max)
    }

    pub fn clear(&mut self) {
        self.characters.clear();
        self.composed.clear();
    }
}

fn drain_front<T>(buf: &mut VecDeque<T>, max: usize) -> Vec<T> {
    let n = max.min(buf.len());
    buf.drain(..n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_is_fifo_and_bounded() {
        let mut t = TextBuffers::new(true);
        t.push_character('a' as u32);
        t.push_character('b' as u32);

        assert_eq!(t.drain_characters(1), vec!['a' as u32]);
        assert_eq!(t.drain_characters(10), vec!['b' as u32]);
        assert!(t.drain_characters(10).is_empty());
    }

    #[test]
    fn test_disabled_drops_both_kinds() {
        let mut t = TextBuffers::new(false);
        assert!(!t.push_character('x' as u32));
        assert!(!t.push_composed('語'));
        assert_eq!(t.pending_characters(), 0);
        assert_eq!(t.pending_composed(), 0);
    }

    #[test]
    fn test_disabling_keeps_buffered_text() {
        let mut t = TextBuffers::new(true);
        t.push_composed('日');
        t.set_enabled(false);
        assert_eq!(t.drain_composed(4), vec!['日']);
    }

    #[test]
    fn test_uncomposed_codepoints_are_kept_verbatim() {
        let mut t = TextBuffers::new(true);
        // High surrogate half of U+1F600, as a UTF-16 producer would deliver it.
        t.push_character(0xD83D);
        assert_eq!(t.drain_characters(1), vec![0xD83D]);
    }
}
