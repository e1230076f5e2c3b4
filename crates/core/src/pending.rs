//! Per-tick transition queues.
//!
//! Transitions are appended between commits and replayed in insertion order by
//! the next commit. Nothing is coalesced: a press and release of the same key
//! inside one tick are both kept.

use crate::types::{KeyCode, MouseButton, ScanCode};

/// One recorded up/down edge for a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<T> {
    pub code: T,
    pub is_down: bool,
}

impl<T> Transition<T> {
    pub const fn new(code: T, is_down: bool) -> Self {
        Self { code, is_down }
    }
}

/// Transitions observed since the last commit.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    pub(crate) keys: Vec<Transition<KeyCode>>,
    pub(crate) scans: Vec<Transition<ScanCode>>,
    pub(crate) buttons: Vec<Transition<MouseButton>>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_key(&mut self, key: KeyCode, is_down: bool) {
        self.keys.push(Transition::new(key, is_down));
    }

    pub fn push_scan(&mut self, scan: ScanCode, is_down: bool) {
        self.scans.push(Transition::new(scan, is_down));
    }

    pub fn push_button(&mut self, button: MouseButton, is_down: bool) {
        self.buttons.push(Transition::new(button, is_down));
    }

    pub fn keys(&self) -> &[Transition<KeyCode>] {
        &self.keys
    }

    pub fn scans(&self) -> &[Transition<ScanCode>] {
        &self.scans
    }

    pub fn buttons(&self) -> &[Transition<MouseButton>] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.keys.len() + self.scans.len() + self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every queued transition. Capacity is kept so steady-state commits
    /// do not allocate.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.scans.clear();
        self.buttons.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_keep_insertion_order_without_coalescing() {
        let mut q = PendingQueue::new();
        q.push_key(KeyCode::A, true);
        q.push_key(KeyCode::A, false);
        q.push_key(KeyCode::B, true);

        assert_eq!(
            q.keys(),
            &[
                Transition::new(KeyCode::A, true),
                Transition::new(KeyCode::A, false),
                Transition::new(KeyCode::B, true),
            ]
        );
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut q = PendingQueue::new();
        for _ in 0..16 {
            q.push_button(MouseButton::Left, true);
        }
        let cap = q.buttons.capacity();

        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.buttons.capacity(), cap);
    }
}
