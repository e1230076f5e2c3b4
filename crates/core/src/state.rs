//! Committed key, scan code, and mouse button state.
//!
//! [`InputState`] is the read-only view handed to key and button subscribers
//! during a commit, and the backing store for the polling queries on
//! [`InputContext`](crate::InputContext).

use crate::table::EdgeTable;
use crate::types::{KeyCode, MouseButton, ScanCode, KEY_SLOTS, MOUSE_BUTTONS, SCAN_SLOTS};

/// Double-buffered state for every binary input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    keys: EdgeTable<KEY_SLOTS>,
    scans: EdgeTable<SCAN_SLOTS>,
    buttons: EdgeTable<MOUSE_BUTTONS>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: EdgeTable::new(),
            scans: EdgeTable::new(),
            buttons: EdgeTable::new(),
        }
    }

    pub(crate) fn snapshot(&mut self) {
        self.keys.snapshot();
        self.scans.snapshot();
        self.buttons.snapshot();
    }

    pub(crate) fn set_key(&mut self, key: KeyCode, is_down: bool) {
        self.keys.set(key.index(), is_down);
    }

    pub(crate) fn set_scan(&mut self, scan: ScanCode, is_down: bool) {
        self.scans.set(scan.index(), is_down);
    }

    pub(crate) fn set_button(&mut self, button: MouseButton, is_down: bool) {
        self.buttons.set(button.index(), is_down);
    }

    // Keys

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.is_down(key.index())
    }

    pub fn key_went_down(&self, key: KeyCode) -> bool {
        self.keys.went_down(key.index())
    }

    pub fn key_went_up(&self, key: KeyCode) -> bool {
        self.keys.went_up(key.index())
    }

    /// True if any key got a down edge at the last commit.
    pub fn any_key_went_down(&self) -> bool {
        self.keys.any_went_down()
    }

    /// True if any key is currently held.
    pub fn any_key_down(&self) -> bool {
        self.keys.any_down()
    }

    pub fn keys_down(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter_down().map(key_at)
    }

    pub fn keys_went_down(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter_went_down().map(key_at)
    }

    pub fn keys_went_up(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter_went_up().map(key_at)
    }

    // Scan codes

    pub fn is_scan_down(&self, scan: ScanCode) -> bool {
        self.scans.is_down(scan.index())
    }

    pub fn scan_went_down(&self, scan: ScanCode) -> bool {
        self.scans.went_down(scan.index())
    }

    pub fn scan_went_up(&self, scan: ScanCode) -> bool {
        self.scans.went_up(scan.index())
    }

    pub fn scans_down(&self) -> impl Iterator<Item = ScanCode> + '_ {
        self.scans
            .iter_down()
            .filter_map(|i| u16::try_from(i).ok().and_then(ScanCode::new))
    }

    // Mouse buttons

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.is_down(button.index())
    }

    pub fn button_went_down(&self, button: MouseButton) -> bool {
        self.buttons.went_down(button.index())
    }

    pub fn button_went_up(&self, button: MouseButton) -> bool {
        self.buttons.went_up(button.index())
    }

    pub fn buttons_down(&self) -> impl Iterator<Item = MouseButton> + '_ {
        MouseButton::ALL
            .into_iter()
            .filter(move |b| self.is_button_down(*b))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

// Key table indices are always < 256.
fn key_at(index: usize) -> KeyCode {
    KeyCode::from_u8(index as u8)
}
