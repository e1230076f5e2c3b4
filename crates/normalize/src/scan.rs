//! Virtual key to scan code translation.
//!
//! Terminals never report scan codes, so the normalizer synthesizes the PC
//! set 1 make code a standard US keyboard would send for the key, with the E0
//! prefix folded in for the extended navigation block and right-hand modifiers.

use crate::types::{KeyCode as Vk, ScanCode};

/// Scan code for a virtual key, if it has one on a standard keyboard.
pub fn scan_code(vk: Vk) -> Option<ScanCode> {
    let (make, e0) = match vk {
        Vk::ESCAPE => (0x01, false),
        Vk::OEM_MINUS => (0x0C, false),
        Vk::OEM_PLUS => (0x0D, false),
        Vk::BACKSPACE => (0x0E, false),
        Vk::TAB => (0x0F, false),
        Vk::OEM_OPEN_BRACKET => (0x1A, false),
        Vk::OEM_CLOSE_BRACKET => (0x1B, false),
        Vk::ENTER => (0x1C, false),
        Vk::LCONTROL | Vk::CONTROL => (0x1D, false),
        Vk::OEM_SEMICOLON => (0x27, false),
        Vk::OEM_QUOTE => (0x28, false),
        Vk::OEM_TILDE => (0x29, false),
        Vk::LSHIFT | Vk::SHIFT => (0x2A, false),
        Vk::OEM_BACKSLASH => (0x2B, false),
        Vk::OEM_COMMA => (0x33, false),
        Vk::OEM_PERIOD => (0x34, false),
        Vk::OEM_SLASH => (0x35, false),
        Vk::RSHIFT => (0x36, false),
        Vk::LALT | Vk::ALT => (0x38, false),
        Vk::SPACE => (0x39, false),
        Vk::CAPS_LOCK => (0x3A, false),
        Vk::NUM_LOCK => (0x45, false),
        Vk::SCROLL_LOCK => (0x46, false),
        Vk::F11 => (0x57, false),
        Vk::F12 => (0x58, false),

        // Extended (E0) keys
        Vk::RCONTROL => (0x1D, true),
        Vk::RALT => (0x38, true),
        Vk::PRINT_SCREEN => (0x37, true),
        Vk::HOME => (0x47, true),
        Vk::UP => (0x48, true),
        Vk::PAGE_UP => (0x49, true),
        Vk::LEFT => (0x4B, true),
        Vk::RIGHT => (0x4D, true),
        Vk::END => (0x4F, true),
        Vk::DOWN => (0x50, true),
        Vk::PAGE_DOWN => (0x51, true),
        Vk::INSERT => (0x52, true),
        Vk::DELETE => (0x53, true),
        Vk::LWIN => (0x5B, true),
        Vk::RWIN => (0x5C, true),
        Vk::APPS => (0x5D, true),

        // Pause is the only key sent with an E1 prefix.
        Vk::PAUSE => return Some(ScanCode::from_parts(0x1D, false, true)),

        other => return row_scan_code(other),
    };
    Some(ScanCode::from_parts(make, e0, false))
}

const DIGIT_ROW: [u8; 10] = [0x0B, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];

// Indexed by letter offset from 'A'.
const LETTERS: [u8; 26] = [
    0x1E, 0x30, 0x2E, 0x20, 0x12, 0x21, 0x22, 0x23, 0x17, 0x24, 0x25, 0x26, 0x32, 0x31, 0x18,
    0x19, 0x10, 0x13, 0x1F, 0x14, 0x16, 0x2F, 0x11, 0x2D, 0x15, 0x2C,
];

// F1-F10 are contiguous; F11/F12 are handled above.
fn row_scan_code(vk: Vk) -> Option<ScanCode> {
    let raw = vk.raw();
    let make = if (Vk::NUM0.raw()..=Vk::NUM9.raw()).contains(&raw) {
        DIGIT_ROW[(raw - Vk::NUM0.raw()) as usize]
    } else if (Vk::A.raw()..=Vk::Z.raw()).contains(&raw) {
        LETTERS[(raw - Vk::A.raw()) as usize]
    } else if (Vk::F1.raw()..=Vk::F10.raw()).contains(&raw) {
        0x3B + (raw - Vk::F1.raw())
    } else {
        return None;
    };
    Some(ScanCode::from_parts(make, false, false))
}
