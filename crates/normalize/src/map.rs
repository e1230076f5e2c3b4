//! Key mapping from terminal key codes to virtual key codes.
//!
//! Terminals report characters, not physical keys, so shifted punctuation is
//! folded back onto the key that produces it on a US layout.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MediaKeyCode, ModifierKeyCode};

use crate::types::KeyCode as Vk;

/// Map a terminal key code to the virtual key that produced it.
pub fn virtual_key(code: KeyCode) -> Option<Vk> {
    let vk = match code {
        KeyCode::Backspace => Vk::BACKSPACE,
        KeyCode::Tab | KeyCode::BackTab => Vk::TAB,
        KeyCode::Enter => Vk::ENTER,
        KeyCode::Esc => Vk::ESCAPE,
        KeyCode::PageUp => Vk::PAGE_UP,
        KeyCode::PageDown => Vk::PAGE_DOWN,
        KeyCode::End => Vk::END,
        KeyCode::Home => Vk::HOME,
        KeyCode::Left => Vk::LEFT,
        KeyCode::Up => Vk::UP,
        KeyCode::Right => Vk::RIGHT,
        KeyCode::Down => Vk::DOWN,
        KeyCode::Insert => Vk::INSERT,
        KeyCode::Delete => Vk::DELETE,
        KeyCode::CapsLock => Vk::CAPS_LOCK,
        KeyCode::ScrollLock => Vk::SCROLL_LOCK,
        KeyCode::NumLock => Vk::NUM_LOCK,
        KeyCode::PrintScreen => Vk::PRINT_SCREEN,
        KeyCode::Pause => Vk::PAUSE,
        KeyCode::Menu => Vk::APPS,
        KeyCode::KeypadBegin => Vk::CLEAR,
        KeyCode::F(n) => return Vk::function(n),
        KeyCode::Char(c) => return char_key(c),
        KeyCode::Media(m) => return media_key(m),
        KeyCode::Modifier(m) => return modifier_key(m),
        _ => return None,
    };
    Some(vk)
}

/// Virtual key for a typed character (US layout).
pub fn char_key(c: char) -> Option<Vk> {
    if let Some(vk) = Vk::letter(c) {
        return Some(vk);
    }
    if let Some(d) = c.to_digit(10) {
        return Vk::digit(d as u8);
    }

    let vk = match c {
        ' ' => Vk::SPACE,
        '\t' => Vk::TAB,
        '\n' | '\r' => Vk::ENTER,
        ')' => Vk::NUM0,
        '!' => Vk::NUM1,
        '@' => Vk::NUM2,
        '#' => Vk::NUM3,
        '$' => Vk::NUM4,
        '%' => Vk::NUM5,
        '^' => Vk::NUM6,
        '&' => Vk::NUM7,
        '*' => Vk::NUM8,
        '(' => Vk::NUM9,
        ';' | ':' => Vk::OEM_SEMICOLON,
        '=' | '+' => Vk::OEM_PLUS,
        ',' | '<' => Vk::OEM_COMMA,
        '-' | '_' => Vk::OEM_MINUS,
        '.' | '>' => Vk::OEM_PERIOD,
        '/' | '?' => Vk::OEM_SLASH,
        '`' | '~' => Vk::OEM_TILDE,
        '[' | '{' => Vk::OEM_OPEN_BRACKET,
        '\\' | '|' => Vk::OEM_BACKSLASH,
        ']' | '}' => Vk::OEM_CLOSE_BRACKET,
        '\'' | '"' => Vk::OEM_QUOTE,
        _ => return None,
    };
    Some(vk)
}

fn media_key(code: MediaKeyCode) -> Option<Vk> {
    let vk = match code {
        MediaKeyCode::PlayPause | MediaKeyCode::Play | MediaKeyCode::Pause => Vk::MEDIA_PLAY_PAUSE,
        MediaKeyCode::Stop => Vk::MEDIA_STOP,
        MediaKeyCode::TrackNext => Vk::MEDIA_NEXT_TRACK,
        MediaKeyCode::TrackPrevious => Vk::MEDIA_PREV_TRACK,
        MediaKeyCode::LowerVolume => Vk::VOLUME_DOWN,
        MediaKeyCode::RaiseVolume => Vk::VOLUME_UP,
        MediaKeyCode::MuteVolume => Vk::VOLUME_MUTE,
        _ => return None,
    };
    Some(vk)
}

fn modifier_key(code: ModifierKeyCode) -> Option<Vk> {
    let vk = match code {
        ModifierKeyCode::LeftShift => Vk::LSHIFT,
        ModifierKeyCode::RightShift => Vk::RSHIFT,
        ModifierKeyCode::LeftControl => Vk::LCONTROL,
        ModifierKeyCode::RightControl => Vk::RCONTROL,
        ModifierKeyCode::LeftAlt => Vk::LALT,
        ModifierKeyCode::RightAlt => Vk::RALT,
        ModifierKeyCode::LeftSuper => Vk::LWIN,
        ModifierKeyCode::RightSuper => Vk::RWIN,
        _ => return None,
    };
    Some(vk)
}

/// Text produced by a key event, if it should reach the text buffers.
///
/// Control and Alt chords are shortcuts, not text.
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(c),
        KeyCode::Enter => Some('\r'),
        KeyCode::Tab => Some('\t'),
        KeyCode::Backspace => Some('\u{8}'),
        _ => None,
    }
}

/// Check if key should quit the runner.
pub fn should_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
