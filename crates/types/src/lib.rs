//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (state engine, event normalizers, monitor views).
//!
//! # Table Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `KEY_SLOTS` | 256 | Virtual key codes, one slot per `u8` value |
//! | `SCAN_SLOTS` | 0x400 | Make codes with E0 (`0x100`) and E1 (`0x200`) folded in |
//! | `MOUSE_BUTTONS` | 5 | Left, right, middle, X1, X2 |
//! | `WHEEL_DELTA` | 120 | Raw wheel units per notch |
//!
//! # Codes are dense
//!
//! [`KeyCode`], [`ScanCode`] and [`MouseButton`] can only hold values that index
//! their table, so queries never need a range check. Raw platform values are
//! converted with `from_raw`/`new`/`from_index`, which return `None` for values
//! outside the table.
//!
//! # Examples
//!
//! ```
//! use frame_input_types::{KeyCode, MouseButton, ScanCode, SCAN_E0};
//!
//! assert_eq!(KeyCode::from_raw(0x41), Some(KeyCode::A));
//! assert_eq!(KeyCode::from_raw(0x1_00), None);
//!
//! let up = ScanCode::from_parts(0x48, true, false);
//! assert_eq!(up.raw(), 0x48 | SCAN_E0);
//! assert!(up.is_e0());
//!
//! assert_eq!(MouseButton::from_index(2), Some(MouseButton::Middle));
//! assert_eq!(MouseButton::from_str("x1"), Some(MouseButton::X1));
//! ```

/// Number of virtual key slots (one per `u8` value)
pub const KEY_SLOTS: usize = 256;

/// Number of scan code slots (make code plus E0/E1 prefix bits)
pub const SCAN_SLOTS: usize = 0x400;

/// Scan code bit set when the hardware sent an E0 prefix
pub const SCAN_E0: u16 = 0x100;

/// Scan code bit set when the hardware sent an E1 prefix
pub const SCAN_E1: u16 = 0x200;

/// Number of tracked mouse buttons
pub const MOUSE_BUTTONS: usize = 5;

/// Raw wheel units per logical notch
pub const WHEEL_DELTA: i32 = 120;


/// A virtual key code.
///
/// Wraps a `u8`, so every value is a valid index into a [`KEY_SLOTS`] table.
/// Named constants follow the reference platform's virtual key numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyCode(u8);

macro_rules! key_codes {
    ($($name:ident = $value:literal, $text:literal;)*) => {
        impl KeyCode {
            $(
                pub const $name: KeyCode = KeyCode($value);
            )*

            /// Lowercase name of a named key, `None` for unnamed codes.
            pub fn name(&self) -> Option<&'static str> {
                match self.0 {
                    $(
                        $value => Some($text),
                    )*
                    _ => None,
                }
            }

            /// Parse a key from its name (case-insensitive)
            ///
            /// # Examples
            ///
            /// ```
            /// use frame_input_types::KeyCode;
            ///
            /// assert_eq!(KeyCode::from_str("Space"), Some(KeyCode::SPACE));
            /// assert_eq!(KeyCode::from_str("f11"), Some(KeyCode::F11));
            /// assert_eq!(KeyCode::from_str("unknown"), None);
            /// ```
            pub fn from_str(s: &str) -> Option<Self> {
                match s.to_lowercase().as_str() {
                    $(
                        $text => Some(KeyCode::$name),
                    )*
                    _ => None,
                }
            }
        }
    };
}

key_codes! {
    // Control / edit
    BACKSPACE = 0x08, "backspace";
    TAB = 0x09, "tab";
    CLEAR = 0x0C, "clear";
    ENTER = 0x0D, "enter";
    SHIFT = 0x10, "shift";
    CONTROL = 0x11, "control";
    ALT = 0x12, "alt";
    PAUSE = 0x13, "pause";
    CAPS_LOCK = 0x14, "capslock";
    IME_KANA = 0x15, "imekana";
    IME_JUNJA = 0x17, "imejunja";
    IME_FINAL = 0x18, "imefinal";
    ESCAPE = 0x1B, "escape";
    IME_CONVERT = 0x1C, "imeconvert";
    IME_NON_CONVERT = 0x1D, "imenonconvert";
    IME_ACCEPT = 0x1E, "imeaccept";
    IME_MODE_CHANGE = 0x1F, "imemodechange";
    SPACE = 0x20, "space";
    PAGE_UP = 0x21, "pageup";
    PAGE_DOWN = 0x22, "pagedown";
    END = 0x23, "end";
    HOME = 0x24, "home";
    LEFT = 0x25, "left";
    UP = 0x26, "up";
    RIGHT = 0x27, "right";
    DOWN = 0x28, "down";
    SELECT = 0x29, "select";
    PRINT = 0x2A, "print";
    EXECUTE = 0x2B, "execute";
    PRINT_SCREEN = 0x2C, "printscreen";
    INSERT = 0x2D, "insert";
    DELETE = 0x2E, "delete";
    HELP = 0x2F, "help";

    // Digits
    NUM0 = b'0', "0";
    NUM1 = b'1', "1";
    NUM2 = b'2', "2";
    NUM3 = b'3', "3";
    NUM4 = b'4', "4";
    NUM5 = b'5', "5";
    NUM6 = b'6', "6";
    NUM7 = b'7', "7";
    NUM8 = b'8', "8";
    NUM9 = b'9', "9";

    // Letters
    A = b'A', "a";
    B = b'B', "b";
    C = b'C', "c";
    D = b'D', "d";
    E = b'E', "e";
    F = b'F', "f";
    G = b'G', "g";
    H = b'H', "h";
    I = b'I', "i";
    J = b'J', "j";
    K = b'K', "k";
    L = b'L', "l";
    M = b'M', "m";
    N = b'N', "n";
    O = b'O', "o";
    P = b'P', "p";
    Q = b'Q', "q";
    R = b'R', "r";
    S = b'S', "s";
    T = b'T', "t";
    U = b'U', "u";
    V = b'V', "v";
    W = b'W', "w";
    X = b'X', "x";
    Y = b'Y', "y";
    Z = b'Z', "z";

    // System
    LWIN = 0x5B, "lwin";
    RWIN = 0x5C, "rwin";
    APPS = 0x5D, "apps";
    SLEEP = 0x5F, "sleep";

    // Numpad
    NUMPAD0 = 0x60, "numpad0";
    NUMPAD1 = 0x61, "numpad1";
    NUMPAD2 = 0x62, "numpad2";
    NUMPAD3 = 0x63, "numpad3";
    NUMPAD4 = 0x64, "numpad4";
    NUMPAD5 = 0x65, "numpad5";
    NUMPAD6 = 0x66, "numpad6";
    NUMPAD7 = 0x67, "numpad7";
    NUMPAD8 = 0x68, "numpad8";
    NUMPAD9 = 0x69, "numpad9";
    NUMPAD_MUL = 0x6A, "numpadmul";
    NUMPAD_ADD = 0x6B, "numpadadd";
    NUMPAD_SEP = 0x6C, "numpadsep";
    NUMPAD_SUB = 0x6D, "numpadsub";
    NUMPAD_DEC = 0x6E, "numpaddec";
    NUMPAD_DIV = 0x6F, "numpaddiv";

    // Function keys
    F1 = 0x70, "f1";
    F2 = 0x71, "f2";
    F3 = 0x72, "f3";
    F4 = 0x73, "f4";
    F5 = 0x74, "f5";
    F6 = 0x75, "f6";
    F7 = 0x76, "f7";
    F8 = 0x77, "f8";
    F9 = 0x78, "f9";
    F10 = 0x79, "f10";
    F11 = 0x7A, "f11";
    F12 = 0x7B, "f12";
    F13 = 0x7C, "f13";
    F14 = 0x7D, "f14";
    F15 = 0x7E, "f15";
    F16 = 0x7F, "f16";
    F17 = 0x80, "f17";
    F18 = 0x81, "f18";
    F19 = 0x82, "f19";
    F20 = 0x83, "f20";
    F21 = 0x84, "f21";
    F22 = 0x85, "f22";
    F23 = 0x86, "f23";
    F24 = 0x87, "f24";

    // Locks
    NUM_LOCK = 0x90, "numlock";
    SCROLL_LOCK = 0x91, "scrolllock";

    // Sided modifiers
    LSHIFT = 0xA0, "lshift";
    RSHIFT = 0xA1, "rshift";
    LCONTROL = 0xA2, "lcontrol";
    RCONTROL = 0xA3, "rcontrol";
    LALT = 0xA4, "lalt";
    RALT = 0xA5, "ralt";

    // Browser / media
    BROWSER_BACK = 0xA6, "browserback";
    BROWSER_FORWARD = 0xA7, "browserforward";
    BROWSER_REFRESH = 0xA8, "browserrefresh";
    BROWSER_STOP = 0xA9, "browserstop";
    BROWSER_SEARCH = 0xAA, "browsersearch";
    BROWSER_FAVORITES = 0xAB, "browserfavorites";
    BROWSER_HOME = 0xAC, "browserhome";
    VOLUME_MUTE = 0xAD, "volumemute";
    VOLUME_DOWN = 0xAE, "volumedown";
    VOLUME_UP = 0xAF, "volumeup";
    MEDIA_NEXT_TRACK = 0xB0, "medianexttrack";
    MEDIA_PREV_TRACK = 0xB1, "mediaprevtrack";
    MEDIA_STOP = 0xB2, "mediastop";
    MEDIA_PLAY_PAUSE = 0xB3, "mediaplaypause";
    LAUNCH_MAIL = 0xB4, "launchmail";
    LAUNCH_MEDIA_SELECT = 0xB5, "launchmediaselect";
    LAUNCH_APP1 = 0xB6, "launchapp1";
    LAUNCH_APP2 = 0xB7, "launchapp2";

    // OEM (US layout)
    OEM_SEMICOLON = 0xBA, "semicolon";
    OEM_PLUS = 0xBB, "plus";
    OEM_COMMA = 0xBC, "comma";
    OEM_MINUS = 0xBD, "minus";
    OEM_PERIOD = 0xBE, "period";
    OEM_SLASH = 0xBF, "slash";
    OEM_TILDE = 0xC0, "tilde";
    OEM_OPEN_BRACKET = 0xDB, "openbracket";
    OEM_BACKSLASH = 0xDC, "backslash";
    OEM_CLOSE_BRACKET = 0xDD, "closebracket";
    OEM_QUOTE = 0xDE, "quote";
    OEM_8 = 0xDF, "oem8";
    OEM_102 = 0xE2, "oem102";
    PROCESS_KEY = 0xE5, "processkey";
}

impl KeyCode {
    pub const fn from_u8(value: u8) -> Self {
        KeyCode(value)
    }

    /// Convert a raw platform code, rejecting values outside the key table.
    pub fn from_raw(raw: u16) -> Option<Self> {
        u8::try_from(raw).ok().map(KeyCode)
    }

    pub const fn raw(&self) -> u8 {
        self.0
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Key for an ASCII letter, either case.
    pub fn letter(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(KeyCode(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Top-row digit key (0-9).
    pub fn digit(n: u8) -> Option<Self> {
        if n <= 9 {
            Some(KeyCode(b'0' + n))
        } else {
            None
        }
    }

    /// Function key F1-F24.
    pub fn function(n: u8) -> Option<Self> {
        if (1..=24).contains(&n) {
            Some(KeyCode(Self::F1.0 + n - 1))
        } else {
            None
        }
    }

    /// Every key code, in table order.
    pub fn all() -> impl Iterator<Item = KeyCode> {
        (0..=u8::MAX).map(KeyCode)
    }
}

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

/// A hardware scan code (PC set 1 make code).
///
/// The low byte is the make code; [`SCAN_E0`] and [`SCAN_E1`] record the
/// extended prefixes. Always below [`SCAN_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ScanCode(u16);

impl ScanCode {
    /// Wrap a folded scan code, rejecting values outside the scan table.
    pub fn new(raw: u16) -> Option<Self> {
        if (raw as usize) < SCAN_SLOTS {
            Some(ScanCode(raw))
        } else {
            None
        }
    }

    pub const fn from_parts(make_code: u8, e0: bool, e1: bool) -> Self {
        let mut raw = make_code as u16;
        if e0 {
            raw |= SCAN_E0;
        }
        if e1 {
            raw |= SCAN_E1;
        }
        ScanCode(raw)
    }

    pub const fn raw(&self) -> u16 {
        self.0
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    pub const fn make_code(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub const fn is_e0(&self) -> bool {
        self.0 & SCAN_E0 != 0
    }

    pub const fn is_e1(&self) -> bool {
        self.0 & SCAN_E1 != 0
    }
}

impl std::fmt::Display for ScanCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_e0() {
            f.write_str("E0 ")?;
        }
        if self.is_e1() {
            f.write_str("E1 ")?;
        }
        write!(f, "{:02X}", self.make_code())
    }
}

/// The five tracked mouse buttons
///
/// Discriminants are the table index used by the state engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
    X1 = 3,
    X2 = 4,
}

impl MouseButton {
    pub const ALL: [MouseButton; MOUSE_BUTTONS] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::X1,
        MouseButton::X2,
    ];

    /// Convert a raw button index, rejecting values outside the button table.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Parse button from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(MouseButton::Left),
            "right" => Some(MouseButton::Right),
            "middle" => Some(MouseButton::Middle),
            "x1" => Some(MouseButton::X1),
            "x2" => Some(MouseButton::X2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
            MouseButton::X1 => "x1",
            MouseButton::X2 => "x2",
        }
    }
}

/// Relative pointer motion in device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Motion {
    pub dx: i32,
    pub dy: i32,
}

impl Motion {
    pub const ZERO: Motion = Motion { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Add a delta, saturating at the `i32` bounds.
    pub fn accumulate(&mut self, dx: i32, dy: i32) {
        self.dx = self.dx.saturating_add(dx);
        self.dy = self.dy.saturating_add(dy);
    }
}

/// A normalized input record, as produced by an event normalizer.
///
/// Codes are still raw here: range validation happens when the record is
/// ingested by the state engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Virtual key transition
    Key { code: u16, is_down: bool },
    /// Scan code transition (E0/E1 already folded into the code)
    Scan { code: u16, is_down: bool },
    /// Mouse button transition by raw index
    MouseButton { index: u8, is_down: bool },
    /// Relative pointer motion
    Motion { dx: i32, dy: i32 },
    /// Raw wheel delta (`WHEEL_DELTA` units per notch, positive away from the user)
    Wheel { delta: i32 },
    /// Raw per-keystroke character code, possibly not yet composed
    Character { codepoint: u32 },
    /// Fully composed character from an input method
    ComposedCharacter { ch: char },
}

/// Broad class of an attached input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Keyboard,
    Mouse,
    Hid,
}

impl DeviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Keyboard => "keyboard",
            DeviceKind::Mouse => "mouse",
            DeviceKind::Hid => "hid",
        }
    }
}

/// An attached input device, as reported by a device source.
///
/// Vendor and product ids are 0 when the source cannot supply them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub kind: DeviceKind,
    pub vendor_id: u16,
    pub product_id: u16,
}

impl DeviceInfo {
    pub fn new(name: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            vendor_id: 0,
            product_id: 0,
        }
    }

    pub fn with_ids(mut self, vendor_id: u16, product_id: u16) -> Self {
        self.vendor_id = vendor_id;
        self.product_id = product_id;
        self
    }
}
