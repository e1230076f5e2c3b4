//! Terminal event normalizer.
//!
//! Turns crossterm events into [`InputEvent`] records for the state engine.
//!
//! Terminals differ in what they report:
//! - Most only send key presses. Until a release event is seen, every pressed
//!   key is remembered and a matching release is produced by
//!   [`Normalizer::synthetic_releases`], which the host calls after each commit
//!   so a tap shows up as down on one tick and up on the next.
//! - Mouse positions are absolute cells, so motion is the difference between
//!   successive positions.

use arrayvec::ArrayVec;
use crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton as TermButton, MouseEvent, MouseEventKind,
};

use crate::map;
use crate::scan;
use crate::types::{InputEvent, KeyCode as Vk, MouseButton, WHEEL_DELTA};

/// Records produced by one terminal event (key + scan + character at most).
pub type Normalized = ArrayVec<InputEvent, 4>;

/// Keys remembered while the terminal does not report releases.
pub const MAX_UNRELEASED: usize = 32;

/// Key and scan releases for every remembered key.
pub type Releases = ArrayVec<InputEvent, { 2 * MAX_UNRELEASED }>;

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    pointer: Option<(u16, u16)>,
    reports_release: bool,
    unreleased: ArrayVec<Vk, MAX_UNRELEASED>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer for a terminal whose release reporting is known up front,
    /// e.g. after it accepted keyboard enhancement. With `true`, no releases
    /// are ever synthesized.
    pub fn with_release_reporting(reports_release: bool) -> Self {
        Self {
            reports_release,
            ..Self::default()
        }
    }

    /// Whether a key release event has been observed from this terminal.
    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Last absolute pointer cell (column, row), if the mouse has reported one.
    pub fn pointer_position(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    pub fn normalize(&mut self, event: &Event) -> Normalized {
        match event {
            Event::Key(key) => self.key(key),
            Event::Mouse(mouse) => self.mouse(mouse),
            _ => Normalized::new(),
        }
    }

    /// Pasted text arrives already composed.
    pub fn paste(text: &str) -> impl Iterator<Item = InputEvent> + '_ {
        text.chars().map(|ch| InputEvent::ComposedCharacter { ch })
    }

    /// Releases for keys pressed on a terminal that never reports releases.
    /// Empty once the terminal has sent a real release.
    pub fn synthetic_releases(&mut self) -> Releases {
        let mut out = Releases::new();
        for vk in self.unreleased.drain(..) {
            let _ = out.try_push(InputEvent::Key {
                code: vk.raw() as u16,
                is_down: false,
            });
            if let Some(sc) = scan::scan_code(vk) {
                let _ = out.try_push(InputEvent::Scan {
                    code: sc.raw(),
                    is_down: false,
                });
            }
        }
        out
    }

    /// Forget pointer position and remembered keys (e.g. after focus loss).
    pub fn reset(&mut self) {
        self.pointer = None;
        self.unreleased.clear();
    }

    fn key(&mut self, key: &KeyEvent) -> Normalized {
        let mut out = Normalized::new();
        let vk = map::virtual_key(key.code);

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if let Some(vk) = vk {
                    push_key(&mut out, vk, true);
                    if !self.reports_release && !self.unreleased.contains(&vk) {
                        if self.unreleased.try_push(vk).is_err() {
                            log::trace!("unreleased key list full, {vk} stays down");
                        }
                    }
                } else {
                    log::trace!("no virtual key for {:?}", key.code);
                }
                if let Some(c) = map::typed_char(key) {
                    let _ = out.try_push(InputEvent::Character {
                        codepoint: c as u32,
                    });
                }
            }
            KeyEventKind::Release => {
                if !self.reports_release {
                    log::debug!("terminal reports key releases");
                    self.reports_release = true;
                    self.unreleased.clear();
                }
                if let Some(vk) = vk {
                    push_key(&mut out, vk, false);
                }
            }
        }
        out
    }

    fn mouse(&mut self, mouse: &MouseEvent) -> Normalized {
        let mut out = Normalized::new();
        let pos = (mouse.column, mouse.row);

        if let Some((x, y)) = self.pointer {
            let dx = i32::from(pos.0) - i32::from(x);
            let dy = i32::from(pos.1) - i32::from(y);
            if dx != 0 || dy != 0 {
                let _ = out.try_push(InputEvent::Motion { dx, dy });
            }
        }
        self.pointer = Some(pos);

        match mouse.kind {
            MouseEventKind::Down(b) => push_button(&mut out, b, true),
            MouseEventKind::Up(b) => push_button(&mut out, b, false),
            MouseEventKind::ScrollUp => {
                let _ = out.try_push(InputEvent::Wheel { delta: WHEEL_DELTA });
            }
            MouseEventKind::ScrollDown => {
                let _ = out.try_push(InputEvent::Wheel {
                    delta: -WHEEL_DELTA,
                });
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {}
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
                log::trace!("horizontal scroll ignored");
            }
        }
        out
    }
}

fn push_key(out: &mut Normalized, vk: Vk, is_down: bool) {
    let _ = out.try_push(InputEvent::Key {
        code: vk.raw() as u16,
        is_down,
    });
    if let Some(sc) = scan::scan_code(vk) {
        let _ = out.try_push(InputEvent::Scan {
            code: sc.raw(),
            is_down,
        });
    }
}

fn push_button(out: &mut Normalized, button: TermButton, is_down: bool) {
    let button = match button {
        TermButton::Left => MouseButton::Left,
        TermButton::Right => MouseButton::Right,
        TermButton::Middle => MouseButton::Middle,
    };
    let _ = out.try_push(InputEvent::MouseButton {
        index: button.index() as u8,
        is_down,
    });
}
