//! Monitor session: the runner's per-event and per-tick steps.
//!
//! No terminal I/O happens here. The runner polls crossterm, passes events to
//! [`Monitor::handle_event`], calls [`Monitor::tick`] once per tick and draws
//! [`Monitor::render`]. The cursor backend is passed in so tests can use a fake.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crossterm::event::Event;

use crate::config::MonitorConfig;
use crate::core::{CursorBackend, DeviceSource, InputContext};
use crate::normalize::{should_quit, Normalizer};
use crate::term::{MonitorStatus, MonitorView};
use crate::types::{KeyCode, MouseButton, ScanCode};

pub const MAX_DEVICES: usize = 8;
pub const TEXT_PER_TICK: usize = 64;

type SharedStatus = Rc<RefCell<MonitorStatus>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Monitor {
    input: InputContext,
    normalizer: Normalizer,
    status: SharedStatus,
}

impl Monitor {
    /// `reports_release` is whether the terminal is known to send key release
    /// events; when `false` releases are synthesized until one is seen.
    pub fn new(config: &MonitorConfig, reports_release: bool) -> Self {
        let mut input = InputContext::with_config(config.engine);
        let status: SharedStatus = Rc::new(RefCell::new(MonitorStatus::new()));
        subscribe(&mut input, &status);

        Self {
            input,
            normalizer: Normalizer::with_release_reporting(reports_release),
            status,
        }
    }

    pub fn input(&self) -> &InputContext {
        &self.input
    }

    pub fn status(&self) -> Ref<'_, MonitorStatus> {
        self.status.borrow()
    }

    pub fn load_devices(&mut self, source: &mut dyn DeviceSource) {
        let devices = self.input.enumerate_devices(source, MAX_DEVICES);
        self.status.borrow_mut().devices = devices;
    }

    /// Feed one terminal event. Only Ctrl-C quits from here; everything else
    /// waits for the next tick.
    pub fn handle_event(&mut self, event: &Event) -> Flow {
        match event {
            Event::Key(key) if should_quit(key) => return Flow::Quit,
            Event::Paste(text) => {
                for record in Normalizer::paste(text) {
                    self.input.ingest(record);
                }
            }
            Event::FocusLost => {
                self.reset();
                self.status.borrow_mut().log("focus lost: input reset");
            }
            _ => {
                for record in self.normalizer.normalize(event) {
                    self.input.ingest(record);
                }
            }
        }
        Flow::Continue
    }

    /// Commit, act on function keys, collect read-and-reset values, then
    /// queue synthetic releases for the next tick.
    pub fn tick(&mut self, cursor: &mut dyn CursorBackend, viewport: (u16, u16)) -> Flow {
        self.input.commit();

        if self.input.key_went_down(KeyCode::ESCAPE) {
            return Flow::Quit;
        }
        self.handle_function_keys(cursor, viewport);

        {
            let mut s = self.status.borrow_mut();
            s.tick += 1;
            let motion = self.input.consume_motion();
            if !motion.is_zero() {
                s.last_motion = motion;
            }
            s.push_text(&self.input.drain_characters(TEXT_PER_TICK));
            let composed: Vec<u32> = self
                .input
                .drain_composed_text(TEXT_PER_TICK)
                .into_iter()
                .map(u32::from)
                .collect();
            s.push_text(&composed);
            s.pointer = self.normalizer.pointer_position();
        }

        // Taps on terminals without release events come up next tick.
        for record in self.normalizer.synthetic_releases() {
            self.input.ingest(record);
        }
        Flow::Continue
    }

    pub fn render(&self, width: u16) -> Vec<String> {
        MonitorView::new(width).render(&self.input, &self.status.borrow())
    }

    /// Drop everything uncommitted and queue releases for every committed
    /// key, scan code and button, so nothing stays held once the terminal
    /// stops reporting (focus loss) or the user asks for a reset.
    pub fn reset(&mut self) {
        self.input.reset_all();

        let state = self.input.state();
        let keys: Vec<KeyCode> = state.keys_down().collect();
        let scans: Vec<ScanCode> = state.scans_down().collect();
        let buttons: Vec<MouseButton> = state.buttons_down().collect();

        for key in keys {
            self.input.record_key(key, false);
        }
        for scan in scans {
            self.input.record_scan_transition(scan.raw(), false);
        }
        for button in buttons {
            self.input.record_button(button, false);
        }
        self.normalizer.reset();
    }

    fn handle_function_keys(&mut self, cursor: &mut dyn CursorBackend, viewport: (u16, u16)) {
        if self.input.key_went_down(KeyCode::F2) {
            let visible = !self.input.cursor_visible();
            if let Err(e) = self.input.set_cursor_visible(cursor, visible) {
                self.status.borrow_mut().log(format!("cursor: {e}"));
            }
        }
        if self.input.key_went_down(KeyCode::F3) {
            let clip = !self.input.cursor_clipped();
            if let Err(e) = self.input.clip_cursor(cursor, clip) {
                self.status.borrow_mut().log(format!("clip: {e}"));
            }
        }
        if self.input.key_went_down(KeyCode::F4) {
            let (x, y) = (i32::from(viewport.0 / 2), i32::from(viewport.1 / 2));
            let line = match self.input.warp_cursor(cursor, x, y) {
                Ok(()) => format!("cursor warped to ({x}, {y})"),
                Err(e) => format!("warp: {e}"),
            };
            self.status.borrow_mut().log(line);
        }
        if self.input.key_went_down(KeyCode::F5) {
            let enabled = !self.input.text_input_enabled();
            self.input.set_text_input_enabled(enabled);
            self.status
                .borrow_mut()
                .log(format!("text input {}", if enabled { "on" } else { "off" }));
        }
        if self.input.key_went_down(KeyCode::F6) {
            self.reset();
            let mut s = self.status.borrow_mut();
            s.clear();
            s.log("input reset");
        }
    }
}

fn subscribe(input: &mut InputContext, status: &SharedStatus) {
    let s = Rc::clone(status);
    input.on_key_down(move |key, state| {
        let held = state.keys_down().count();
        s.borrow_mut().log(format!("key down {key} ({held} held)"));
    });
    let s = Rc::clone(status);
    input.on_key_up(move |key, _| s.borrow_mut().log(format!("key up {key}")));
    let s = Rc::clone(status);
    input.on_button_down(move |button, _| {
        s.borrow_mut().log(format!("button down {}", button.as_str()));
    });
    let s = Rc::clone(status);
    input.on_button_up(move |button, _| {
        s.borrow_mut().log(format!("button up {}", button.as_str()));
    });
    let s = Rc::clone(status);
    input.on_wheel(move |notches| {
        let mut s = s.borrow_mut();
        s.wheel_total += i64::from(notches);
        s.log(format!("wheel {notches:+}"));
    });
}
