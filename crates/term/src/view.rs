//! MonitorView: maps an `InputContext` into display lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::collections::VecDeque;

use crate::core::InputContext;
use crate::types::{DeviceInfo, Motion};

/// Recent event lines kept for display.
pub const EVENT_LOG_LINES: usize = 8;

/// Host-side values that are not engine state: running totals fed by
/// callbacks and read-and-reset queries, plus the event log.
#[derive(Debug, Clone, Default)]
pub struct MonitorStatus {
    pub tick: u64,
    pub last_motion: Motion,
    pub wheel_total: i64,
    pub text: String,
    pub pointer: Option<(u16, u16)>,
    pub devices: Vec<DeviceInfo>,
    events: VecDeque<String>,
}

impl MonitorStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event line, dropping the oldest past [`EVENT_LOG_LINES`].
    pub fn log(&mut self, line: impl Into<String>) {
        if self.events.len() == EVENT_LOG_LINES {
            self.events.pop_front();
        }
        self.events.push_back(line.into());
    }

    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }

    /// Append typed text, applying backspace.
    pub fn push_text(&mut self, codepoints: &[u32]) {
        for &cp in codepoints {
            match char::from_u32(cp) {
                Some('\u{8}') => {
                    self.text.pop();
                }
                Some('\r') | Some('\n') => self.text.clear(),
                Some(c) if !c.is_control() => self.text.push(c),
                _ => {}
            }
        }
    }

    pub fn clear(&mut self) {
        self.last_motion = Motion::ZERO;
        self.wheel_total = 0;
        self.text.clear();
        self.events.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorView {
    width: u16,
}

impl Default for MonitorView {
    fn default() -> Self {
        Self { width: 80 }
    }
}

impl MonitorView {
    pub fn new(width: u16) -> Self {
        Self { width }
    }

    pub fn render(&self, input: &InputContext, status: &MonitorStatus) -> Vec<String> {
        let state = input.state();
        let mut lines = Vec::with_capacity(16 + EVENT_LOG_LINES);

        lines.push(format!("frame-input monitor  tick {}", status.tick));
        lines.push(String::new());
        lines.push(format!("keys held   {}", join(state.keys_down())));
        lines.push(format!(
            "key edges   down [{}]  up [{}]",
            join(state.keys_went_down()),
            join(state.keys_went_up())
        ));
        lines.push(format!("scan codes  {}", join(state.scans_down())));
        lines.push(format!(
            "buttons     {}",
            join(state.buttons_down().map(|b| b.as_str()))
        ));
        let pointer = match status.pointer {
            Some((x, y)) => format!("({x}, {y})"),
            None => "-".to_string(),
        };
        lines.push(format!(
            "motion      last ({}, {})  pointer {}",
            status.last_motion.dx, status.last_motion.dy, pointer
        ));
        lines.push(format!("wheel       {} notch(es)", status.wheel_total));
        lines.push(format!(
            "text [{}]  {}",
            if input.text_input_enabled() { "on" } else { "off" },
            status.text
        ));
        lines.push(format!(
            "cursor      {}  clip {}",
            if input.cursor_visible() {
                "visible"
            } else {
                "hidden"
            },
            if input.cursor_clipped() { "on" } else { "off" }
        ));
        for device in &status.devices {
            lines.push(format!(
                "device      {} {} ({:04x}:{:04x})",
                device.kind.as_str(),
                device.name,
                device.vendor_id,
                device.product_id
            ));
        }
        lines.push(String::new());
        lines.extend(status.events().map(str::to_string));
        lines.push(String::new());
        lines.push("F2 cursor  F3 clip  F4 warp  F5 text  F6 reset  Esc quit".to_string());

        let width = self.width as usize;
        for line in &mut lines {
            if let Some((cut, _)) = line.char_indices().nth(width) {
                line.truncate(cut);
            }
        }
        lines
    }
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    let parts: Vec<String> = items.map(|i| i.to_string()).collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}
