//! Terminal device source.
//!
//! A terminal exposes no device list. The keyboard is always present; the
//! mouse only when mouse capture is on. Names come from `$TERM`.

use crate::core::{DeviceError, DeviceSource};
use crate::types::{DeviceInfo, DeviceKind};

#[derive(Debug, Clone)]
pub struct TerminalDevices {
    term: String,
    mouse_capture: bool,
}

impl TerminalDevices {
    pub fn new(term: impl Into<String>, mouse_capture: bool) -> Self {
        Self {
            term: term.into(),
            mouse_capture,
        }
    }

    pub fn from_env(mouse_capture: bool) -> Self {
        let term = std::env::var("TERM").unwrap_or_else(|_| "terminal".to_string());
        Self::new(term, mouse_capture)
    }
}

impl DeviceSource for TerminalDevices {
    fn devices(&mut self) -> Result<Vec<DeviceInfo>, DeviceError> {
        let mut devices = vec![DeviceInfo::new(
            format!("{} keyboard", self.term),
            DeviceKind::Keyboard,
        )];
        if self.mouse_capture {
            devices.push(DeviceInfo::new(
                format!("{} mouse", self.term),
                DeviceKind::Mouse,
            ));
        }
        Ok(devices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_listed_only_with_capture() {
        let mut with = TerminalDevices::new("xterm", true);
        let devices = with.devices().unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "xterm keyboard");
        assert_eq!(devices[1].kind, DeviceKind::Mouse);
        assert_eq!(devices[1].vendor_id, 0);

        let mut without = TerminalDevices::new("xterm", false);
        assert_eq!(without.devices().unwrap().len(), 1);
    }
}
