//! Device enumeration pass-through.

use crate::error::DeviceError;
use crate::types::DeviceInfo;

/// Platform collaborator that lists attached input devices.
pub trait DeviceSource {
    fn devices(&mut self) -> Result<Vec<DeviceInfo>, DeviceError>;
}

/// A fixed device list.
#[derive(Debug, Clone, Default)]
pub struct StaticDevices(pub Vec<DeviceInfo>);

impl DeviceSource for StaticDevices {
    fn devices(&mut self) -> Result<Vec<DeviceInfo>, DeviceError> {
        Ok(self.0.clone())
    }
}

/// Ask `source` for its devices and keep at most `max` of them.
///
/// A failing source yields an empty list; callers detect exhaustion by comparing
/// the length with `max`.
pub fn enumerate_devices(source: &mut dyn DeviceSource, max: usize) -> Vec<DeviceInfo> {
    match source.devices() {
        Ok(mut devices) => {
            devices.truncate(max);
            devices
        }
        Err(e) => {
            log::warn!("device enumeration failed: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeviceKind;

    struct Failing;

    impl DeviceSource for Failing {
        fn devices(&mut self) -> Result<Vec<DeviceInfo>, DeviceError> {
            Err(DeviceError::enumeration("access denied"))
        }
    }

    fn three_devices() -> StaticDevices {
        StaticDevices(vec![
            DeviceInfo::new("kbd", DeviceKind::Keyboard).with_ids(0x046D, 0xC31C),
            DeviceInfo::new("mouse", DeviceKind::Mouse).with_ids(0x046D, 0xC077),
            DeviceInfo::new("pad", DeviceKind::Hid),
        ])
    }

    #[test]
    fn test_enumeration_is_bounded() {
        let mut source = three_devices();
        let devices = enumerate_devices(&mut source, 2);
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].vendor_id, 0x046D);
        assert_eq!(devices[1].product_id, 0xC077);
    }

    #[test]
    fn test_short_list_returns_fewer_than_requested() {
        let mut source = three_devices();
        assert_eq!(enumerate_devices(&mut source, 16).len(), 3);
        assert!(enumerate_devices(&mut source, 0).is_empty());
    }

    #[test]
    fn test_failing_source_yields_empty_list() {
        assert!(enumerate_devices(&mut Failing, 8).is_empty());
    }
}
