//! Error types for the collaborator seams.
//!
//! The state engine itself never fails. Errors only come back from the
//! platform-facing collaborators the context delegates to: cursor backends
//! and device sources.

use thiserror::Error;

/// Failure reported by, or about, a [`CursorBackend`](crate::CursorBackend).
#[derive(Error, Debug)]
pub enum CursorError {
    /// The backend cannot perform this operation at all
    #[error("Cursor operation not supported by this backend: {operation}")]
    Unsupported { operation: &'static str },

    /// Warp target cannot be expressed in the backend's coordinate space
    #[error("Cursor position out of bounds: ({x}, {y})")]
    OutOfBounds { x: i32, y: i32 },

    /// The display counter never crossed the visibility threshold
    #[error("Cursor display counter did not reach the {wanted} state after {steps} steps")]
    Unresponsive { wanted: &'static str, steps: u32 },

    #[error("Cursor backend I/O failed")]
    Io(#[from] std::io::Error),
}

/// Failure reported by a [`DeviceSource`](crate::DeviceSource).
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The platform refused or failed the device list request
    #[error("Device enumeration failed: {message}")]
    Enumeration { message: String },

    #[error("Device enumeration I/O failed")]
    Io(#[from] std::io::Error),
}

impl DeviceError {
    pub fn enumeration(message: impl Into<String>) -> Self {
        Self::Enumeration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = CursorError::Unsupported {
            operation: "clip",
        };
        assert_eq!(
            e.to_string(),
            "Cursor operation not supported by this backend: clip"
        );

        let e = DeviceError::enumeration("no devices");
        assert_eq!(e.to_string(), "Device enumeration failed: no devices");
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let e: CursorError = io.into();
        assert!(matches!(e, CursorError::Io(_)));
    }
}
