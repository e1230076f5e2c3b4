//! Engine configuration.
//!
//! The engine has exactly one setting: whether text input is accepted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Accept character and IME events. Off by default.
    pub text_input: bool,
}

impl EngineConfig {
    pub fn with_text_input(mut self, enabled: bool) -> Self {
        self.text_input = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_defaults_off() {
        assert!(!EngineConfig::default().text_input);
        assert!(EngineConfig::default().with_text_input(true).text_input);
    }
}
