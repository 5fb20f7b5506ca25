use serde::{Deserialize, Serialize};

pub const TEMPERATURE_MIN: f64 = 0.0;
pub const TEMPERATURE_MAX: f64 = 1.0;
pub const TEMPERATURE_STEP: f64 = 0.1;

pub const MAX_TOKENS_MIN: u32 = 256;
pub const MAX_TOKENS_MAX: u32 = 4096;
pub const MAX_TOKENS_STEP: u32 = 256;

/// Sampling parameters shown next to the chat.
///
/// Values are clamped on every write, so out-of-range input from any code
/// path never reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    temperature: f64,
    max_tokens: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

impl Parameters {
    pub fn new(temperature: f64, max_tokens: u32) -> Self {
        let mut params = Self::default();
        params.set_temperature(temperature);
        params.set_max_tokens(max_tokens);
        params
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// NaN and infinities are ignored; the previous value is kept.
    pub fn set_temperature(&mut self, value: f64) {
        if value.is_finite() {
            self.temperature = value.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX);
        }
    }

    pub fn set_max_tokens(&mut self, value: u32) {
        self.max_tokens = value.clamp(MAX_TOKENS_MIN, MAX_TOKENS_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range() {
        let p = Parameters::default();
        assert!((TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&p.temperature()));
        assert!((MAX_TOKENS_MIN..=MAX_TOKENS_MAX).contains(&p.max_tokens()));
    }

    #[test]
    fn test_clamping() {
        let mut p = Parameters::default();
        p.set_temperature(1.7);
        assert_eq!(p.temperature(), 1.0);
        p.set_temperature(-0.2);
        assert_eq!(p.temperature(), 0.0);
        p.set_max_tokens(10);
        assert_eq!(p.max_tokens(), 256);
        p.set_max_tokens(100_000);
        assert_eq!(p.max_tokens(), 4096);
    }

    #[test]
    fn test_in_range_values_overwrite() {
        let p = Parameters::new(0.3, 2048);
        assert_eq!(p.temperature(), 0.3);
        assert_eq!(p.max_tokens(), 2048);
    }

    #[test]
    fn test_non_finite_temperature_ignored() {
        let mut p = Parameters::new(0.4, 512);
        p.set_temperature(f64::NAN);
        p.set_temperature(f64::INFINITY);
        assert_eq!(p.temperature(), 0.4);
    }
}
