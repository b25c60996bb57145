//! Decoder configuration.

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_MAX_UNCOMPRESSED_LEN;

/// Limits applied when unwrapping envelopes from untrusted sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    /// Largest declared uncompressed length the decoder will allocate for.
    pub max_uncompressed_len: usize,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            max_uncompressed_len: DEFAULT_MAX_UNCOMPRESSED_LEN,
        }
    }
}

impl EnvelopeConfig {
    /// Config with a custom allocation ceiling.
    pub fn with_max_uncompressed_len(max_uncompressed_len: usize) -> Self {
        Self {
            max_uncompressed_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let config = EnvelopeConfig::default();
        assert_eq!(config.max_uncompressed_len, DEFAULT_MAX_UNCOMPRESSED_LEN);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EnvelopeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EnvelopeConfig::default());

        let config: EnvelopeConfig =
            serde_json::from_str(r#"{"max_uncompressed_len": 1024}"#).unwrap();
        assert_eq!(config.max_uncompressed_len, 1024);
    }
}
