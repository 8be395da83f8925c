use thingsml_senml::NormalizedPack;

use crate::{DecodeError, Format, Pack, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Wire format of incoming payloads
    pub format: Format,

    /// Largest accepted payload in bytes, unlimited when `None`
    pub max_payload_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::Json,
            max_payload_size: None,
        }
    }
}

impl Config {
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_max_payload_size(mut self, limit: usize) -> Self {
        self.max_payload_size = Some(limit);
        self
    }
}

/// Decodes and normalizes payloads of one configured format
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: Config,
}

impl Decoder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decode `bytes` into a pack without normalizing it
    pub fn decode(&self, bytes: &[u8]) -> std::result::Result<Pack, DecodeError> {
        if let Some(limit) = self.config.max_payload_size {
            if bytes.len() > limit {
                return Err(DecodeError::PayloadTooLarge {
                    size: bytes.len(),
                    limit,
                });
            }
        }

        self.config.format.decode(bytes)
    }

    /// Decode `bytes` and resolve the pack into absolute records
    pub fn normalize(&self, bytes: &[u8]) -> Result<NormalizedPack> {
        let pack = self.decode(bytes)?;
        crate::normalize(&pack)
    }
}
