//! Configuration for tablecodec
//!
//! Centralized configuration with sensible defaults.

/// Default limit for encoded requests and received responses (16 MB)
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Codec configuration
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Largest request body the codec will hand to the transport (bytes)
    pub max_request_size: usize,

    /// Largest response buffer the codec will attempt to parse (bytes)
    pub max_response_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_request_size: DEFAULT_MAX_MESSAGE_SIZE,
            max_response_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

impl CodecConfig {
    /// Create a new config builder
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    /// Set the maximum encoded request size (in bytes)
    pub fn max_request_size(mut self, size: usize) -> Self {
        self.config.max_request_size = size;
        self
    }

    /// Set the maximum accepted response size (in bytes)
    pub fn max_response_size(mut self, size: usize) -> Self {
        self.config.max_response_size = size;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}
