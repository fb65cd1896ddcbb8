//! Aggregator configuration resolved once at startup.
//!
//! # Responsibility
//! - Name the card backend and the reference batch size.
//! - Parse and validate configuration documents.
//!
//! # Invariants
//! - `backend` is a trimmed, lowercase, non-empty id.
//! - `reference_slots` is within `1..=MAX_REFERENCE_SLOTS`.
//! - Unregistered backend ids are accepted here; the backend registry falls
//!   back to the placeholder backend for them.

use crate::backend::BACKEND_TOOLKIT;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reference inputs offered by the form unless configured otherwise.
pub const DEFAULT_REFERENCE_SLOTS: usize = 3;
pub const MAX_REFERENCE_SLOTS: usize = 10;

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    EmptyBackend,
    InvalidReferenceSlots(usize),
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBackend => write!(f, "backend id cannot be empty"),
            Self::InvalidReferenceSlots(value) => write!(
                f,
                "reference_slots must be within 1..={MAX_REFERENCE_SLOTS}, got {value}"
            ),
            Self::Parse(err) => write!(f, "invalid aggregator config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::EmptyBackend | Self::InvalidReferenceSlots(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Startup configuration for the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregatorConfig {
    /// Backend id looked up in the backend registry.
    pub backend: String,
    pub reference_slots: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            backend: BACKEND_TOOLKIT.to_string(),
            reference_slots: DEFAULT_REFERENCE_SLOTS,
        }
    }
}

impl AggregatorConfig {
    /// Builds a validated config from a backend id and an optional slot count.
    ///
    /// The id is trimmed and lowercased; `None` slots take the default.
    pub fn new(backend: &str, reference_slots: Option<usize>) -> Result<Self, ConfigError> {
        let config = Self {
            backend: normalize_backend_id(backend),
            reference_slots: reference_slots.unwrap_or(DEFAULT_REFERENCE_SLOTS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON config document.
    ///
    /// Missing keys take default values; unknown keys are rejected.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.backend = normalize_backend_id(&config.backend);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.is_empty() {
            return Err(ConfigError::EmptyBackend);
        }
        if self.reference_slots == 0 || self.reference_slots > MAX_REFERENCE_SLOTS {
            return Err(ConfigError::InvalidReferenceSlots(self.reference_slots));
        }
        Ok(())
    }
}

fn normalize_backend_id(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}
