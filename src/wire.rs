// src/wire.rs
use std::{fmt, str::FromStr};

use fileentry_shared_kernel::{DomainError, FileEntryDescriptor, Result};
use serde::{Deserialize, Serialize};

/// Encoding used when descriptors cross a process boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    #[default]
    Json,
    /// Needs the `yaml` feature.
    Yaml,
}

impl FromStr for WireFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(DomainError::InvalidArgument {
                argument: "format".to_string(),
                reason: format!("unknown wire format '{other}'"),
            }),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// How descriptors are written and read on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    pub format: WireFormat,
    /// Indented output; ignored when decoding.
    pub pretty: bool,
}

impl WireConfig {
    pub fn new(format: WireFormat) -> Self {
        Self { format, pretty: false }
    }

    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

pub fn encode(entries: &[FileEntryDescriptor], config: &WireConfig) -> Result<String> {
    log::trace!("encoding {} entries as {}", entries.len(), config.format);
    match config.format {
        WireFormat::Json if config.pretty => Ok(serde_json::to_string_pretty(entries)?),
        WireFormat::Json => Ok(serde_json::to_string(entries)?),
        WireFormat::Yaml => encode_yaml(entries),
    }
}

/// Directory paths missing their trailing `/` are normalized while decoding.
pub fn decode(input: &str, config: &WireConfig) -> Result<Vec<FileEntryDescriptor>> {
    log::trace!("decoding {} bytes of {}", input.len(), config.format);
    match config.format {
        WireFormat::Json => Ok(serde_json::from_str(input)?),
        WireFormat::Yaml => decode_yaml(input),
    }
}

#[cfg(feature = "yaml")]
fn encode_yaml(entries: &[FileEntryDescriptor]) -> Result<String> {
    Ok(serde_yaml::to_string(entries)?)
}

#[cfg(feature = "yaml")]
fn decode_yaml(input: &str) -> Result<Vec<FileEntryDescriptor>> {
    Ok(serde_yaml::from_str(input)?)
}

#[cfg(not(feature = "yaml"))]
fn encode_yaml(_entries: &[FileEntryDescriptor]) -> Result<String> {
    Err(yaml_disabled())
}

#[cfg(not(feature = "yaml"))]
fn decode_yaml(_input: &str) -> Result<Vec<FileEntryDescriptor>> {
    Err(yaml_disabled())
}

#[cfg(not(feature = "yaml"))]
fn yaml_disabled() -> fileentry_shared_kernel::FileEntryError {
    log::warn!("yaml wire format requested but the `yaml` feature is disabled");
    fileentry_shared_kernel::InfrastructureError::UnsupportedFormat { format: WireFormat::Yaml.to_string() }.into()
}
