//! Computer specs pipeline
//!
//! The provider, display sink and diagnostic channel the loader talks to, plus the
//! snapshot and fetch state it produces.

pub mod loader;

pub use loader::{LoaderConfig, SpecsLoader};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Placeholder shown in every slot until the specs arrive
pub const PLACEHOLDER: &str = "Loading...";

/// Machine information snapshot returned by the specs provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecsResult {
    pub os: String,
    pub cpu: String,
    #[serde(rename = "ram")]
    pub ram_description: String,
    pub storage_used: String,
    pub storage_total: String,
    #[serde(rename = "directx")]
    pub directx_version: String,
    #[serde(rename = "gpu")]
    pub gpu_names: Vec<String>,
}

impl SpecsResult {
    /// Decode a provider payload, rejecting records with missing or mistyped fields.
    pub fn from_payload(payload: Value) -> Result<Self, LoadError> {
        serde_json::from_value(payload).map_err(|e| LoadError::MalformedResult(e.to_string()))
    }
}

/// Named display slots of the specs panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecSlot {
    Os,
    Cpu,
    Ram,
    Storage,
    DirectX,
    Gpu,
}

impl SpecSlot {
    pub const ALL: [SpecSlot; 6] = [
        SpecSlot::Os,
        SpecSlot::Cpu,
        SpecSlot::Ram,
        SpecSlot::Storage,
        SpecSlot::DirectX,
        SpecSlot::Gpu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SpecSlot::Os => "Operating System",
            SpecSlot::Cpu => "Processor",
            SpecSlot::Ram => "Memory",
            SpecSlot::Storage => "Storage",
            SpecSlot::DirectX => "DirectX",
            SpecSlot::Gpu => "Graphics",
        }
    }
}

/// Text written into the display slots, all at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecsDisplay {
    pub os: String,
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub directx: String,
    pub gpu: String,
}

impl SpecsDisplay {
    pub fn placeholder() -> Self {
        Self {
            os: PLACEHOLDER.to_string(),
            cpu: PLACEHOLDER.to_string(),
            ram: PLACEHOLDER.to_string(),
            storage: PLACEHOLDER.to_string(),
            directx: PLACEHOLDER.to_string(),
            gpu: PLACEHOLDER.to_string(),
        }
    }

    pub fn slot(&self, slot: SpecSlot) -> &str {
        match slot {
            SpecSlot::Os => &self.os,
            SpecSlot::Cpu => &self.cpu,
            SpecSlot::Ram => &self.ram,
            SpecSlot::Storage => &self.storage,
            SpecSlot::DirectX => &self.directx,
            SpecSlot::Gpu => &self.gpu,
        }
    }
}

impl Default for SpecsDisplay {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl From<&SpecsResult> for SpecsDisplay {
    fn from(specs: &SpecsResult) -> Self {
        Self {
            os: specs.os.clone(),
            cpu: specs.cpu.clone(),
            ram: specs.ram_description.clone(),
            storage: format!("{} / {}", specs.storage_used, specs.storage_total),
            directx: specs.directx_version.clone(),
            gpu: specs.gpu_names.join(", "),
        }
    }
}

/// Progress of the one specs fetch of a UI lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Pending,
    Succeeded(SpecsResult),
    Failed(String),
}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn result(&self) -> Option<&SpecsResult> {
        match self {
            FetchState::Succeeded(specs) => Some(specs),
            _ => None,
        }
    }
}

/// Opaque failure of the specs provider call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProviderError(String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Why a specs fetch failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Specs provider unreachable: {0}")]
    ProviderUnavailable(String),
    #[error("Specs provider unreachable: no response within {0:?}")]
    Timeout(Duration),
    #[error("Specs provider returned malformed data: {0}")]
    MalformedResult(String),
}

impl LoadError {
    /// Only a refused call is retried. A timed-out call may still be collecting on the
    /// host, and malformed data will not change.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LoadError::ProviderUnavailable(_))
    }
}

/// Host capability that answers `get_computer_specs` with a JSON record
#[async_trait]
pub trait SpecsProvider: Send + Sync {
    async fn get_computer_specs(&self) -> Result<Value, ProviderError>;
}

/// Presentation-side slots for os, cpu, ram, storage, directx and gpu
pub trait DisplaySink {
    fn present(&mut self, display: SpecsDisplay);
}

/// Out-of-band failure reporting, separate from the display slots
pub trait DiagnosticChannel {
    fn report(&mut self, message: &str);
}

/// Diagnostic channel backed by the application log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticChannel for LogDiagnostics {
    fn report(&mut self, message: &str) {
        tracing::error!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_formats_storage_and_gpus() {
        let specs = SpecsResult {
            os: "Linux".to_string(),
            cpu: "X9".to_string(),
            ram_description: "16 GB".to_string(),
            storage_used: "120 GB".to_string(),
            storage_total: "500 GB".to_string(),
            directx_version: "n/a".to_string(),
            gpu_names: vec!["GPU-A".to_string(), "GPU-B".to_string()],
        };
        let display = SpecsDisplay::from(&specs);
        assert_eq!(display.storage, "120 GB / 500 GB");
        assert_eq!(display.gpu, "GPU-A, GPU-B");
        assert_eq!(display.slot(SpecSlot::Ram), "16 GB");
    }

    #[test]
    fn test_payload_uses_host_field_names() {
        let payload = json!({
            "os": "Windows 11",
            "cpu": "Ryzen",
            "ram": "32 GB",
            "storage_used": "1 TB",
            "storage_total": "2 TB",
            "directx": "DirectX 12",
            "gpu": ["RTX (8 GB)"]
        });
        let specs = SpecsResult::from_payload(payload).unwrap();
        assert_eq!(specs.ram_description, "32 GB");
        assert_eq!(specs.directx_version, "DirectX 12");
        assert_eq!(specs.gpu_names, vec!["RTX (8 GB)".to_string()]);
    }

    #[test]
    fn test_payload_missing_field_is_malformed() {
        let err = SpecsResult::from_payload(json!({ "os": "Linux" })).unwrap_err();
        assert!(matches!(err, LoadError::MalformedResult(_)));
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_fetch_state_defaults_to_pending() {
        let state = FetchState::default();
        assert!(state.is_pending());
        assert!(state.result().is_none());
    }
}
