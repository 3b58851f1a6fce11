//! Local specs provider
//!
//! Answers `get_computer_specs` from the machine the app runs on.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use sysinfo::{Disks, System};

use crate::specs::{ProviderError, SpecsProvider};
use crate::system::bytes_to_readable;
use crate::system::gpu::detect_gpus;

/// Record produced by the host, in the shape the specs loader decodes
#[derive(Debug, Clone, Serialize)]
pub struct HostSpecs {
    pub os: String,
    pub cpu: String,
    pub ram: String,
    pub storage_used: String,
    pub storage_total: String,
    pub gpu: Vec<String>,
    pub directx: String,
}

/// Collect the computer specs (blocking: reads hardware and runs platform commands)
pub fn collect_host_specs() -> HostSpecs {
    let sys = System::new_all();

    let cpu = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "Unknown CPU".to_string());

    let disks = Disks::new_with_refreshed_list();
    let total: u64 = disks.list().iter().map(|disk| disk.total_space()).sum();
    let available: u64 = disks.list().iter().map(|disk| disk.available_space()).sum();

    HostSpecs {
        os: System::long_os_version().unwrap_or_else(|| "Unknown OS".to_string()),
        cpu,
        ram: bytes_to_readable(sys.total_memory()),
        storage_used: bytes_to_readable(total.saturating_sub(available)),
        storage_total: bytes_to_readable(total),
        gpu: detect_gpus(),
        directx: directx_version(),
    }
}

/// Provider backed by [`collect_host_specs`] on the blocking thread pool
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSpecsProvider;

#[async_trait]
impl SpecsProvider for LocalSpecsProvider {
    async fn get_computer_specs(&self) -> Result<Value, ProviderError> {
        let specs = tokio::task::spawn_blocking(collect_host_specs)
            .await
            .map_err(|e| ProviderError::new(format!("Specs collection task failed: {}", e)))?;

        serde_json::to_value(specs)
            .map_err(|e| ProviderError::new(format!("Could not encode specs: {}", e)))
    }
}

#[cfg(target_os = "windows")]
fn directx_version() -> String {
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    let version = RegKey::predef(HKEY_LOCAL_MACHINE)
        .open_subkey("SOFTWARE\\Microsoft\\DirectX")
        .and_then(|key| key.get_value::<String, _>("Version"));

    match version {
        Ok(version) => directx_label(&version),
        Err(e) => {
            tracing::debug!("Could not read DirectX version: {}", e);
            "Unknown".to_string()
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn directx_version() -> String {
    "n/a".to_string()
}

/// Map the registry DirectX version to a release name
#[cfg(any(target_os = "windows", test))]
fn directx_label(version: &str) -> String {
    match version {
        "4.09.00.0904" => "DirectX 9.0c".to_string(),
        "4.10.0000.0904" => "DirectX 10".to_string(),
        "4.11.0000.0904" => "DirectX 11".to_string(),
        "4.12.0000.0904" => "DirectX 12".to_string(),
        other => format!("Unknown ({})", other),
    }
}
