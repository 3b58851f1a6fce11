//! GPU detection
//!
//! Lists the graphics adapters of the host (best effort), formatted as
//! `"<name> (<vram>)"` when the dedicated memory is known.

#[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
use std::process::Command;

#[cfg(any(target_os = "windows", target_os = "macos", test))]
use crate::system::bytes_to_readable;

/// Detect graphics adapters (best effort, empty when nothing is found)
pub fn detect_gpus() -> Vec<String> {
    #[cfg(target_os = "windows")]
    {
        return detect_gpus_windows();
    }

    #[cfg(target_os = "macos")]
    {
        return run("system_profiler", &["SPDisplaysDataType"])
            .map(|stdout| parse_system_profiler(&stdout))
            .unwrap_or_default();
    }

    #[cfg(target_os = "linux")]
    {
        return run("lspci", &[])
            .map(|stdout| parse_lspci(&stdout))
            .unwrap_or_default();
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        Vec::new()
    }
}

#[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
fn run(program: &str, args: &[&str]) -> Option<String> {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("Could not run {}: {}", program, e);
            return None;
        }
    };

    if !output.status.success() {
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(any(target_os = "windows", target_os = "macos", test))]
fn with_vram(name: &str, vram_bytes: Option<u64>) -> String {
    match vram_bytes {
        Some(bytes) if bytes > 0 => format!("{} ({})", name, bytes_to_readable(bytes)),
        _ => name.to_string(),
    }
}

// =============================================================================
// Windows
// =============================================================================

/// Software rasterizers Windows reports next to the real hardware
#[cfg(any(target_os = "windows", test))]
const SOFTWARE_ADAPTERS: [&str; 2] = ["Microsoft Basic Display", "Microsoft Basic Render"];

/// Hardware adapter with dedicated memory, as reported by one tool
#[cfg(any(target_os = "windows", test))]
#[derive(Debug, Clone, PartialEq, Eq)]
struct Adapter {
    name: String,
    vram_bytes: u64,
}

#[cfg(target_os = "windows")]
fn detect_gpus_windows() -> Vec<String> {
    let nvidia = run(
        "nvidia-smi",
        &["--query-gpu=name,memory.total", "--format=csv,noheader,nounits"],
    )
    .map(|stdout| parse_nvidia_smi(&stdout))
    .unwrap_or_default();

    let wmic = run(
        "wmic",
        &["path", "Win32_VideoController", "get", "Name,AdapterRAM", "/Format:List"],
    )
    .map(|stdout| parse_wmic(&stdout))
    .unwrap_or_default();

    merge_adapters(nvidia, wmic)
}

/// nvidia-smi entries first (wmic caps `AdapterRAM` at 4 GB), then every
/// other adapter wmic knows about
#[cfg(any(target_os = "windows", test))]
fn merge_adapters(nvidia: Vec<Adapter>, wmic: Vec<Adapter>) -> Vec<String> {
    let mut merged: Vec<Adapter> = nvidia;
    for adapter in wmic {
        let known = merged
            .iter()
            .any(|existing| existing.name.eq_ignore_ascii_case(&adapter.name));
        if !known {
            merged.push(adapter);
        }
    }

    merged
        .iter()
        .map(|adapter| with_vram(&adapter.name, Some(adapter.vram_bytes)))
        .collect()
}

/// Parse `name, memory.total` rows (memory in MiB)
#[cfg(any(target_os = "windows", test))]
fn parse_nvidia_smi(stdout: &str) -> Vec<Adapter> {
    stdout
        .lines()
        .filter_map(|line| {
            let (name, total_mb) = line.split_once(',')?;
            let name = name.trim();
            let total_mb = total_mb.trim().parse::<u64>().ok()?;
            if name.is_empty() || total_mb == 0 {
                return None;
            }
            Some(Adapter {
                name: name.to_string(),
                vram_bytes: total_mb * 1024 * 1024,
            })
        })
        .collect()
}

/// Parse `AdapterRAM=` / `Name=` blocks, one block per adapter. Software
/// adapters and adapters without dedicated memory are skipped.
#[cfg(any(target_os = "windows", test))]
fn parse_wmic(stdout: &str) -> Vec<Adapter> {
    let mut adapters = Vec::new();
    let mut name: Option<String> = None;
    let mut adapter_ram: Option<u64> = None;

    let mut flush = |name: &mut Option<String>, adapter_ram: &mut Option<u64>| {
        let (Some(name), Some(vram_bytes)) = (name.take(), adapter_ram.take()) else {
            return;
        };
        let software = SOFTWARE_ADAPTERS
            .iter()
            .any(|prefix| name.starts_with(*prefix));
        if vram_bytes == 0 || software {
            tracing::debug!("Skipping adapter without dedicated memory: {}", name);
            return;
        }
        adapters.push(Adapter { name, vram_bytes });
    };

    for line in stdout.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut name, &mut adapter_ram);
        } else if let Some(value) = line.strip_prefix("Name=") {
            let value = value.trim();
            if !value.is_empty() {
                name = Some(value.to_string());
            }
        } else if let Some(value) = line.strip_prefix("AdapterRAM=") {
            adapter_ram = value.trim().parse::<u64>().ok();
        }
    }
    flush(&mut name, &mut adapter_ram);

    adapters
}

// =============================================================================
// macOS
// =============================================================================

/// Parse `Chipset Model:` entries and their `VRAM ...:` lines
#[cfg(any(target_os = "macos", test))]
fn parse_system_profiler(stdout: &str) -> Vec<String> {
    let mut adapters: Vec<(String, Option<u64>)> = Vec::new();

    for line in stdout.lines() {
        let trimmed = line.trim();

        if let Some(name) = trimmed.strip_prefix("Chipset Model:") {
            let name = name.trim();
            if !name.is_empty() {
                adapters.push((name.to_string(), None));
            }
            continue;
        }

        // "VRAM (Total): 4 GB" or "VRAM (Dynamic, Max): 1536 MB"
        if trimmed.starts_with("VRAM") {
            let Some((_, amount)) = trimmed.split_once("):") else {
                continue;
            };
            let mut parts = amount.split_whitespace();
            let (Some(value), Some(unit)) = (parts.next(), parts.next()) else {
                continue;
            };
            let Ok(value) = value.parse::<u64>() else {
                continue;
            };
            let bytes = match unit.to_uppercase().as_str() {
                "GB" => value * 1024 * 1024 * 1024,
                _ => value * 1024 * 1024,
            };
            if let Some(last) = adapters.last_mut() {
                last.1 = Some(bytes);
            }
        }
    }

    adapters
        .into_iter()
        .map(|(name, vram)| with_vram(&name, vram))
        .collect()
}

// =============================================================================
// Linux
// =============================================================================

/// Parse display controllers out of `lspci` output
#[cfg(any(target_os = "linux", test))]
fn parse_lspci(stdout: &str) -> Vec<String> {
    const CLASSES: [&str; 3] = [
        "VGA compatible controller:",
        "3D controller:",
        "Display controller:",
    ];

    stdout
        .lines()
        .filter_map(|line| {
            CLASSES.iter().find_map(|class| {
                let (_, name) = line.split_once(class)?;
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_string())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(name: &str, gb: u64) -> Adapter {
        Adapter {
            name: name.to_string(),
            vram_bytes: gb * 1024 * 1024 * 1024,
        }
    }

    #[test]
    fn test_parse_nvidia_smi() {
        let stdout = "NVIDIA GeForce RTX 3070, 8192\nNVIDIA GeForce GTX 1050, 4096\nNVIDIA Broken, [N/A]\n\n";
        assert_eq!(
            parse_nvidia_smi(stdout),
            vec![
                adapter("NVIDIA GeForce RTX 3070", 8),
                adapter("NVIDIA GeForce GTX 1050", 4),
            ]
        );
    }

    #[test]
    fn test_parse_wmic_skips_software_and_shared_memory_adapters() {
        let stdout = "\r\n\r\nAdapterRAM=4294967296\r\nName=AMD Radeon RX 580\r\n\r\n\r\n\
AdapterRAM=0\r\nName=Microsoft Basic Display Adapter\r\n\r\n\r\n\
AdapterRAM=\r\nName=Intel(R) UHD Graphics 630\r\n\r\n\r\n\
AdapterRAM=1073741824\r\nName=Microsoft Basic Render Driver\r\n\r\n\r\n\
AdapterRAM=0\r\nName=Virtual Display Adapter\r\n\r\n";
        assert_eq!(parse_wmic(stdout), vec![adapter("AMD Radeon RX 580", 4)]);
    }

    #[test]
    fn test_merge_keeps_nvidia_and_other_vendors() {
        let nvidia = vec![adapter("NVIDIA GeForce RTX 3070", 8)];
        let wmic = vec![
            adapter("NVIDIA GeForce RTX 3070", 4),
            adapter("AMD Radeon RX 580", 4),
        ];
        assert_eq!(
            merge_adapters(nvidia, wmic),
            vec![
                "NVIDIA GeForce RTX 3070 (8 GB)".to_string(),
                "AMD Radeon RX 580 (4 GB)".to_string(),
            ]
        );
    }

    #[test]
    fn test_merge_without_nvidia_smi_uses_wmic() {
        let wmic = vec![adapter("AMD Radeon RX 580", 4)];
        assert_eq!(
            merge_adapters(Vec::new(), wmic),
            vec!["AMD Radeon RX 580 (4 GB)".to_string()]
        );
        assert!(merge_adapters(Vec::new(), Vec::new()).is_empty());
    }

    #[test]
    fn test_parse_system_profiler() {
        let stdout = "Graphics/Displays:\n\n    Intel Iris Plus:\n\n      Chipset Model: Intel Iris Plus Graphics 655\n      VRAM (Dynamic, Max): 1536 MB\n\n    Radeon:\n\n      Chipset Model: AMD Radeon Pro 5500M\n      VRAM (Total): 4 GB\n\n    Apple M2:\n\n      Chipset Model: Apple M2\n";
        assert_eq!(
            parse_system_profiler(stdout),
            vec![
                "Intel Iris Plus Graphics 655 (2 GB)".to_string(),
                "AMD Radeon Pro 5500M (4 GB)".to_string(),
                "Apple M2".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_lspci() {
        let stdout = "00:00.0 Host bridge: Intel Corporation Device 9b61\n00:02.0 VGA compatible controller: Intel Corporation UHD Graphics\n01:00.0 3D controller: NVIDIA Corporation TU117M\n";
        assert_eq!(
            parse_lspci(stdout),
            vec![
                "Intel Corporation UHD Graphics".to_string(),
                "NVIDIA Corporation TU117M".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_vram_keeps_bare_name() {
        assert_eq!(with_vram("GPU-A", None), "GPU-A");
        assert_eq!(with_vram("GPU-A", Some(0)), "GPU-A");
        assert_eq!(with_vram("GPU-B", Some(8 * 1024 * 1024 * 1024)), "GPU-B (8 GB)");
    }
}
