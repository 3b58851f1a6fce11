//! System utilities
//!
//! Host-side collection of the computer specs: OS, CPU, memory, storage, DirectX and GPUs.

pub mod gpu;
pub mod host;

/// Round a byte count to the largest binary unit that is at least 1 (e.g. "16 GB").
pub fn bytes_to_readable(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["TB", "GB", "MB", "KB"];

    let mut scale = 1024f64.powi(UNITS.len() as i32);
    for unit in UNITS {
        let value = bytes as f64 / scale;
        if value >= 1.0 {
            return format!("{} {}", value.round() as u64, unit);
        }
        scale /= 1024.0;
    }
    format!("{} B", bytes)
}
