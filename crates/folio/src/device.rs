//! Host signal probing for the device capability estimate.

use folio_config::DeviceConfig;
use folio_core::HostSignals;
use sysinfo::System;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Read memory and logical core count from the host. Anything the host does
/// not report comes back as `None`.
pub fn probe() -> HostSignals {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.refresh_cpu_all();

    let total_memory = sys.total_memory();
    let memory_gb = (total_memory > 0).then(|| total_memory as f64 / BYTES_PER_GB);

    let cores = match sys.cpus().len() {
        0 => std::thread::available_parallelism().ok().map(|n| n.get()),
        n => Some(n),
    };

    HostSignals::new(memory_gb, cores)
}

/// Apply configured overrides on top of probed signals.
pub fn with_overrides(signals: HostSignals, overrides: &DeviceConfig) -> HostSignals {
    HostSignals {
        memory_gb: overrides.memory_gb.or(signals.memory_gb),
        logical_cores: overrides.cores.or(signals.logical_cores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{DeviceTier, estimate};

    #[test]
    fn test_overrides_replace_probed_values() {
        let probed = HostSignals::new(Some(32.0), Some(16));
        let overrides = DeviceConfig {
            memory_gb: Some(2.0),
            cores: Some(2),
        };
        let signals = with_overrides(probed, &overrides);
        assert_eq!(signals, HostSignals::new(Some(2.0), Some(2)));
        assert_eq!(estimate(&signals), DeviceTier::Low);
    }

    #[test]
    fn test_missing_overrides_keep_probe() {
        let probed = HostSignals::new(None, Some(6));
        let overrides = DeviceConfig {
            memory_gb: Some(4.0),
            cores: None,
        };
        let signals = with_overrides(probed, &overrides);
        assert_eq!(signals, HostSignals::new(Some(4.0), Some(6)));
    }

    #[test]
    fn test_probe_reports_plausible_values() {
        let signals = probe();
        if let Some(memory) = signals.memory_gb {
            assert!(memory > 0.0);
        }
        if let Some(cores) = signals.logical_cores {
            assert!(cores > 0);
        }
    }
}
