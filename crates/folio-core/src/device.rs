//! Device capability estimation.
//!
//! Decorative particle density scales with how capable the host looks. The
//! signals are best-effort: a host that does not expose them is treated as
//! a mid-range device.

/// Memory (GB) at or above which a device counts as high tier.
pub const HIGH_MEMORY_GB: f64 = 8.0;
/// Logical cores at or above which a device counts as high tier.
pub const HIGH_CORES: usize = 8;
/// Memory (GB) at or above which a device counts as medium tier.
pub const MEDIUM_MEMORY_GB: f64 = 4.0;
/// Logical cores at or above which a device counts as medium tier.
pub const MEDIUM_CORES: usize = 4;

/// Viewports narrower than this many columns use the compact particle cap.
pub const COMPACT_WIDTH: u16 = 80;
/// Particle cap for compact viewports.
pub const COMPACT_PARTICLE_CAP: usize = 10;

/// Ambient host signals, read once at start-up.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HostSignals {
    /// Approximate device memory in GB.
    pub memory_gb: Option<f64>,
    /// Logical processor count.
    pub logical_cores: Option<usize>,
}

impl HostSignals {
    pub fn new(memory_gb: Option<f64>, logical_cores: Option<usize>) -> Self {
        Self {
            memory_gb,
            logical_cores,
        }
    }

    /// Whether the host exposed neither signal.
    pub fn is_unknown(&self) -> bool {
        self.memory_gb.is_none() && self.logical_cores.is_none()
    }

    fn meets(&self, memory_gb: f64, cores: usize) -> bool {
        self.memory_gb.is_some_and(|m| m >= memory_gb)
            || self.logical_cores.is_some_and(|c| c >= cores)
    }
}

/// Coarse classification of host capability.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DeviceTier {
    High,
    #[default]
    Medium,
    Low,
}

impl DeviceTier {
    /// Number of hero particles rendered for this tier.
    pub fn particle_count(self) -> usize {
        match self {
            DeviceTier::High => 20,
            DeviceTier::Medium => 15,
            DeviceTier::Low => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeviceTier::High => "high",
            DeviceTier::Medium => "medium",
            DeviceTier::Low => "low",
        }
    }
}

/// Map host signals to a tier. An absent signal never meets a threshold;
/// with both absent the tier is [`DeviceTier::Medium`].
pub fn estimate(signals: &HostSignals) -> DeviceTier {
    if signals.is_unknown() {
        return DeviceTier::Medium;
    }
    if signals.meets(HIGH_MEMORY_GB, HIGH_CORES) {
        DeviceTier::High
    } else if signals.meets(MEDIUM_MEMORY_GB, MEDIUM_CORES) {
        DeviceTier::Medium
    } else {
        DeviceTier::Low
    }
}

/// Particle count for a tier at a given viewport width.
pub fn particle_budget(tier: DeviceTier, width: u16) -> usize {
    let count = tier.particle_count();
    if width < COMPACT_WIDTH {
        count.min(COMPACT_PARTICLE_CAP)
    } else {
        count
    }
}
