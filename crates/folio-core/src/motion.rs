//! Reduced-motion preference.

/// Environment variables that request reduced motion when set to a truthy value.
pub const REDUCED_MOTION_VARS: [&str; 2] = ["FOLIO_REDUCED_MOTION", "REDUCE_MOTION"];

/// Presence of this variable alone requests reduced motion.
pub const NO_MOTION_VAR: &str = "NO_MOTION";

/// Gate consulted by every animation-bearing view before it schedules motion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MotionGate {
    reduced: bool,
}

impl MotionGate {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    /// Resolve the preference: an explicit override wins, then the host
    /// environment, then motion is allowed.
    pub fn resolve<F>(override_value: Option<bool>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(reduced) = override_value {
            return Self::new(reduced);
        }
        let requested = REDUCED_MOTION_VARS
            .iter()
            .any(|var| env(var).is_some_and(|v| is_truthy(&v)))
            || env(NO_MOTION_VAR).is_some();
        Self::new(requested)
    }

    /// Resolve against the process environment.
    pub fn from_env(override_value: Option<bool>) -> Self {
        Self::resolve(override_value, |key| std::env::var(key).ok())
    }

    pub fn reduced_motion(self) -> bool {
        self.reduced
    }

    pub fn allows_motion(self) -> bool {
        !self.reduced
    }

    /// The particle count a view may request. Always zero under reduced motion.
    pub fn particle_count(self, requested: usize) -> usize {
        if self.reduced { 0 } else { requested }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "reduce"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_default_allows_motion() {
        let gate = MotionGate::resolve(None, env_with(&[]));
        assert!(gate.allows_motion());
        assert_eq!(gate.particle_count(15), 15);
    }

    #[test]
    fn test_env_requests_reduced_motion() {
        let gate = MotionGate::resolve(None, env_with(&[("FOLIO_REDUCED_MOTION", "1")]));
        assert!(gate.reduced_motion());
        let gate = MotionGate::resolve(None, env_with(&[("REDUCE_MOTION", "reduce")]));
        assert!(gate.reduced_motion());
        let gate = MotionGate::resolve(None, env_with(&[("NO_MOTION", "")]));
        assert!(gate.reduced_motion());
    }

    #[test]
    fn test_falsy_env_value_is_ignored() {
        let gate = MotionGate::resolve(None, env_with(&[("REDUCE_MOTION", "0")]));
        assert!(gate.allows_motion());
    }

    #[test]
    fn test_override_beats_environment() {
        let gate = MotionGate::resolve(Some(false), env_with(&[("NO_MOTION", "1")]));
        assert!(gate.allows_motion());
        let gate = MotionGate::resolve(Some(true), env_with(&[]));
        assert!(gate.reduced_motion());
    }

    #[test]
    fn test_reduced_motion_zeroes_particles() {
        let gate = MotionGate::new(true);
        assert_eq!(gate.particle_count(20), 0);
    }
}
