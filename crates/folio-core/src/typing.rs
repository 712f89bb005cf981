//! Typed-text reveal for the hero title.

use std::time::{Duration, Instant};

use crate::motion::MotionGate;
use crate::timer::Interval;

/// Delay between revealed characters.
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(100);

/// Reveals a target string one character at a time.
///
/// The revealed length only grows, stops at the length of the target and
/// never moves again once the revealer is complete or cancelled.
#[derive(Debug, Clone)]
pub struct TextRevealer {
    target: String,
    char_count: usize,
    revealed: usize,
    cancelled: bool,
}

impl TextRevealer {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let char_count = target.chars().count();
        Self {
            target,
            char_count,
            revealed: 0,
            cancelled: false,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of characters currently revealed.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// The revealed prefix of the target.
    pub fn visible(&self) -> &str {
        prefix(&self.target, self.revealed)
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.char_count
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Reveal one more character. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        if self.cancelled || self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    /// Apply several ticks, returning how many actually advanced.
    pub fn advance(&mut self, ticks: u32) -> usize {
        let mut advanced = 0;
        for _ in 0..ticks {
            if !self.tick() {
                break;
            }
            advanced += 1;
        }
        advanced
    }

    /// Show the whole target at once.
    pub fn reveal_instantly(&mut self) {
        if !self.cancelled {
            self.revealed = self.char_count;
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Every state the revealer passes through, from the empty prefix to the
    /// full target.
    pub fn steps(&self) -> RevealSteps<'_> {
        RevealSteps {
            target: &self.target,
            next: Some(0),
            total: self.char_count,
        }
    }
}

/// Iterator over successive prefixes of a target string.
#[derive(Debug, Clone)]
pub struct RevealSteps<'a> {
    target: &'a str,
    next: Option<usize>,
    total: usize,
}

impl<'a> Iterator for RevealSteps<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.next?;
        self.next = (len < self.total).then_some(len + 1);
        Some(prefix(self.target, len))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |n| self.total - n + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RevealSteps<'_> {}

fn prefix(text: &str, chars: usize) -> &str {
    let end = text
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(idx, _)| idx);
    &text[..end]
}

/// A [`TextRevealer`] paired with the interval that drives it.
///
/// The interval is dropped as soon as the text is complete, and
/// [`TypingEffect::cancel`] tears it down early when the owning view goes
/// away. Under reduced motion no interval is scheduled at all.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    revealer: TextRevealer,
    interval: Option<Interval>,
}

impl TypingEffect {
    pub fn mount(target: impl Into<String>, delay: Duration, gate: MotionGate, now: Instant) -> Self {
        let mut revealer = TextRevealer::new(target);
        let interval = if gate.allows_motion() && !revealer.is_complete() {
            Some(Interval::start(delay, now))
        } else {
            revealer.reveal_instantly();
            None
        };
        Self { revealer, interval }
    }

    /// Advance the revealer by however many ticks are due. Returns whether
    /// the visible text changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(interval) = self.interval.as_mut() else {
            return false;
        };
        let advanced = self.revealer.advance(interval.poll(now));
        if self.revealer.is_complete() {
            self.stop();
        }
        advanced > 0
    }

    pub fn visible(&self) -> &str {
        self.revealer.visible()
    }

    pub fn revealer(&self) -> &TextRevealer {
        &self.revealer
    }

    /// Whether a timer is still scheduled.
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn cancel(&mut self) {
        self.revealer.cancel();
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(mut interval) = self.interval.take() {
            interval.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: &str = "Creative Developer";

    #[test]
    fn test_steps_yield_every_prefix() {
        let revealer = TextRevealer::new("abc");
        let steps: Vec<&str> = revealer.steps().collect();
        assert_eq!(steps, vec!["", "a", "ab", "abc"]);
    }

    #[test]
    fn test_steps_count_is_char_count_plus_one() {
        let revealer = TextRevealer::new(TITLE);
        let chars = TITLE.chars().count();
        assert_eq!(revealer.steps().len(), chars + 1);
        assert_eq!(revealer.steps().count(), chars + 1);

        let revealer = TextRevealer::new("café ☕");
        assert_eq!(revealer.steps().count(), 7);
        assert_eq!(revealer.steps().last(), Some("café ☕"));
    }

    #[test]
    fn test_empty_target_has_single_state() {
        let revealer = TextRevealer::new("");
        assert!(revealer.is_complete());
        assert_eq!(revealer.steps().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_tick_stops_at_full_length() {
        let mut revealer = TextRevealer::new("hey");
        assert_eq!(revealer.advance(10), 3);
        assert!(revealer.is_complete());
        assert!(!revealer.tick());
        assert_eq!(revealer.visible(), "hey");
    }

    #[test]
    fn test_multibyte_prefixes_stay_on_char_boundaries() {
        let mut revealer = TextRevealer::new("héllo ✦");
        revealer.advance(2);
        assert_eq!(revealer.visible(), "hé");
        revealer.advance(10);
        assert_eq!(revealer.visible(), "héllo ✦");
    }

    #[test]
    fn test_cancelled_revealer_does_not_advance() {
        let mut revealer = TextRevealer::new(TITLE);
        revealer.tick();
        revealer.cancel();
        assert!(!revealer.tick());
        revealer.reveal_instantly();
        assert_eq!(revealer.visible(), "C");
    }

    #[test]
    fn test_effect_reveals_one_char_per_delay() {
        let start = Instant::now();
        let delay = DEFAULT_TYPING_DELAY;
        let mut effect = TypingEffect::mount("abcd", delay, MotionGate::new(false), start);
        assert_eq!(effect.visible(), "");
        assert!(effect.update(start + delay));
        assert_eq!(effect.visible(), "a");
        effect.update(start + delay * 3);
        assert_eq!(effect.visible(), "abc");
        assert!(effect.is_running());
        effect.update(start + delay * 4);
        assert_eq!(effect.visible(), "abcd");
        assert!(!effect.is_running());
        assert!(!effect.update(start + delay * 40));
    }

    #[test]
    fn test_effect_under_reduced_motion_is_static() {
        let start = Instant::now();
        let effect = TypingEffect::mount(TITLE, DEFAULT_TYPING_DELAY, MotionGate::new(true), start);
        assert!(!effect.is_running());
        assert_eq!(effect.visible(), TITLE);
    }

    #[test]
    fn test_cancel_freezes_effect() {
        let start = Instant::now();
        let delay = DEFAULT_TYPING_DELAY;
        let mut effect = TypingEffect::mount(TITLE, delay, MotionGate::new(false), start);
        effect.update(start + delay * 2);
        effect.cancel();
        assert!(!effect.is_running());
        assert!(!effect.update(start + delay * 50));
        assert_eq!(effect.visible(), "Cr");
    }

    #[test]
    fn test_empty_target_schedules_nothing() {
        let effect = TypingEffect::mount("", DEFAULT_TYPING_DELAY, MotionGate::new(false), Instant::now());
        assert!(!effect.is_running());
        assert_eq!(effect.visible(), "");
    }
}
