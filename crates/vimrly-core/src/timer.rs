//! Prefix disambiguation timer.
//!
//! At most one prefix is live at a time. Every arm or cancel bumps a
//! generation counter; an expiry only counts when it carries the live
//! generation, so a late expiry can never clear a newer prefix.

use std::time::Duration;

use tokio::time::Instant;

/// Default wait for the second key of a two-key command.
pub const DEFAULT_PREFIX_TIMEOUT: Duration = Duration::from_millis(500);

/// A prefix waiting for its second key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedPrefix {
    /// Generation this prefix was armed with.
    pub generation: u64,
    /// The prefix key.
    pub prefix: String,
    /// When the single-key fallback fires.
    pub deadline: Instant,
}

/// Tracks the single live prefix and its deadline.
#[derive(Debug)]
pub struct PrefixTimer {
    timeout: Duration,
    generation: u64,
    armed: Option<ArmedPrefix>,
}

impl PrefixTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            generation: 0,
            armed: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The live prefix, if any.
    pub fn armed(&self) -> Option<&ArmedPrefix> {
        self.armed.as_ref()
    }

    /// Arm a new prefix, invalidating any previous one.
    pub fn arm(&mut self, prefix: impl Into<String>) -> &ArmedPrefix {
        self.generation += 1;
        let armed = ArmedPrefix {
            generation: self.generation,
            prefix: prefix.into(),
            deadline: Instant::now() + self.timeout,
        };
        tracing::debug!(
            generation = armed.generation,
            "Armed prefix {:?} for {:?}",
            armed.prefix,
            self.timeout
        );
        self.armed.insert(armed)
    }

    /// Drop the live prefix, if any.
    pub fn cancel(&mut self) {
        if self.armed.take().is_some() {
            self.generation += 1;
        }
    }

    /// Take the live prefix if `generation` still identifies it.
    pub fn take_if_current(&mut self, generation: u64) -> Option<ArmedPrefix> {
        match &self.armed {
            Some(armed) if armed.generation == generation => self.armed.take(),
            _ => None,
        }
    }
}

impl Default for PrefixTimer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX_TIMEOUT)
    }
}
