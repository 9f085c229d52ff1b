use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// What the navigation controller does with a command that arrives while a
/// transition is still in flight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BusyPolicy {
    /// Drop the command entirely.
    #[default]
    Drop,
    /// Keep only the most recent command and apply it once the current
    /// transition completes.
    QueueLatest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera navigation timing and input policy.
pub struct NavigationOptions {
    /// Duration of a fly-to transition in milliseconds.
    pub transition_ms: u64,
    /// Easing curve for fly-to transitions.
    pub easing: EasingFunction,
    /// Handling of commands received mid-transition.
    pub busy_policy: BusyPolicy,
    /// Extra time past `transition_ms` after which a transition that never
    /// reported completion is forced to finish. `0` disables the watchdog.
    pub watchdog_grace_ms: u64,
}

impl NavigationOptions {
    /// Transition duration as a [`Duration`].
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Watchdog grace period as a [`Duration`], or `None` when disabled.
    #[must_use]
    pub fn watchdog_grace(&self) -> Option<Duration> {
        (self.watchdog_grace_ms > 0)
            .then_some(Duration::from_millis(self.watchdog_grace_ms))
    }
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            transition_ms: 1000,
            easing: EasingFunction::CubicOut,
            busy_policy: BusyPolicy::Drop,
            watchdog_grace_ms: 1000,
        }
    }
}
