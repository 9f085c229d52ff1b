//! Point-of-interest navigation.
//!
//! [`NavigationController`] owns the ordered list of points of interest,
//! the current index, and the `transitioning` guard. Commands come from
//! the input processor (or any programmatic caller); camera motion is
//! delegated to a [`TransitionEngine`](crate::animation::TransitionEngine)
//! and driven once per frame through [`NavigationController::tick`].

mod controller;

use std::fmt;

pub use controller::NavigationController;
use glam::Vec3;

/// A request to move between points of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Move to the next point of interest. Clamped at the last one.
    Advance,
    /// Move to the previous point of interest. Clamped at the first one.
    Retreat,
    /// Jump directly to a point of interest by index.
    Select {
        /// Target index into the point-of-interest list.
        index: usize,
    },
}

/// Snapshot of the controller's externally visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// Index of the active point of interest.
    pub current_index: usize,
    /// Whether a camera transition is in flight.
    pub transitioning: bool,
}

/// What happened to a command that did not fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    /// A transition toward `target` began.
    Started {
        /// New current index.
        index: usize,
        /// Camera resting position for that point of interest.
        target: Vec3,
    },
    /// Advance at the last index or Retreat at the first.
    AtBoundary,
    /// Ignored because a transition is in flight.
    Dropped,
    /// Stored to run after the transition in flight completes, replacing
    /// any earlier pending command.
    Queued,
}

impl CommandOutcome {
    /// Whether the command started a transition.
    #[must_use]
    pub fn started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Reported by [`NavigationController::tick`] on the frame a transition
/// ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionCompleted {
    /// Point of interest the camera arrived at.
    pub index: usize,
    /// Final camera position.
    pub position: Vec3,
    /// `true` if the watchdog ended the transition instead of the engine.
    pub forced: bool,
}

/// Errors from navigation commands and controller construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// `Select` named an index outside `0..len`.
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of points of interest.
        len: usize,
    },
    /// A controller needs at least one point of interest.
    NoPointsOfInterest,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { index, len } => write!(
                f,
                "point of interest {index} out of range (have {len})"
            ),
            Self::NoPointsOfInterest => {
                write!(f, "no points of interest to navigate")
            }
        }
    }
}

impl std::error::Error for NavigationError {}
