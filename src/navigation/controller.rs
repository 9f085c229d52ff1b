use std::time::Duration;

use glam::Vec3;

use super::{
    CommandOutcome, NavigationCommand, NavigationError, NavigationState,
    TransitionCompleted,
};
use crate::animation::{
    CameraTween, TransitionEngine, TransitionRequest, TransitionStep,
};
use crate::options::{BusyPolicy, NavigationOptions};
use crate::scene::PointOfInterest;
use crate::util::easing::EasingFunction;

/// Bookkeeping for the transition in flight.
#[derive(Debug, Clone, Copy)]
struct InFlight {
    index: usize,
    target: Vec3,
    elapsed: Duration,
}

/// Discrete camera navigation over an ordered list of points of interest.
///
/// At most one transition is in flight at a time. While one is, commands
/// are dropped or held according to the [`BusyPolicy`]; the index never
/// changes until the engine reports completion (or the watchdog fires).
pub struct NavigationController<E = CameraTween> {
    points: Vec<PointOfInterest>,
    state: NavigationState,
    engine: E,
    duration: Duration,
    easing: EasingFunction,
    busy_policy: BusyPolicy,
    watchdog_grace: Option<Duration>,
    in_flight: Option<InFlight>,
    pending: Option<NavigationCommand>,
}

impl NavigationController<CameraTween> {
    /// Create a controller at index 0 using the default tween engine.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NoPointsOfInterest`] if `points` is
    /// empty.
    pub fn new(
        points: Vec<PointOfInterest>,
        options: &NavigationOptions,
    ) -> Result<Self, NavigationError> {
        Self::with_engine(points, options, CameraTween::new())
    }
}

impl<E: TransitionEngine> NavigationController<E> {
    /// Create a controller driving a custom transition engine.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NoPointsOfInterest`] if `points` is
    /// empty.
    pub fn with_engine(
        points: Vec<PointOfInterest>,
        options: &NavigationOptions,
        engine: E,
    ) -> Result<Self, NavigationError> {
        if points.is_empty() {
            return Err(NavigationError::NoPointsOfInterest);
        }
        Ok(Self {
            points,
            state: NavigationState::default(),
            engine,
            duration: options.transition_duration(),
            easing: options.easing,
            busy_policy: options.busy_policy,
            watchdog_grace: options.watchdog_grace(),
            in_flight: None,
            pending: None,
        })
    }

    /// Apply a command with the camera currently at `from`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidIndex`] for a `Select` outside the
    /// list while idle. State is unchanged on error.
    pub fn handle_command(
        &mut self,
        command: NavigationCommand,
        from: Vec3,
    ) -> Result<CommandOutcome, NavigationError> {
        if self.state.transitioning {
            return Ok(self.defer(command));
        }

        let current = self.state.current_index;
        let last = self.points.len() - 1;
        let next = match command {
            NavigationCommand::Advance if current >= last => None,
            NavigationCommand::Advance => Some(current + 1),
            NavigationCommand::Retreat if current == 0 => None,
            NavigationCommand::Retreat => Some(current - 1),
            NavigationCommand::Select { index } if index > last => {
                return Err(NavigationError::InvalidIndex {
                    index,
                    len: self.points.len(),
                });
            }
            NavigationCommand::Select { index } => Some(index),
        };

        let Some(index) = next else {
            log::debug!("{command:?} at boundary index {current}");
            return Ok(CommandOutcome::AtBoundary);
        };

        let target = self.points[index].camera_position();
        self.state = NavigationState {
            current_index: index,
            transitioning: true,
        };
        self.in_flight = Some(InFlight {
            index,
            target,
            elapsed: Duration::ZERO,
        });
        self.engine.animate(TransitionRequest {
            from,
            to: target,
            duration: self.duration,
            easing: self.easing,
        });
        log::debug!(
            "{command:?}: flying to {} ({index})",
            self.points[index].id()
        );
        Ok(CommandOutcome::Started { index, target })
    }

    fn defer(&mut self, command: NavigationCommand) -> CommandOutcome {
        match self.busy_policy {
            BusyPolicy::Drop => {
                log::debug!("{command:?} dropped: transition in flight");
                CommandOutcome::Dropped
            }
            BusyPolicy::QueueLatest => {
                log::debug!("{command:?} queued behind transition");
                self.pending = Some(command);
                CommandOutcome::Queued
            }
        }
    }

    /// Advance the transition in flight by `dt`, writing the camera
    /// position into `eye`. Does nothing while idle.
    ///
    /// Returns the completion on the frame the transition ends. A queued
    /// command is applied immediately after, starting from the arrival
    /// position.
    pub fn tick(
        &mut self,
        dt: Duration,
        eye: &mut Vec3,
    ) -> Option<TransitionCompleted> {
        let flight = self.in_flight.as_mut()?;
        flight.elapsed = flight.elapsed.saturating_add(dt);
        let flight = *flight;

        match self.engine.advance(dt) {
            TransitionStep::Finished(position) => {
                *eye = position;
                return Some(self.complete(flight.index, position, false));
            }
            TransitionStep::Moving(position) => *eye = position,
            TransitionStep::Idle => {}
        }

        let deadline = self
            .watchdog_grace
            .map(|grace| self.duration.saturating_add(grace));
        if deadline.is_some_and(|deadline| flight.elapsed > deadline) {
            log::warn!(
                "transition to {} did not complete after {:?}; snapping",
                self.points[flight.index].id(),
                flight.elapsed
            );
            self.engine.cancel();
            *eye = flight.target;
            return Some(self.complete(flight.index, flight.target, true));
        }
        None
    }

    fn complete(
        &mut self,
        index: usize,
        position: Vec3,
        forced: bool,
    ) -> TransitionCompleted {
        self.state.transitioning = false;
        self.in_flight = None;
        log::debug!("arrived at {}", self.points[index].id());

        if let Some(command) = self.pending.take() {
            if let Err(err) = self.handle_command(command, position) {
                log::warn!("queued {command:?} discarded: {err}");
            }
        }

        TransitionCompleted {
            index,
            position,
            forced,
        }
    }

    /// Current index and transition flag.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Index of the active point of interest.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state.transitioning
    }

    /// The active point of interest.
    #[must_use]
    pub fn current_point(&self) -> &PointOfInterest {
        &self.points[self.state.current_index]
    }

    /// All points of interest in navigation order.
    #[must_use]
    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    /// Command held for after the current transition, if any.
    #[must_use]
    pub fn pending(&self) -> Option<NavigationCommand> {
        self.pending
    }

    /// The transition engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
