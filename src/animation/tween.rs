//! Camera fly-to tween and the transition-engine seam the navigation
//! controller drives.

use std::time::Duration;

use glam::Vec3;

use crate::util::easing::EasingFunction;

/// Parameters for one camera transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    /// Camera position when the transition starts.
    pub from: Vec3,
    /// Camera position when the transition ends.
    pub to: Vec3,
    /// Total duration.
    pub duration: Duration,
    /// Easing curve applied to raw progress.
    pub easing: EasingFunction,
}

/// Result of advancing a transition engine by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// No transition is in flight.
    Idle,
    /// Interpolation in progress; the camera should be placed here.
    Moving(Vec3),
    /// The transition completed on this tick. Reported exactly once per
    /// started transition, always with the exact target position.
    Finished(Vec3),
}

/// Interpolates the camera between two positions over time.
///
/// Implementations must report [`TransitionStep::Finished`] exactly once for
/// every [`animate`](Self::animate) call that is not cancelled, on the
/// thread that calls [`advance`](Self::advance).
pub trait TransitionEngine {
    /// Begin a transition, replacing any transition in flight.
    fn animate(&mut self, request: TransitionRequest);

    /// Advance by `dt` and report where the camera should be.
    fn advance(&mut self, dt: Duration) -> TransitionStep;

    /// Abandon the transition in flight without reporting completion.
    fn cancel(&mut self);

    /// Whether a transition is in flight.
    fn is_active(&self) -> bool;
}

/// An in-flight tween.
#[derive(Debug, Clone, Copy)]
struct ActiveTween {
    request: TransitionRequest,
    elapsed: Duration,
}

impl ActiveTween {
    /// Raw progress in `[0, 1]`.
    fn progress(&self) -> f32 {
        if self.request.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.request.duration.as_secs_f32())
            .min(1.0)
    }
}

/// Default [`TransitionEngine`]: eased linear interpolation of the camera
/// position, advanced by frame deltas.
#[derive(Debug, Clone, Default)]
pub struct CameraTween {
    active: Option<ActiveTween>,
}

impl CameraTween {
    /// Create an idle tween.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw progress of the transition in flight, if any.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.active.as_ref().map(ActiveTween::progress)
    }
}

impl TransitionEngine for CameraTween {
    fn animate(&mut self, request: TransitionRequest) {
        self.active = Some(ActiveTween {
            request,
            elapsed: Duration::ZERO,
        });
    }

    fn advance(&mut self, dt: Duration) -> TransitionStep {
        let Some(tween) = self.active.as_mut() else {
            return TransitionStep::Idle;
        };

        tween.elapsed = tween.elapsed.saturating_add(dt);
        let t = tween.progress();
        let request = tween.request;

        if t >= 1.0 {
            self.active = None;
            return TransitionStep::Finished(request.to);
        }

        let eased = request.easing.evaluate(t);
        TransitionStep::Moving(request.from.lerp(request.to, eased))
    }

    fn cancel(&mut self) {
        self.active = None;
    }

    fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
