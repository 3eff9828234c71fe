//! Gesture state machine: Idle -> Active -> Idle

use crate::config::Orientation;
use crate::error::{GalleryError, Result};

use super::{Direction, GestureOutcome, GesturePhase, PointerSample};

/// State of one drag, alive between its Start and End samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    origin: PointerSample,
    axis: Orientation,
    last_delta: f32,
}

impl GestureSession {
    fn open(origin: PointerSample, axis: Orientation) -> Self {
        Self { origin, axis, last_delta: 0.0 }
    }

    /// Signed distance along the axis from the origin to `sample`
    fn delta_to(&self, sample: PointerSample) -> f32 {
        self.axis.coordinate(sample) - self.axis.coordinate(self.origin)
    }

    pub fn origin(&self) -> PointerSample {
        self.origin
    }

    pub fn axis(&self) -> Orientation {
        self.axis
    }

    /// Distance along the axis at the most recent sample
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }
}

/// Converts Start/Move/End samples into a single discrete decision
///
/// The decision is made once, when the session closes. A negative final delta
/// (dragging left or up) of at least the threshold means Forward; a positive
/// one means Backward.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    axis: Orientation,
    threshold: f32,
    session: Option<GestureSession>,
}

impl GestureInterpreter {
    pub fn new(axis: Orientation, threshold: f32) -> Self {
        Self {
            axis,
            threshold: threshold.abs(),
            session: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Open a session at `sample`
    ///
    /// A session already open is discarded and replaced; returns `true` when
    /// that happened.
    pub fn start(&mut self, sample: PointerSample) -> bool {
        let replaced = self.session.is_some();
        if replaced {
            tracing::debug!("Gesture restarted at ({}, {})", sample.x, sample.y);
        }
        self.session = Some(GestureSession::open(sample, self.axis));
        replaced
    }

    /// Record a move sample and return the new delta
    pub fn update(&mut self, sample: PointerSample) -> Result<f32> {
        let session = self
            .session
            .as_mut()
            .ok_or(GalleryError::MalformedGestureSequence { phase: GesturePhase::Move })?;
        session.last_delta = session.delta_to(sample);
        tracing::trace!("Gesture delta {}", session.last_delta);
        Ok(session.last_delta)
    }

    /// Close the session at `sample` and decide
    pub fn finish(&mut self, sample: PointerSample) -> Result<GestureOutcome> {
        let session = self
            .session
            .take()
            .ok_or(GalleryError::MalformedGestureSequence { phase: GesturePhase::End })?;
        let final_delta = session.delta_to(sample);

        let outcome = if final_delta <= -self.threshold {
            GestureOutcome::Transition(Direction::Forward)
        } else if final_delta >= self.threshold {
            GestureOutcome::Transition(Direction::Backward)
        } else {
            GestureOutcome::NoTransition
        };
        tracing::debug!("Gesture ended with delta {} -> {:?}", final_delta, outcome);
        Ok(outcome)
    }

    /// Drop the open session without deciding; returns `true` if one was open
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, y: f32) -> PointerSample {
        PointerSample::new(x, y)
    }

    fn swipe(interpreter: &mut GestureInterpreter, dx: f32, dy: f32) -> GestureOutcome {
        let start = 400.0;
        interpreter.start(sample(start, start));
        interpreter.update(sample(start + dx, start + dy)).unwrap();
        interpreter.finish(sample(start + dx + dx, start + dy + dy)).unwrap()
    }

    #[test]
    fn test_horizontal_swipes() {
        let mut interpreter = GestureInterpreter::new(Orientation::Horizontal, 50.0);
        assert_eq!(swipe(&mut interpreter, -50.0, 0.0), GestureOutcome::Transition(Direction::Forward));
        assert_eq!(swipe(&mut interpreter, 50.0, 0.0), GestureOutcome::Transition(Direction::Backward));
        assert!(!interpreter.is_active());
    }

    #[test]
    fn test_vertical_swipes_ignore_x() {
        let mut interpreter = GestureInterpreter::new(Orientation::Vertical, 50.0);
        assert_eq!(swipe(&mut interpreter, 0.0, -50.0), GestureOutcome::Transition(Direction::Forward));
        assert_eq!(swipe(&mut interpreter, 0.0, 50.0), GestureOutcome::Transition(Direction::Backward));
        assert_eq!(swipe(&mut interpreter, -200.0, 0.0), GestureOutcome::NoTransition);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut interpreter = GestureInterpreter::new(Orientation::Horizontal, 50.0);
        interpreter.start(sample(100.0, 0.0));
        assert_eq!(interpreter.finish(sample(50.0, 0.0)).unwrap(), GestureOutcome::Transition(Direction::Forward));

        interpreter.start(sample(100.0, 0.0));
        assert_eq!(interpreter.finish(sample(150.0, 0.0)).unwrap(), GestureOutcome::Transition(Direction::Backward));

        interpreter.start(sample(100.0, 0.0));
        assert_eq!(interpreter.finish(sample(50.5, 0.0)).unwrap(), GestureOutcome::NoTransition);
    }

    #[test]
    fn test_decision_uses_end_sample_not_last_move() {
        let mut interpreter = GestureInterpreter::new(Orientation::Horizontal, 50.0);
        interpreter.start(sample(400.0, 0.0));
        interpreter.update(sample(200.0, 0.0)).unwrap();
        assert_eq!(interpreter.finish(sample(390.0, 0.0)).unwrap(), GestureOutcome::NoTransition);
    }

    #[test]
    fn test_move_reports_delta() {
        let mut interpreter = GestureInterpreter::new(Orientation::Horizontal, 50.0);
        interpreter.start(sample(400.0, 400.0));
        assert_eq!(interpreter.update(sample(350.0, 420.0)).unwrap(), -50.0);
        assert_eq!(interpreter.session().unwrap().last_delta(), -50.0);
        assert_eq!(interpreter.session().unwrap().origin(), sample(400.0, 400.0));
    }

    #[test]
    fn test_stray_samples_are_malformed() {
        let mut interpreter = GestureInterpreter::new(Orientation::Horizontal, 50.0);
        assert!(matches!(
            interpreter.finish(sample(0.0, 0.0)),
            Err(GalleryError::MalformedGestureSequence { phase: GesturePhase::End })
        ));
        assert!(matches!(
            interpreter.update(sample(0.0, 0.0)),
            Err(GalleryError::MalformedGestureSequence { phase: GesturePhase::Move })
        ));

        // Duplicate end after a completed gesture
        interpreter.start(sample(0.0, 0.0));
        interpreter.finish(sample(-100.0, 0.0)).unwrap();
        assert!(interpreter.finish(sample(-100.0, 0.0)).is_err());
    }

    #[test]
    fn test_second_start_restarts_session() {
        let mut interpreter = GestureInterpreter::new(Orientation::Horizontal, 50.0);
        assert!(!interpreter.start(sample(400.0, 0.0)));
        interpreter.update(sample(300.0, 0.0)).unwrap();

        assert!(interpreter.start(sample(100.0, 0.0)));
        let session = interpreter.session().unwrap();
        assert_eq!(session.origin(), sample(100.0, 0.0));
        assert_eq!(session.last_delta(), 0.0);

        // Measured from the new origin: only 20 units
        assert_eq!(interpreter.finish(sample(80.0, 0.0)).unwrap(), GestureOutcome::NoTransition);
    }

    #[test]
    fn test_cancel() {
        let mut interpreter = GestureInterpreter::new(Orientation::Horizontal, 50.0);
        assert!(!interpreter.cancel());
        interpreter.start(sample(0.0, 0.0));
        assert!(interpreter.cancel());
        assert!(!interpreter.is_active());
        assert!(interpreter.finish(sample(-100.0, 0.0)).is_err());
    }
}
