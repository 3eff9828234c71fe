//! Position controller implementation

use std::sync::{Arc, Weak};

use super::{PositionState, PositionSubscriber};
use crate::circular;
use crate::config::{CollectionSpec, GalleryConfig, Orientation};
use crate::error::{GalleryError, Result};
use crate::gesture::{
    BufferTracker, Direction, GestureInterpreter, GestureOutcome, GesturePhase, PointerSample,
};
use crate::window::{self, RenderSlot, VisibilityWindow};

/// Change callback, invoked with the new index and the full window
pub type ChangeCallback = Box<dyn FnMut(usize, &VisibilityWindow) + Send>;

/// Owns the current position and turns control actions and gestures into
/// transitions
///
/// Every transition invokes the change callback and the live subscribers
/// exactly once. Requests that cannot move (empty or single-item collection,
/// short gestures, stray samples) change nothing and notify no one.
pub struct PositionController {
    config: GalleryConfig,
    collection: CollectionSpec,
    state: PositionState,
    gesture: GestureInterpreter,
    buffer: BufferTracker,
    on_change: Option<ChangeCallback>,
    subscribers: Vec<Weak<dyn PositionSubscriber>>,
}

impl PositionController {
    /// Create a controller for `total_count` items
    pub fn new(config: GalleryConfig, total_count: usize) -> Result<Self> {
        config.validate()?;
        let collection = config.collection(total_count)?;

        Ok(Self {
            gesture: GestureInterpreter::new(config.orientation, config.min_swipe_distance),
            buffer: BufferTracker::new(config.buffer),
            state: PositionState::for_collection(total_count),
            collection,
            config,
            on_change: None,
            subscribers: Vec::new(),
        })
    }

    /// Set the change callback
    pub fn with_on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, &VisibilityWindow) + Send + 'static,
    {
        self.set_on_change(callback);
        self
    }

    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(usize, &VisibilityWindow) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Add a subscriber; it is dropped from the list once no longer alive
    pub fn add_subscriber(&mut self, subscriber: Arc<dyn PositionSubscriber>) {
        self.subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Advance by one item. Returns the new index if a transition happened.
    pub fn go_forward(&mut self) -> Option<usize> {
        self.transition(Direction::Forward)
    }

    /// Retreat by one item. Returns the new index if a transition happened.
    pub fn go_backward(&mut self) -> Option<usize> {
        self.transition(Direction::Backward)
    }

    /// Feed one gesture sample
    ///
    /// Returns the new index when the sample ended a gesture that qualified as
    /// a swipe.
    pub fn on_gesture_sample(&mut self, sample: PointerSample, phase: GesturePhase) -> Option<usize> {
        match phase {
            GesturePhase::Start => {
                self.gesture.start(sample);
                self.buffer.reset();
                None
            }
            GesturePhase::Move => match self.gesture.update(sample) {
                Ok(delta) => {
                    self.buffer.track(delta);
                    None
                }
                Err(e) => {
                    tracing::debug!("Ignoring gesture sample: {}", e);
                    None
                }
            },
            GesturePhase::End => {
                let outcome = self.gesture.finish(sample);
                self.buffer.reset();
                match outcome {
                    Ok(GestureOutcome::Transition(direction)) => self.transition(direction),
                    Ok(GestureOutcome::NoTransition) => None,
                    Err(e) => {
                        tracing::debug!("Ignoring gesture sample: {}", e);
                        None
                    }
                }
            }
        }
    }

    /// Abandon the gesture in progress, if any
    pub fn cancel_gesture(&mut self) -> bool {
        self.buffer.reset();
        let cancelled = self.gesture.cancel();
        if cancelled {
            tracing::debug!("Gesture cancelled");
        }
        cancelled
    }

    /// Resync to a new collection size without notifying anyone
    pub fn reconfigure(&mut self, collection: CollectionSpec) {
        self.collection = collection;
        self.config.max_visible = collection.max_visible();
        self.state.rewrap(collection.total_count());
        tracing::debug!(
            "Reconfigured to {} items ({} visible), index now {:?}",
            collection.total_count(),
            collection.visible_count(),
            self.state.current_index()
        );
    }

    /// Shorthand for [`reconfigure`](Self::reconfigure) keeping `max_visible`
    pub fn set_total_count(&mut self, total_count: usize) {
        self.reconfigure(self.collection.with_total_count(total_count));
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    /// Indices currently shown
    pub fn visibility_window(&self) -> VisibilityWindow {
        match self.state.current_index() {
            Some(index) => VisibilityWindow::compute(
                index,
                self.collection.total_count(),
                self.collection.max_visible(),
            ),
            None => VisibilityWindow::default(),
        }
    }

    /// Slots to lay out, including hidden buffer neighbors in buffer mode
    pub fn render_plan(&self) -> Vec<RenderSlot> {
        window::render_plan(
            &self.visibility_window(),
            self.collection.total_count(),
            self.buffer.is_enabled(),
        )
    }

    /// Drag offset to apply to visible items; `None` unless buffer mode is on
    pub fn drag_offset(&self) -> Option<f32> {
        self.buffer.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Whether the previous/next controls should be displayed
    pub fn controls_visible(&self) -> bool {
        if self.config.hide_controls {
            return false;
        }
        let too_small = self.collection.total_count() < self.collection.max_visible();
        !(self.config.hide_controls_when_small && too_small)
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn collection(&self) -> CollectionSpec {
        self.collection
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    fn transition(&mut self, direction: Direction) -> Option<usize> {
        match self.step(direction) {
            Ok(Some(index)) => {
                self.state.set(index);
                let window = self.visibility_window();
                self.notify(index, &window);
                Some(index)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("Ignoring {:?} transition: {}", direction, e);
                None
            }
        }
    }

    /// Target index for `direction`; `None` for a single-item self-loop
    fn step(&self, direction: Direction) -> Result<Option<usize>> {
        let total = self.collection.total_count();
        let current = self
            .state
            .current_index()
            .ok_or(GalleryError::DegenerateCollection)?;
        if total == 1 {
            return Ok(None);
        }
        let next = match direction {
            Direction::Forward => circular::advance(current, total)?,
            Direction::Backward => circular::retreat(current, total)?,
        };
        Ok(Some(next))
    }

    fn notify(&mut self, index: usize, window: &VisibilityWindow) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(index, window);
        }

        // Remove any dead weak references
        self.subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in self.subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_position_change(index, window);
            }
        }
    }
}
