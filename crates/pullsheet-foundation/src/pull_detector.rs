//! Vertical pull detector.
//!
//! A three-state machine (`Idle`, `Dragging`, `Settling`) that decides when a
//! single-pointer gesture becomes a vertical drag and reports the drag as
//! [`DragEvent`]s. The detector never calls back into its owner; every
//! [`PullDetector::on_touch_event`] returns the events it produced, in order.

use crate::gesture_constants::{RELEASE_VELOCITY_PX_MS, TOUCH_SLOP};
use crate::input::{PointerEvent, PointerEventKind};
use crate::velocity::VelocitySmoother;
use smallvec::SmallVec;

/// Set of vertical directions the detector is allowed to start a drag in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScrollDirections(u8);

impl ScrollDirections {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1 << 0);
    pub const DOWN: Self = Self(1 << 1);
    pub const BOTH: Self = Self(Self::UP.0 | Self::DOWN.0);

    pub fn contains(&self, other: ScrollDirections) -> bool {
        other.0 != 0 && (self.0 & other.0) == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: ScrollDirections) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ScrollDirections {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::ops::BitOr for ScrollDirections {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DetectorState {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Callback produced by the detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// A drag began. `start` is `false` when an in-flight settle was caught.
    Start { start: bool },
    /// Vertical displacement since the drag reference point, in px.
    Drag { displacement: f32, velocity: f32 },
    /// The pointer lifted or the gesture was cancelled.
    End { velocity: f32, fling: bool },
}

impl DragEvent {
    /// Delivers this event to `listener`.
    pub fn dispatch(self, listener: &mut dyn DragListener) {
        match self {
            DragEvent::Start { start } => listener.on_drag_start(start),
            DragEvent::Drag {
                displacement,
                velocity,
            } => {
                listener.on_drag(displacement, velocity);
            }
            DragEvent::End { velocity, fling } => listener.on_drag_end(velocity, fling),
        }
    }
}

pub type DragEvents = SmallVec<[DragEvent; 2]>;

/// Receiver of drag callbacks.
pub trait DragListener {
    fn on_drag_start(&mut self, start: bool);

    /// Returns whether the drag was consumed.
    fn on_drag(&mut self, displacement: f32, velocity: f32) -> bool;

    fn on_drag_end(&mut self, velocity: f32, fling: bool);
}

pub struct PullDetector {
    state: DetectorState,
    directions: ScrollDirections,
    ignore_slop_when_settling: bool,
    touch_slop: f32,
    fling_threshold: f32,
    down_x: f32,
    down_y: f32,
    last_y: f32,
    displacement_x: f32,
    displacement_y: f32,
    last_reported_displacement: f32,
    subtract_displacement: f32,
    velocity: VelocitySmoother,
}

impl Default for PullDetector {
    fn default() -> Self {
        Self::new(TOUCH_SLOP, RELEASE_VELOCITY_PX_MS)
    }
}

impl PullDetector {
    pub fn new(touch_slop: f32, fling_threshold: f32) -> Self {
        Self {
            state: DetectorState::Idle,
            directions: ScrollDirections::NONE,
            ignore_slop_when_settling: false,
            touch_slop,
            fling_threshold,
            down_x: 0.0,
            down_y: 0.0,
            last_y: 0.0,
            displacement_x: 0.0,
            displacement_y: 0.0,
            last_reported_displacement: 0.0,
            subtract_displacement: 0.0,
            velocity: VelocitySmoother::new(),
        }
    }

    pub fn set_detectable_scroll_conditions(
        &mut self,
        directions: ScrollDirections,
        ignore_slop_when_settling: bool,
    ) {
        self.directions = directions;
        self.ignore_slop_when_settling = ignore_slop_when_settling;
    }

    pub fn detectable_directions(&self) -> ScrollDirections {
        self.directions
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DetectorState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DetectorState::Dragging
    }

    pub fn is_settling(&self) -> bool {
        self.state == DetectorState::Settling
    }

    pub fn is_dragging_or_settling(&self) -> bool {
        matches!(
            self.state,
            DetectorState::Dragging | DetectorState::Settling
        )
    }

    /// Feeds one pointer sample. Every sample is consumed; the returned list
    /// holds the drag callbacks it triggered.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> DragEvents {
        let mut events = DragEvents::new();
        match event.kind {
            PointerEventKind::Down => {
                self.down_x = event.x();
                self.down_y = event.y();
                self.last_reported_displacement = 0.0;
                self.displacement_x = 0.0;
                self.displacement_y = 0.0;
                self.velocity.reset(event.time_ms);
                if self.state == DetectorState::Settling && self.ignore_slop_when_settling {
                    self.set_state(DetectorState::Dragging, &mut events);
                }
            }
            PointerEventKind::Move => {
                self.displacement_x = event.x() - self.down_x;
                self.displacement_y = event.y() - self.down_y;
                self.velocity.compute(event.y() - self.last_y, event.time_ms);

                if self.state != DetectorState::Dragging && self.should_scroll_start() {
                    self.set_state(DetectorState::Dragging, &mut events);
                }
                if self.state == DetectorState::Dragging {
                    self.report_dragging(&mut events);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.state == DetectorState::Dragging {
                    self.set_state(DetectorState::Settling, &mut events);
                }
            }
        }
        self.last_y = event.y();
        events
    }

    /// Runs [`Self::on_touch_event`] and dispatches the results to `listener`.
    pub fn feed(&mut self, event: &PointerEvent, listener: &mut dyn DragListener) -> bool {
        for drag_event in self.on_touch_event(event) {
            drag_event.dispatch(listener);
        }
        true
    }

    /// Blends `delta` px since the previous pointer sample into the
    /// smoothed pointer velocity.
    pub fn compute_velocity(&mut self, delta: f32, now_ms: u64) -> f32 {
        self.velocity.compute(delta, now_ms)
    }

    pub fn velocity(&self) -> f32 {
        self.velocity.velocity()
    }

    /// The settle animation reached its target.
    pub fn finished_scrolling(&mut self) {
        let mut events = DragEvents::new();
        self.set_state(DetectorState::Idle, &mut events);
    }

    /// Drops back to idle without reporting a drag end.
    pub fn cancel(&mut self) {
        if self.state != DetectorState::Idle {
            log::trace!("pull detector cancelled in {:?}", self.state);
        }
        self.state = DetectorState::Idle;
    }

    fn should_scroll_start(&self) -> bool {
        let dy = self.displacement_y;
        if dy.abs() < self.touch_slop {
            return false;
        }
        // Reject gestures that are more horizontal than vertical.
        if self.displacement_x.abs().max(1.0) > dy.abs() {
            return false;
        }
        (dy > 0.0 && self.directions.contains(ScrollDirections::DOWN))
            || (dy < 0.0 && self.directions.contains(ScrollDirections::UP))
    }

    fn set_state(&mut self, new_state: DetectorState, events: &mut DragEvents) {
        log::trace!("pull detector {:?} -> {:?}", self.state, new_state);
        if new_state == DetectorState::Dragging {
            self.initialize_dragging();
            match self.state {
                DetectorState::Idle => events.push(DragEvent::Start { start: true }),
                DetectorState::Settling => events.push(DragEvent::Start { start: false }),
                DetectorState::Dragging => {}
            }
        }
        if new_state == DetectorState::Settling {
            let velocity = self.velocity.velocity();
            events.push(DragEvent::End {
                velocity,
                fling: velocity.abs() >= self.fling_threshold,
            });
        }
        self.state = new_state;
    }

    fn initialize_dragging(&mut self) {
        self.subtract_displacement =
            if self.state == DetectorState::Settling && self.ignore_slop_when_settling {
                0.0
            } else if self.displacement_y > 0.0 {
                self.touch_slop
            } else {
                -self.touch_slop
            };
    }

    fn report_dragging(&mut self, events: &mut DragEvents) {
        if self.displacement_y != self.last_reported_displacement {
            self.last_reported_displacement = self.displacement_y;
            events.push(DragEvent::Drag {
                displacement: self.displacement_y - self.subtract_displacement,
                velocity: self.velocity.velocity(),
            });
        }
    }
}

#[cfg(test)]
#[path = "tests/pull_detector_tests.rs"]
mod tests;
