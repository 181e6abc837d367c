//! Pointer drag state machine
//!
//! Idle → Dragging(band) on a pointer-down that lands on a control point,
//! Dragging → Dragging on every move (writing new band parameters back to the
//! host), Dragging → Idle on release or cancel.
//!
//! Gain is updated by delta: the pointer's gain minus the composite curve
//! value at the band's pre-drag frequency is added to the band's own pre-drag
//! gain. Because the bands multiply, writing the pointer gain directly would
//! make the point jump away from the pointer.

use super::hit_test::{control_points, hit_test, DEFAULT_HIT_RADIUS};
use crate::dsp::{BandId, EqualizerState, MagnitudeResponse, ResponseCompositor};
use crate::geometry::{Point, Surface};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pointer event phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self { phase, x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Snapshot taken when a drag starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragSession {
    pub band: BandId,
    /// Band gain at drag start (dB)
    pub start_gain_db: f64,
    /// Band frequency at drag start (Hz)
    pub start_frequency: f64,
    /// Composite curve value at `start_frequency` at drag start (dB)
    pub reference_db: f64,
}

impl DragSession {
    /// Band parameters for a pointer that maps to (`target_freq`, `target_gain`)
    ///
    /// Both values are computed from the session snapshot only, so repeated
    /// moves never accumulate error.
    pub fn apply(
        &self,
        state: &EqualizerState,
        target_freq: f64,
        target_gain: f64,
    ) -> EqualizerState {
        let gain_delta = target_gain - self.reference_db;
        let mut next = *state;
        next.set_frequency(self.band, target_freq);
        next.set_gain_db(self.band, self.start_gain_db + gain_delta);
        next
    }
}

/// Editor state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorState::Idle => write!(f, "Idle"),
            EditorState::Dragging(session) => write!(f, "Dragging({})", session.band),
        }
    }
}

/// What the host should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorResponse {
    /// Not consumed; keep the default pointer behavior
    Ignored,
    /// Drag started on this band; capture the pointer and suppress defaults
    Captured(BandId),
    /// Band parameters changed and were delivered through the change callback
    Updated(BandId),
    /// Drag ended; release pointer capture
    Released,
}

impl EditorResponse {
    /// Whether the host should suppress its default pointer handling
    pub fn is_handled(&self) -> bool {
        !matches!(self, EditorResponse::Ignored)
    }
}

/// Turns pointer gestures into band parameter updates
#[derive(Debug, Clone)]
pub struct PointerEditor {
    state: EditorState,
    hit_radius: f64,
}

impl Default for PointerEditor {
    fn default() -> Self {
        Self::new(DEFAULT_HIT_RADIUS)
    }
}

impl PointerEditor {
    pub fn new(hit_radius: f64) -> Self {
        Self {
            state: EditorState::Idle,
            hit_radius,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn hit_radius(&self) -> f64 {
        self.hit_radius
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, EditorState::Dragging(_))
    }

    /// The open drag session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            EditorState::Dragging(session) => Some(session),
            EditorState::Idle => None,
        }
    }

    /// Route one pointer event to the matching transition
    pub fn handle_event<R, F>(
        &mut self,
        compositor: &ResponseCompositor<R>,
        state: &EqualizerState,
        surface: Surface,
        event: PointerEvent,
        on_change: F,
    ) -> EditorResponse
    where
        R: MagnitudeResponse,
        F: FnMut(EqualizerState),
    {
        match event.phase {
            PointerPhase::Down => self.pointer_down(compositor, state, surface, event.position()),
            PointerPhase::Move => self.pointer_move(state, surface, event.position(), on_change),
            PointerPhase::Up => self.pointer_up(),
            PointerPhase::Cancel => self.cancel(),
        }
    }

    /// Start a drag if the pointer lands on a control point
    pub fn pointer_down<R: MagnitudeResponse>(
        &mut self,
        compositor: &ResponseCompositor<R>,
        state: &EqualizerState,
        surface: Surface,
        position: Point,
    ) -> EditorResponse {
        if let EditorState::Dragging(session) = self.state {
            debug!("[EDITOR] Ignoring pointer-down while dragging {}", session.band);
            return EditorResponse::Ignored;
        }

        let points = match control_points(compositor, state, surface) {
            Ok(points) => points,
            Err(e) => {
                warn!("[EDITOR] No control points to hit-test: {}", e);
                return EditorResponse::Ignored;
            }
        };

        let Some(hit) = hit_test(&points, position, self.hit_radius) else {
            return EditorResponse::Ignored;
        };

        let session = DragSession {
            band: hit.band,
            start_gain_db: state.gain_db(hit.band),
            start_frequency: state.frequency(hit.band),
            reference_db: hit.magnitude_db,
        };
        debug!(
            "[EDITOR] Drag start on {} at {:.1} Hz, reference {:.2} dB",
            session.band, session.start_frequency, session.reference_db
        );
        self.state = EditorState::Dragging(session);
        EditorResponse::Captured(hit.band)
    }

    /// Move the dragged band to follow the pointer
    pub fn pointer_move<F>(
        &mut self,
        state: &EqualizerState,
        surface: Surface,
        position: Point,
        mut on_change: F,
    ) -> EditorResponse
    where
        F: FnMut(EqualizerState),
    {
        let EditorState::Dragging(session) = self.state else {
            return EditorResponse::Ignored;
        };

        let Some((target_freq, target_gain)) = surface.from_point(position) else {
            return EditorResponse::Ignored;
        };

        let next = session.apply(state, target_freq, target_gain);
        on_change(next);
        EditorResponse::Updated(session.band)
    }

    /// Finish the drag
    pub fn pointer_up(&mut self) -> EditorResponse {
        self.close("pointer-up")
    }

    /// Abort the drag (pointer lost, capture broken)
    pub fn cancel(&mut self) -> EditorResponse {
        self.close("cancel")
    }

    /// Restore the default band settings, closing any open drag
    pub fn reset<F>(&mut self, mut on_change: F)
    where
        F: FnMut(EqualizerState),
    {
        self.close("reset");
        on_change(EqualizerState::default());
    }

    fn close(&mut self, reason: &str) -> EditorResponse {
        match std::mem::take(&mut self.state) {
            EditorState::Dragging(session) => {
                debug!("[EDITOR] Drag end on {} ({})", session.band, reason);
                EditorResponse::Released
            }
            EditorState::Idle => EditorResponse::Ignored,
        }
    }
}
