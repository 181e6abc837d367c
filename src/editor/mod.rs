//! Interactive Curve Editing
//!
//! Hit-testing of the per-band control points and the drag state machine
//! that maps pointer movement back onto band parameters.

mod pointer;

pub use hit_test::{control_points, hit_test, ControlPoint, DEFAULT_HIT_RADIUS};
pub use pointer::{
    DragSession, EditorResponse, EditorState, PointerEditor, PointerEvent, PointerPhase,
};
