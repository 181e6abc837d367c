//! Integration Tests
//!
//! End-to-end checks of curve rendering, dial mapping and drag editing
//! through the public API.

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use test_case::test_case;

use eqviz::config::EditorConfig;
use eqviz::controls::{apply_dial, DialParam, RadialControl};
use eqviz::dsp::{
    BandId, BandShape, BiquadResponse, CurveSampler, EqualizerState, ResponseCompositor,
    UnavailableResponse,
};
use eqviz::editor::{EditorResponse, PointerEditor, PointerEvent, PointerPhase};
use eqviz::geometry::{frequency_to_x, gain_to_y, x_to_frequency, y_to_gain, Point, Surface};
use eqviz::{EqError, EqVisualizer};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;

fn surface() -> Surface {
    Surface::new(WIDTH, HEIGHT)
}

fn compositor() -> ResponseCompositor<BiquadResponse> {
    ResponseCompositor::new(BiquadResponse::default())
}

// === Coordinate Mapping ===

#[test_case(20.0 ; "lower edge")]
#[test_case(1000.0 ; "mid")]
#[test_case(20000.0 ; "upper edge")]
fn test_frequency_round_trip(freq: f64) {
    let x = frequency_to_x(freq, WIDTH);
    assert_relative_eq!(x_to_frequency(x, WIDTH), freq, max_relative = 1e-9);
}

#[test_case(-24.0 ; "floor")]
#[test_case(0.0 ; "unity")]
#[test_case(13.5 ; "boost")]
fn test_gain_round_trip(db: f64) {
    let y = gain_to_y(db, HEIGHT);
    assert_relative_eq!(y_to_gain(y, HEIGHT), db, epsilon = 1e-9);
}

// === Radial Controls ===

#[test]
fn test_stepped_dial_round_trip() {
    let dial = RadialControl::new(0.0, 360.0).with_step(1.0);
    let angle = dial.value_to_angle(90.0);
    assert_relative_eq!(angle, -67.5, epsilon = 1e-9);
    assert_eq!(dial.angle_to_value(angle), 90.0);
}

#[test]
fn test_log_dial_endpoints() {
    let dial = RadialControl::logarithmic(20.0, 20000.0);
    assert_relative_eq!(dial.value_to_angle(20.0), -135.0, epsilon = 1e-9);
    assert_relative_eq!(dial.value_to_angle(20000.0), 135.0, epsilon = 1e-9);
}

#[test]
fn test_dial_output_stays_in_range() {
    let dial = RadialControl::logarithmic(200.0, 10000.0).with_step(1.0);
    for angle in [-720.0, -135.0, -10.0, 0.0, 77.7, 135.0, 1e6, f64::NAN] {
        let value = dial.angle_to_value(angle);
        assert!((200.0..=10000.0).contains(&value), "{} -> {}", angle, value);
    }
}

#[test]
fn test_dials_work_without_response() {
    // Curve rendering is unavailable, dial edits are not
    let mut view = EqVisualizer::new(UnavailableResponse, &EditorConfig::default());
    view.resize(WIDTH, HEIGHT);
    let state = EqualizerState::default();
    assert!(matches!(
        view.curve(&state),
        Err(EqError::ResponseUnavailable { .. })
    ));

    let updated = apply_dial(&state, BandId::Mid, DialParam::Gain, 135.0).unwrap();
    assert_eq!(updated.mid.gain_db, 24.0);
}

// === Response Curve ===

#[test]
fn test_flat_state_renders_flat_curve() {
    let samples = CurveSampler::default()
        .render(&compositor(), &EqualizerState::default(), surface())
        .unwrap();

    assert_eq!(samples.len(), 128);
    assert_relative_eq!(samples[0].frequency, 20.0, epsilon = 1e-9);
    assert_relative_eq!(samples[127].frequency, 20000.0, max_relative = 1e-12);
    for s in &samples {
        assert!(s.magnitude_db.abs() < 1e-6, "{:?}", s);
    }
}

#[test]
fn test_curve_reflects_band_boosts() {
    let mut state = EqualizerState::default();
    state.set_gain_db(BandId::Low, 6.0);
    state.set_gain_db(BandId::High, -6.0);

    let c = compositor();
    let low_end = c.magnitude_db_at(&state, 20.0).unwrap();
    let high_end = c.magnitude_db_at(&state, 20000.0).unwrap();
    assert!(low_end > 5.0, "low end {}", low_end);
    assert!(high_end < -5.0, "high end {}", high_end);
}

#[test]
fn test_pass_topology_cuts_below_corner() {
    let mut state = EqualizerState::default();
    state.set_shape(BandId::Low, BandShape::Pass).unwrap();
    state.set_frequency(BandId::Low, 500.0);

    let db = compositor().magnitude_db_at(&state, 50.0).unwrap();
    assert!(db < -30.0, "{}", db);
}

#[test]
fn test_unmeasured_surface_draws_nothing() {
    let samples = CurveSampler::default()
        .render(&compositor(), &EqualizerState::default(), Surface::new(0.0, 0.0))
        .unwrap();
    assert!(samples.is_empty());
}

// === Pointer Editing ===

#[test]
fn test_drag_low_band_to_pointer() {
    let c = compositor();
    let s = surface();
    let mut state = EqualizerState::default();
    let mut editor = PointerEditor::default();

    let start = s.to_point(200.0, 0.0).unwrap();
    assert_eq!(
        editor.pointer_down(&c, &state, s, start),
        EditorResponse::Captured(BandId::Low)
    );
    assert_relative_eq!(editor.session().unwrap().reference_db, 0.0, epsilon = 1e-9);

    let target = s.to_point(150.0, 6.0).unwrap();
    let current = state;
    editor.pointer_move(&current, s, target, |next| state = next);

    assert_relative_eq!(state.low.gain_db, 6.0, epsilon = 1e-6);
    assert_relative_eq!(state.low.frequency, 150.0, epsilon = 1e-6);
    assert_eq!(state.low.shape, BandShape::Shelf);

    assert_eq!(editor.pointer_up(), EditorResponse::Released);
    assert!(!editor.is_dragging());
}

#[test]
fn test_drag_keeps_point_under_pointer() {
    // With a neighbouring band boosting the curve, the dragged point still
    // ends up where the pointer is
    let c = compositor();
    let s = surface();
    let mut state = EqualizerState::default();
    state.set_gain_db(BandId::Low, 8.0);
    let mut editor = PointerEditor::default();

    let points = eqviz::editor::control_points(&c, &state, s).unwrap();
    let mid = points[1];
    editor.pointer_down(&c, &state, s, mid.position);

    let target = Point::new(mid.position.x, mid.position.y - 60.0);
    let current = state;
    editor.pointer_move(&current, s, target, |next| state = next);

    let (_, pointer_db) = s.from_point(target).unwrap();
    let curve_db = c.magnitude_db_at(&state, state.mid.frequency).unwrap();
    assert_relative_eq!(curve_db, pointer_db, epsilon = 0.5);
}

#[test]
fn test_pointer_near_mid_selects_mid() {
    let c = compositor();
    let s = surface();
    let state = EqualizerState::default();
    let mut editor = PointerEditor::default();

    let mid = s.to_point(1000.0, 0.0).unwrap();
    let response = editor.pointer_down(&c, &state, s, Point::new(mid.x + 5.0, mid.y - 5.0));
    assert_eq!(response, EditorResponse::Captured(BandId::Mid));
}

#[test]
fn test_pointer_far_from_points_stays_idle() {
    let c = compositor();
    let s = surface();
    let state = EqualizerState::default();
    let mut editor = PointerEditor::default();

    let response = editor.pointer_down(&c, &state, s, Point::new(WIDTH / 2.0, 10.0));
    assert_eq!(response, EditorResponse::Ignored);
    assert!(!editor.is_dragging());

    let mut changed = false;
    editor.pointer_move(&state, s, Point::new(10.0, 10.0), |_| changed = true);
    assert!(!changed);
}

#[test]
fn test_cancel_and_second_down() {
    let c = compositor();
    let s = surface();
    let state = EqualizerState::default();
    let mut editor = PointerEditor::default();

    let low = s.to_point(200.0, 0.0).unwrap();
    let high = s.to_point(5000.0, 0.0).unwrap();
    editor.pointer_down(&c, &state, s, low);
    assert_eq!(
        editor.pointer_down(&c, &state, s, high),
        EditorResponse::Ignored
    );
    assert_eq!(editor.session().unwrap().band, BandId::Low);

    assert_eq!(editor.cancel(), EditorResponse::Released);
    assert!(!editor.is_dragging());
    assert_eq!(editor.cancel(), EditorResponse::Ignored);
}

#[test]
fn test_reset_restores_defaults() {
    let mut view = EqVisualizer::from_config(&EditorConfig::default());
    view.resize(WIDTH, HEIGHT);

    let mut state = EqualizerState::default();
    state.set_gain_db(BandId::Mid, 12.0);
    state.set_frequency(BandId::High, 12000.0);
    state.set_shape(BandId::Low, BandShape::Pass).unwrap();

    let low = view.control_points(&state).unwrap()[0].position;
    view.handle_pointer(
        &state,
        PointerEvent::new(PointerPhase::Down, low.x, low.y),
        |_| {},
    );
    assert!(view.editor().is_dragging());

    view.reset(|next| state = next);
    assert_eq!(state, EqualizerState::default());
    assert!(!view.editor().is_dragging());
}
