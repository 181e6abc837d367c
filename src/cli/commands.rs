//! CLI Command Implementations
//!
//! Each command loads its inputs, runs them through the library and prints
//! the result as JSON on stdout.

use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::config::EditorConfig;
use crate::controls::{apply_dial, DialParam};
use crate::dsp::{BandId, EqualizerState, ResponseSample};
use crate::editor::{ControlPoint, EditorResponse, PointerEvent};
use crate::error::Result;
use crate::visualizer::EqVisualizer;

/// Curve output: samples plus the markers drawn on top of them
#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub samples: Vec<ResponseSample>,
    pub points: Vec<ControlPoint>,
}

/// Outcome of an event script replay
#[derive(Debug, Serialize)]
pub struct DragReport {
    pub responses: Vec<EditorResponse>,
    pub state: EqualizerState,
}

/// Load the config file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::load(path),
        None => Ok(EditorConfig::default()),
    }
}

/// Load an equalizer state file, clamping every parameter into range.
pub fn load_state(path: Option<&Path>) -> Result<EqualizerState> {
    let Some(path) = path else {
        return Ok(EqualizerState::default());
    };

    info!("Loading state: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    let state: EqualizerState = serde_json::from_str(&contents)?;
    if !state.is_within_bounds() {
        warn!("State in {} is out of range, clamping", path.display());
    }
    Ok(state.clamped())
}

/// Load a pointer event script (a JSON array of events).
pub fn load_events(path: &Path) -> Result<Vec<PointerEvent>> {
    info!("Loading events: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Sample the curve and control points for a surface.
pub fn build_curve(
    config: &EditorConfig,
    state: &EqualizerState,
    width: f64,
    height: f64,
) -> Result<CurveReport> {
    let mut view = EqVisualizer::from_config(config);
    view.resize(width, height);

    Ok(CurveReport {
        samples: view.curve(state)?,
        points: view.control_points(state)?,
    })
}

/// Feed events through the editor, threading the state through each change.
pub fn replay_events(
    config: &EditorConfig,
    initial: EqualizerState,
    events: &[PointerEvent],
    width: f64,
    height: f64,
) -> DragReport {
    let mut view = EqVisualizer::from_config(config);
    view.resize(width, height);

    let mut state = initial;
    let mut responses = Vec::with_capacity(events.len());
    for event in events {
        let current = state;
        let response = view.handle_pointer(&current, *event, |updated| state = updated);
        responses.push(response);
    }

    DragReport { responses, state }
}

/// Print the response curve as JSON.
pub fn curve(config: &EditorConfig, state: Option<&Path>, width: f64, height: f64) -> Result<()> {
    let state = load_state(state)?;
    let report = build_curve(config, &state, width, height)?;
    info!(
        "Rendered {} samples on {}x{}",
        report.samples.len(),
        width,
        height
    );
    print_json(&report)
}

/// Print the control points as JSON.
pub fn points(config: &EditorConfig, state: Option<&Path>, width: f64, height: f64) -> Result<()> {
    let state = load_state(state)?;
    let report = build_curve(config, &state, width, height)?;
    print_json(&report.points)
}

/// Replay a pointer event script and print the final state.
pub fn drag(
    config: &EditorConfig,
    state: &Path,
    events: &Path,
    width: f64,
    height: f64,
) -> Result<()> {
    let initial = load_state(Some(state))?;
    let events = load_events(events)?;
    let report = replay_events(config, initial, &events, width, height);

    let handled = report.responses.iter().filter(|r| r.is_handled()).count();
    info!("Replayed {} events, {} handled", events.len(), handled);
    print_json(&report)
}

/// Apply a dial angle to one band parameter and print the new state.
pub fn dial(band: BandId, param: DialParam, angle: f64, state: Option<&Path>) -> Result<()> {
    let state = load_state(state)?;
    let updated = apply_dial(&state, band, param, angle)?;
    info!("Dial {} {} -> {}", band, param, angle);
    print_json(&updated)
}

/// Print the default state.
pub fn reset() -> Result<()> {
    print_json(&EqualizerState::default())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
