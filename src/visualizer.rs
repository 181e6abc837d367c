//! Host-facing equalizer view
//!
//! Bundles the compositor, the curve sampler, the pointer editor and the
//! current surface size so a UI only has to forward events and draw what
//! comes back. The parameter state itself stays with the host.

use crate::config::EditorConfig;
use crate::dsp::{
    BiquadResponse, CurveSampler, EqualizerState, MagnitudeResponse, ResponseCompositor,
    ResponseSample,
};
use crate::editor::{control_points, ControlPoint, EditorResponse, PointerEditor, PointerEvent};
use crate::error::Result;
use crate::geometry::{Point, Surface};
use log::debug;

/// Equalizer curve view with drag editing
#[derive(Debug, Clone)]
pub struct EqVisualizer<R> {
    compositor: ResponseCompositor<R>,
    sampler: CurveSampler,
    editor: PointerEditor,
    surface: Surface,
}

impl EqVisualizer<BiquadResponse> {
    /// View backed by the built-in biquad response
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.response(), config)
    }
}

impl<R: MagnitudeResponse> EqVisualizer<R> {
    /// View backed by a host-provided response primitive
    pub fn new(response: R, config: &EditorConfig) -> Self {
        Self {
            compositor: ResponseCompositor::new(response),
            sampler: config.sampler(),
            editor: PointerEditor::new(config.hit_radius),
            surface: Surface::default(),
        }
    }

    pub fn compositor(&self) -> &ResponseCompositor<R> {
        &self.compositor
    }

    pub fn editor(&self) -> &PointerEditor {
        &self.editor
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Record a new surface size; redraw afterwards
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface = Surface::new(width, height);
        debug!("[VIEW] Resized to {}x{}", width, height);
    }

    /// Response curve samples for the current surface
    ///
    /// Empty until the surface has a size. An error means the host cannot
    /// provide a response: skip drawing the curve, dials still work.
    pub fn curve(&self, state: &EqualizerState) -> Result<Vec<ResponseSample>> {
        self.sampler.render(&self.compositor, state, self.surface)
    }

    /// Response curve as surface points
    pub fn polyline(&self, state: &EqualizerState) -> Result<Vec<Point>> {
        self.sampler.polyline(&self.compositor, state, self.surface)
    }

    /// Marker positions for the three bands
    pub fn control_points(&self, state: &EqualizerState) -> Result<Vec<ControlPoint>> {
        control_points(&self.compositor, state, self.surface)
    }

    /// Forward a pointer event to the editor
    pub fn handle_pointer<F>(
        &mut self,
        state: &EqualizerState,
        event: PointerEvent,
        on_change: F,
    ) -> EditorResponse
    where
        F: FnMut(EqualizerState),
    {
        self.editor
            .handle_event(&self.compositor, state, self.surface, event, on_change)
    }

    /// Restore the default bands through the change callback
    pub fn reset<F>(&mut self, on_change: F)
    where
        F: FnMut(EqualizerState),
    {
        self.editor.reset(on_change);
    }
}
