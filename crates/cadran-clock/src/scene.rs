use cadran_engine::canvas::Surface;

use crate::error::ClockError;
use crate::params::{controls, Control, ParamKey, RenderParams};
use crate::renderer::ClockRenderer;
use crate::time::{SystemClock, TimeSample, TimeSource};

/// Host-side owner of a clock: surface, params, renderer and visibility.
///
/// The host's frame loop calls [`update`](Self::update); a control panel calls
/// [`set`](Self::set), which redraws at once so edits show without waiting
/// for the next tick.
pub struct ClockScene<S: Surface, T: TimeSource = SystemClock> {
    surface: S,
    renderer: ClockRenderer<T>,
    params: RenderParams,
    active: bool,
    last_drawn: Option<TimeSample>,
}

impl<S: Surface> ClockScene<S, SystemClock> {
    pub fn new(surface: S) -> Self {
        Self::with_renderer(surface, ClockRenderer::new())
    }
}

impl<S: Surface, T: TimeSource> ClockScene<S, T> {
    /// Params start at the defaults for the surface's current size.
    pub fn with_renderer(surface: S, renderer: ClockRenderer<T>) -> Self {
        let params = RenderParams::for_viewport(surface.viewport());
        Self { surface, renderer, params, active: true, last_drawn: None }
    }

    #[inline]
    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Replaces all params and redraws.
    pub fn set_params(&mut self, params: RenderParams) {
        self.params = params;
        self.redraw();
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Inactive scenes skip their frames until re-activated.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            log::debug!("clock scene {}", if active { "activated" } else { "deactivated" });
        }
        self.active = active;
    }

    /// Time shown by the most recent frame, if any.
    #[inline]
    pub fn last_drawn(&self) -> Option<TimeSample> {
        self.last_drawn
    }

    /// Panel description for the current surface size.
    pub fn controls(&self) -> Vec<Control> {
        controls(self.surface.viewport())
    }

    /// Per-frame entry point. Returns `false` when the frame was skipped.
    pub fn update(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.redraw();
        true
    }

    /// Applies a control-panel change and redraws.
    ///
    /// Rejected values leave params and surface untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<ParamKey, ClockError> {
        let key = self.params.apply(key, value, self.surface.viewport())?;
        self.redraw();
        Ok(key)
    }

    fn redraw(&mut self) {
        self.last_drawn = Some(self.renderer.render(&mut self.surface, &self.params));
    }
}

#[cfg(test)]
mod tests {
    use cadran_engine::coords::Viewport;
    use cadran_engine::scene::{DrawCmd, RecordingSurface};
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::time::FixedClock;
    use crate::zone::Zone;

    fn scene() -> ClockScene<RecordingSurface, FixedClock> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).single().unwrap());
        ClockScene::with_renderer(
            RecordingSurface::new(Viewport::new(500.0, 500.0)),
            ClockRenderer::with_time_source(clock),
        )
    }

    fn label_of(scene: &ClockScene<RecordingSurface, FixedClock>) -> Option<String> {
        scene.surface().draw_list().items().iter().find_map(|c| match c {
            DrawCmd::FillText(t) => Some(t.text.clone()),
            _ => None,
        })
    }

    #[test]
    fn defaults_follow_surface_size() {
        let s = scene();
        assert_eq!(s.params().center_y, 70.0);
        assert!(s.surface().draw_list().is_empty());
    }

    #[test]
    fn update_draws_when_active() {
        let mut s = scene();
        assert!(s.update());
        assert_eq!(s.last_drawn(), Some(TimeSample::new(9, 0, 0)));
        assert_eq!(label_of(&s).as_deref(), Some("FR"));
    }

    #[test]
    fn inactive_scene_skips_frames() {
        let mut s = scene();
        s.set_active(false);
        assert!(!s.is_active());
        assert!(!s.update());
        assert!(s.surface().draw_list().is_empty());
        assert_eq!(s.last_drawn(), None);

        s.set_active(true);
        assert!(s.update());
    }

    #[test]
    fn set_redraws_immediately() {
        let mut s = scene();
        assert_eq!(s.set("timezone", "Asia/Tokyo"), Ok(ParamKey::Timezone));
        assert_eq!(s.params().timezone, Zone::Tokyo);
        assert_eq!(label_of(&s).as_deref(), Some("JP"));
        // 08:00 UTC is 17:00 in Tokyo.
        assert_eq!(s.last_drawn(), Some(TimeSample::new(17, 0, 0)));
    }

    #[test]
    fn rejected_set_leaves_frame_alone() {
        let mut s = scene();
        s.update();
        let before = s.surface().draw_list().clone();
        assert!(s.set("timezone", "Atlantis").is_err());
        assert_eq!(s.surface().draw_list(), &before);
        assert_eq!(s.params().timezone, Zone::Paris);
    }

    #[test]
    fn controls_use_surface_height() {
        let s = scene();
        assert_eq!(s.controls().len(), 7);
    }

    #[test]
    fn set_params_replaces_and_draws() {
        let mut s = scene();
        let mut p = s.params().clone();
        p.timezone = Zone::NewYork;
        s.set_params(p);
        assert_eq!(label_of(&s).as_deref(), Some("USA"));
        let surface = s.into_surface();
        assert!(!surface.draw_list().is_empty());
    }
}
