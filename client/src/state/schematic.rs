//! Schematic viewer state: selection, hover, auto-play and the view transform.
//!
//! The SVG is drawn at container size with `transform-origin: 0 0`; a
//! [`ViewTransform`] maps drawing pixels to container pixels as
//! `screen = drawing * scale + (x, y)`.

#[cfg(test)]
#[path = "schematic_test.rs"]
mod schematic_test;

use crate::content::schematic::{COMPONENTS, component};
use crate::util::tween::Lerp;

pub const FOCUS_SCALE: f64 = 2.2;
pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 4.0;
pub const ZOOM_STEP: f64 = 1.25;
pub const TWEEN_MS: f64 = 600.0;
pub const AUTOPLAY_INTERVAL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, scale: 1.0 };

    /// Drawing-space point to container pixels.
    #[must_use]
    pub fn apply(&self, px: f64, py: f64) -> (f64, f64) {
        (px * self.scale + self.x, py * self.scale + self.y)
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("translate({:.2}px, {:.2}px) scale({:.4})", self.x, self.y, self.scale)
    }
}

impl Lerp for ViewTransform {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            scale: self.scale.lerp(to.scale, t),
        }
    }
}

/// Container size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1000.0, height: 500.0 }
    }
}

/// Transform that centers normalized point `(nx, ny)` at `scale`.
#[must_use]
pub fn focus_transform(viewport: Viewport, nx: f64, ny: f64, scale: f64) -> ViewTransform {
    ViewTransform {
        x: viewport.width / 2.0 - nx * viewport.width * scale,
        y: viewport.height / 2.0 - ny * viewport.height * scale,
        scale,
    }
}

/// Rescale `t` to `scale` keeping the container center fixed.
#[must_use]
pub fn zoom_about_center(t: ViewTransform, viewport: Viewport, scale: f64) -> ViewTransform {
    let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    let (cx, cy) = (viewport.width / 2.0, viewport.height / 2.0);
    let wx = (cx - t.x) / t.scale;
    let wy = (cy - t.y) / t.scale;
    ViewTransform { x: cx - wx * scale, y: cy - wy * scale, scale }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchematicView {
    pub viewport: Viewport,
    pub selected: Option<&'static str>,
    pub hovered: Option<&'static str>,
    /// Transform the view is animating toward.
    pub target: ViewTransform,
    pub autoplay: bool,
    cursor: usize,
    /// Registry ids found in the loaded SVG, in registry order.
    available: Vec<&'static str>,
}

impl Default for SchematicView {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            selected: None,
            hovered: None,
            target: ViewTransform::IDENTITY,
            autoplay: false,
            cursor: 0,
            available: COMPONENTS.iter().map(|c| c.id).collect(),
        }
    }
}

impl SchematicView {
    /// Restrict interaction to the ids bound in the loaded SVG.
    pub fn set_available<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let ids: Vec<&str> = ids.into_iter().collect();
        self.available = COMPONENTS
            .iter()
            .map(|c| c.id)
            .filter(|id| ids.contains(id))
            .collect();
        self.cursor = 0;
    }

    #[must_use]
    pub fn available(&self) -> &[&'static str] {
        &self.available
    }

    /// User click: toggles selection and stops auto-play.
    pub fn click(&mut self, id: &str) {
        self.autoplay = false;
        if self.selected == Some(id) {
            self.reset();
        } else {
            self.select(id);
        }
    }

    /// Select `id` and focus on it. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        let Some(c) = component(id).filter(|c| self.available.contains(&c.id)) else {
            return;
        };
        self.selected = Some(c.id);
        self.target = focus_transform(self.viewport, c.x, c.y, FOCUS_SCALE);
        if let Some(pos) = self.available.iter().position(|a| *a == c.id) {
            self.cursor = pos + 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected = None;
        self.target = ViewTransform::IDENTITY;
    }

    pub fn hover(&mut self, id: Option<&str>) {
        self.hovered = id.and_then(component).map(|c| c.id);
    }

    /// Auto-play step: select the next available component in registry order.
    pub fn advance(&mut self) {
        if self.available.is_empty() {
            return;
        }
        let id = self.available[self.cursor % self.available.len()];
        self.select(id);
    }

    pub fn set_autoplay(&mut self, on: bool) {
        self.autoplay = on;
    }

    pub fn zoom_by(&mut self, factor: f64) {
        self.target = zoom_about_center(self.target, self.viewport, self.target.scale * factor);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / ZOOM_STEP);
    }

    /// Container resized: refocus the selection for the new size.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        self.viewport = viewport;
        if let Some(c) = self.selected.and_then(component) {
            self.target = focus_transform(viewport, c.x, c.y, FOCUS_SCALE);
        }
    }

    /// Visual state for a hotspot element (`data-state` attribute).
    #[must_use]
    pub fn hotspot_state(&self, id: &str) -> &'static str {
        match self.selected {
            Some(sel) if sel == id => "selected",
            Some(_) => "dimmed",
            None if self.hovered == Some(id) => "hover",
            None => "idle",
        }
    }
}
