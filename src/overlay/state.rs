use eframe::egui;
use serde::{Deserialize, Serialize};

/// Offset of the panel's top-left corner inside its mount point, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: f32,
    pub y: f32,
}

impl WindowPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<WindowPosition> for egui::Pos2 {
    fn from(p: WindowPosition) -> Self {
        egui::pos2(p.x, p.y)
    }
}

impl From<egui::Pos2> for WindowPosition {
    fn from(p: egui::Pos2) -> Self {
        Self::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl WindowSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum, used to floor a size at the configured minimum.
    pub fn at_least(self, min: WindowSize) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }
}

impl From<WindowSize> for egui::Vec2 {
    fn from(s: WindowSize) -> Self {
        egui::vec2(s.width, s.height)
    }
}

/// What the pointer is currently doing to the panel.
///
/// Drag and resize track the accumulated pointer delta from where the
/// gesture started, so clamping never makes the panel drift from the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    Dragging {
        origin: WindowPosition,
        delta: egui::Vec2,
    },
    Resizing {
        origin: WindowSize,
        delta: egui::Vec2,
    },
}

/// Position and size of the floating panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    position: WindowPosition,
    size: WindowSize,
    minimum: WindowSize,
    interaction: Interaction,
}

impl PanelState {
    pub fn new(position: WindowPosition, size: WindowSize, minimum: WindowSize) -> Self {
        Self {
            position,
            size: size.at_least(minimum),
            minimum,
            interaction: Interaction::Idle,
        }
    }

    pub fn position(&self) -> WindowPosition {
        self.position
    }

    pub fn size(&self) -> WindowSize {
        self.size
    }

    pub fn minimum(&self) -> WindowSize {
        self.minimum
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.interaction, Interaction::Resizing { .. })
    }

    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(self.position.into(), self.size.into())
    }

    pub fn begin_drag(&mut self) {
        self.interaction = Interaction::Dragging {
            origin: self.position,
            delta: egui::Vec2::ZERO,
        };
    }

    /// Move the panel by `delta` relative to the previous pointer sample.
    /// Starts a drag if none is in progress.
    pub fn drag_by(&mut self, delta: egui::Vec2, bounds: egui::Rect) {
        if !self.is_dragging() {
            self.begin_drag();
        }
        if let Interaction::Dragging { origin, delta: total } = &mut self.interaction {
            *total += delta;
            let target = egui::Pos2::from(*origin) + *total;
            self.position = clamp_position(target, self.size, bounds);
        }
    }

    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            self.interaction = Interaction::Idle;
            tracing::debug!(x = self.position.x, y = self.position.y, "panel moved");
        }
    }

    pub fn begin_resize(&mut self) {
        self.interaction = Interaction::Resizing {
            origin: self.size,
            delta: egui::Vec2::ZERO,
        };
    }

    /// Grow or shrink the panel by `delta`. Starts a resize if none is in
    /// progress. The result never goes below the minimum size.
    pub fn resize_by(&mut self, delta: egui::Vec2) {
        if !self.is_resizing() {
            self.begin_resize();
        }
        if let Interaction::Resizing { origin, delta: total } = &mut self.interaction {
            *total += delta;
            let target = WindowSize::new(origin.width + total.x, origin.height + total.y);
            self.size = target.at_least(self.minimum);
        }
    }

    /// Set the size directly, floored at the minimum.
    pub fn resize_to(&mut self, size: WindowSize) {
        self.size = size.at_least(self.minimum);
    }

    pub fn end_resize(&mut self) {
        if self.is_resizing() {
            self.interaction = Interaction::Idle;
            tracing::debug!(
                width = self.size.width,
                height = self.size.height,
                "panel resized"
            );
        }
    }

    /// Pull the panel back inside `bounds`, e.g. after the host window shrank.
    /// Left alone while a drag is in progress.
    pub fn clamp_into(&mut self, bounds: egui::Rect) {
        if self.is_dragging() {
            return;
        }
        self.position = clamp_position(self.position.into(), self.size, bounds);
    }
}

fn clamp_position(target: egui::Pos2, size: WindowSize, bounds: egui::Rect) -> WindowPosition {
    let max_x = (bounds.max.x - size.width).max(bounds.min.x);
    let max_y = (bounds.max.y - size.height).max(bounds.min.y);
    WindowPosition::new(
        target.x.clamp(bounds.min.x, max_x),
        target.y.clamp(bounds.min.y, max_y),
    )
}
