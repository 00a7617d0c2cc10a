use serde::{Deserialize, Serialize};

/// Width/height pair produced by size negotiation.
///
/// Non-negative by convention. Values are never validated: degenerate input
/// geometry flows through the arithmetic instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Sentinel for components that impose no upper cap.
    pub const MAX: Self = Self {
        width: f32::MAX,
        height: f32::MAX,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Position and extent of a component, in its parent's coordinate space.
///
/// The content origin of a container sits at `(insets.left, insets.top)`;
/// a container's own x/y never leak into its children's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrink on all four sides. May produce a zero or negative extent when
    /// the insets exceed the bounds; callers pass that through unclamped.
    pub fn inset_by(&self, insets: Insets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: self.width - insets.horizontal(),
            height: self.height - insets.vertical(),
        }
    }
}

/// Partial bounds update. Only the supplied fields are written; omitted
/// fields keep their previous values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoundsPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl BoundsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Overlay the supplied fields onto `current`, producing the merged
    /// bounds in one step so the caller can write it back atomically.
    pub fn apply(&self, current: Bounds) -> Bounds {
        Bounds {
            x: self.x.unwrap_or(current.x),
            y: self.y.unwrap_or(current.y),
            width: self.width.unwrap_or(current.width),
            height: self.height.unwrap_or(current.height),
        }
    }
}

impl From<Bounds> for BoundsPatch {
    fn from(bounds: Bounds) -> Self {
        Self {
            x: Some(bounds.x),
            y: Some(bounds.y),
            width: Some(bounds.width),
            height: Some(bounds.height),
        }
    }
}

/// Fixed padding between a container's outer bounds and the area available
/// to its children. Queried once per layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Insets {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
