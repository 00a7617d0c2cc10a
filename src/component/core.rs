use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::{Bounds, BoundsPatch, Insets, Size};
use crate::layout::Layout;
use crate::metrics::LayoutMetrics;

/// Capability set queried and mutated by layout algorithms.
///
/// Everything a strategy needs from a component goes through this trait:
/// current bounds, negotiated sizes, visibility, and the `do_layout`
/// hand-off for components that are themselves containers.
pub trait Component {
    fn bounds(&self) -> Bounds;

    /// Merge `patch` into the current bounds. Omitted fields keep their
    /// previous values; the write is a single replacement, so no partially
    /// updated state is ever observable.
    fn set_bounds(&mut self, patch: BoundsPatch);

    fn preferred_size(&self) -> Size;
    fn minimum_size(&self) -> Size;
    fn maximum_size(&self) -> Size;
    fn is_visible(&self) -> bool;
    fn insets(&self) -> Insets;

    /// Run the component's own layout algorithm over its children, if it
    /// has one. Parents never call this on behalf of their children; deeper
    /// layout happens only when the caller walks the tree explicitly.
    fn do_layout(&mut self);
}

/// Shared handle to a component. The crate is single-threaded by design,
/// so handles are `Rc<RefCell<_>>` rather than anything lockable.
pub type ComponentRef = Rc<RefCell<dyn Component>>;

pub fn component_ref<C: Component + 'static>(component: C) -> ComponentRef {
    Rc::new(RefCell::new(component))
}

/// Leaf component with fixed negotiated sizes.
///
/// Minimum defaults to the preferred size and maximum to [`Size::MAX`]
/// until overridden.
#[derive(Debug, Clone)]
pub struct Block {
    bounds: Bounds,
    preferred: Size,
    minimum: Option<Size>,
    maximum: Option<Size>,
    visible: bool,
}

impl Block {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Bounds::default(),
            preferred: Size::new(width, height),
            minimum: None,
            maximum: None,
            visible: true,
        }
    }

    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Component for Block {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn set_bounds(&mut self, patch: BoundsPatch) {
        self.bounds = patch.apply(self.bounds);
    }

    fn preferred_size(&self) -> Size {
        self.preferred
    }

    fn minimum_size(&self) -> Size {
        self.minimum.unwrap_or(self.preferred)
    }

    fn maximum_size(&self) -> Size {
        self.maximum.unwrap_or(Size::MAX)
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn insets(&self) -> Insets {
        Insets::ZERO
    }

    fn do_layout(&mut self) {}
}

/// Container: a component that owns a child list and delegates their
/// arrangement to a layout algorithm.
///
/// The algorithm is configured with its own handles to the children; the
/// panel's list exists for enumeration and for the metrics count, and the
/// two are expected to refer to the same components.
pub struct Panel {
    bounds: Bounds,
    insets: Insets,
    visible: bool,
    layout: Option<Rc<dyn Layout>>,
    children: Vec<ComponentRef>,
    metrics: LayoutMetrics,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            insets: Insets::ZERO,
            visible: true,
            layout: None,
            children: Vec::new(),
            metrics: LayoutMetrics::new(),
        }
    }

    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Some(Rc::new(layout));
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_children(mut self, children: Vec<ComponentRef>) -> Self {
        self.children = children;
        self
    }

    pub fn add_child(&mut self, child: ComponentRef) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[ComponentRef] {
        &self.children
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Panel {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn set_bounds(&mut self, patch: BoundsPatch) {
        self.bounds = patch.apply(self.bounds);
    }

    fn preferred_size(&self) -> Size {
        match &self.layout {
            Some(layout) => layout.preferred(self),
            None => self.bounds.size(),
        }
    }

    fn minimum_size(&self) -> Size {
        match &self.layout {
            Some(layout) => layout.minimum(self),
            None => self.bounds.size(),
        }
    }

    fn maximum_size(&self) -> Size {
        match &self.layout {
            Some(layout) => layout.maximum(self),
            None => Size::MAX,
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn insets(&self) -> Insets {
        self.insets
    }

    fn do_layout(&mut self) {
        let Some(layout) = self.layout.clone() else {
            return;
        };
        layout.layout(self);

        let placed = self
            .children
            .iter()
            .filter(|child| child.borrow().is_visible())
            .count();
        self.metrics.record_pass(placed);
    }
}
