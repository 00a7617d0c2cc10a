use crate::component::{Component, ComponentRef};
use crate::geometry::{Bounds, Size};

use super::Layout;
use super::core::SizeProbe;

/// Five-region layout: north and south span the full content width, west
/// and east take their preferred widths in the band between them, and
/// center fills whatever remains.
///
/// Every region is optional. An absent or invisible region contributes
/// neither space nor gap; the center and adjacent regions absorb its area.
#[derive(Default)]
pub struct Border {
    center: Option<ComponentRef>,
    north: Option<ComponentRef>,
    south: Option<ComponentRef>,
    east: Option<ComponentRef>,
    west: Option<ComponentRef>,
    hgap: f32,
    vgap: f32,
}

impl Border {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, component: ComponentRef) -> Self {
        self.center = Some(component);
        self
    }

    pub fn north(mut self, component: ComponentRef) -> Self {
        self.north = Some(component);
        self
    }

    pub fn south(mut self, component: ComponentRef) -> Self {
        self.south = Some(component);
        self
    }

    pub fn east(mut self, component: ComponentRef) -> Self {
        self.east = Some(component);
        self
    }

    pub fn west(mut self, component: ComponentRef) -> Self {
        self.west = Some(component);
        self
    }

    pub fn hgap(mut self, hgap: f32) -> Self {
        self.hgap = hgap;
        self
    }

    pub fn vgap(mut self, vgap: f32) -> Self {
        self.vgap = vgap;
        self
    }

    fn shown(slot: &Option<ComponentRef>) -> Option<&ComponentRef> {
        slot.as_ref().filter(|region| region.borrow().is_visible())
    }

    fn envelope(&self, container: &dyn Component, probe: SizeProbe) -> Size {
        let insets = container.insets();
        let mut width = 0.0f32;
        let mut height = 0.0f32;

        if let Some(east) = Self::shown(&self.east) {
            let size = probe(&*east.borrow());
            width += size.width + self.hgap;
            height = height.max(size.height);
        }
        if let Some(west) = Self::shown(&self.west) {
            let size = probe(&*west.borrow());
            width += size.width + self.hgap;
            height = height.max(size.height);
        }
        if let Some(center) = Self::shown(&self.center) {
            let size = probe(&*center.borrow());
            width += size.width;
            height = height.max(size.height);
        }
        if let Some(north) = Self::shown(&self.north) {
            let size = probe(&*north.borrow());
            width = width.max(size.width);
            height += size.height + self.vgap;
        }
        if let Some(south) = Self::shown(&self.south) {
            let size = probe(&*south.borrow());
            width = width.max(size.width);
            height += size.height + self.vgap;
        }

        Size::new(width + insets.horizontal(), height + insets.vertical())
    }
}

impl Layout for Border {
    fn preferred(&self, container: &dyn Component) -> Size {
        self.envelope(container, |c| c.preferred_size())
    }

    fn minimum(&self, container: &dyn Component) -> Size {
        self.envelope(container, |c| c.minimum_size())
    }

    fn maximum(&self, container: &dyn Component) -> Size {
        self.envelope(container, |c| c.maximum_size())
    }

    fn layout(&self, container: &dyn Component) {
        let bounds = container.bounds();
        let insets = container.insets();

        let mut top = insets.top;
        let mut bottom = bounds.height - insets.bottom;
        let mut left = insets.left;
        let mut right = bounds.width - insets.right;

        if let Some(north) = Self::shown(&self.north) {
            let height = north.borrow().preferred_size().height;
            north
                .borrow_mut()
                .set_bounds(Bounds::new(left, top, right - left, height).into());
            top += height + self.vgap;
        }
        if let Some(south) = Self::shown(&self.south) {
            let height = south.borrow().preferred_size().height;
            south
                .borrow_mut()
                .set_bounds(Bounds::new(left, bottom - height, right - left, height).into());
            bottom -= height + self.vgap;
        }
        if let Some(east) = Self::shown(&self.east) {
            let width = east.borrow().preferred_size().width;
            east.borrow_mut()
                .set_bounds(Bounds::new(right - width, top, width, bottom - top).into());
            right -= width + self.hgap;
        }
        if let Some(west) = Self::shown(&self.west) {
            let width = west.borrow().preferred_size().width;
            west.borrow_mut()
                .set_bounds(Bounds::new(left, top, width, bottom - top).into());
            left += width + self.hgap;
        }
        if let Some(center) = Self::shown(&self.center) {
            center
                .borrow_mut()
                .set_bounds(Bounds::new(left, top, right - left, bottom - top).into());
        }
    }
}
