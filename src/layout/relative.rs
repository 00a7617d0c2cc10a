use crate::component::Component;
use crate::geometry::Size;

use super::Layout;

const SIDE: f32 = 100.0;

/// Placeholder strategy: every size query answers 100 x 100 and `layout`
/// writes nothing. The smallest conforming implementation of the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct Relative;

impl Layout for Relative {
    fn preferred(&self, _container: &dyn Component) -> Size {
        Size::new(SIDE, SIDE)
    }

    fn minimum(&self, _container: &dyn Component) -> Size {
        Size::new(SIDE, SIDE)
    }

    fn maximum(&self, _container: &dyn Component) -> Size {
        Size::new(SIDE, SIDE)
    }

    fn layout(&self, _container: &dyn Component) {}
}
