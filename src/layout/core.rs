use crate::component::Component;
use crate::geometry::{Bounds, Size};

/// Contract shared by every layout strategy.
///
/// Instances hold configuration fixed at construction and are never mutated
/// by a call; all four operations are total functions. Degenerate geometry
/// (insets larger than the container, too many items for the space) flows
/// through the arithmetic as zero or negative dimensions rather than
/// failing.
pub trait Layout {
    /// Size the container would need to fit its children at their
    /// preferred sizes, plus gaps and insets.
    fn preferred(&self, container: &dyn Component) -> Size;

    /// Same shape as [`Layout::preferred`] using minimum sizes.
    fn minimum(&self, container: &dyn Component) -> Size;

    /// Same shape as [`Layout::preferred`] using maximum sizes.
    fn maximum(&self, container: &dyn Component) -> Size;

    /// Assign bounds to each visible child. Never alters the container's
    /// own bounds, and never descends into grandchildren.
    fn layout(&self, container: &dyn Component);
}

/// Size accessor used to run one packing pass per metric.
pub(crate) type SizeProbe = fn(&dyn Component) -> Size;

/// Content rect of a container, in the container's own coordinate space.
pub(crate) fn content_rect(container: &dyn Component) -> Bounds {
    let bounds = container.bounds();
    let insets = container.insets();
    Bounds::new(
        insets.left,
        insets.top,
        bounds.width - insets.horizontal(),
        bounds.height - insets.vertical(),
    )
}

/// Total gap space between `count` adjacent slots.
pub(crate) fn gap_total(count: usize, gap: f32) -> f32 {
    if count > 1 {
        gap * (count - 1) as f32
    } else {
        0.0
    }
}

/// Resolve grid dimensions from the current item count. Zero means unset.
///
/// With rows given, columns become `ceil(count / rows)`, and vice versa.
/// With neither given the result is `(count, 0)` — a historical default
/// that behaves as a single column; callers clamp the divisor, not the
/// reported pair.
pub(crate) fn infer_dimensions(count: usize, rows: usize, columns: usize) -> (usize, usize) {
    if rows > 0 && columns == 0 {
        (rows, count.div_ceil(rows))
    } else if columns > 0 && rows == 0 {
        (count.div_ceil(columns), columns)
    } else if rows == 0 && columns == 0 {
        (count, 0)
    } else {
        (rows, columns)
    }
}
