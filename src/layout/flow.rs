use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentRef};
use crate::geometry::{Bounds, Size};

use super::Layout;
use super::core::{SizeProbe, content_rect, gap_total};

/// Horizontal placement of a packed row within the content width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Line-wrapping flow layout.
///
/// Items are packed greedily into rows: a row closes when the next visible
/// item would push the running width past the available content width.
/// Items keep their probed size and anchor to the top of their row.
///
/// Sizing is a function of the container's current width, never a cached
/// intrinsic: a container with no width reports its natural single-row
/// size instead.
#[derive(Default)]
pub struct Flow {
    alignment: Alignment,
    items: Vec<ComponentRef>,
    hgap: f32,
    vgap: f32,
}

/// One closed row: the items that fit, their probed sizes, and the packed
/// group's extent.
#[derive(Default)]
struct PackedRow {
    entries: Vec<(ComponentRef, Size)>,
    width: f32,
    height: f32,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn items(mut self, items: Vec<ComponentRef>) -> Self {
        self.items = items;
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

    /// Greedy row-packing. Invisible items never occupy row space and
    /// never force a break.
    fn pack(&self, available: f32, probe: SizeProbe) -> Vec<PackedRow> {
        let mut rows = Vec::new();
        let mut row = PackedRow::default();

        for item in &self.items {
            let component = item.borrow();
            if !component.is_visible() {
                continue;
            }
            let size = probe(&*component);
            drop(component);

            if !row.entries.is_empty() && row.width + self.hgap + size.width > available {
                rows.push(std::mem::take(&mut row));
            }
            if !row.entries.is_empty() {
                row.width += self.hgap;
            }
            row.width += size.width;
            row.height = row.height.max(size.height);
            row.entries.push((item.clone(), size));
        }
        if !row.entries.is_empty() {
            rows.push(row);
        }
        rows
    }

    fn envelope(&self, container: &dyn Component, probe: SizeProbe) -> Size {
        let bounds = container.bounds();
        let insets = container.insets();

        // Wrap against the width the container already has; with no width
        // set, report the natural unbroken row instead.
        let available = if bounds.width > 0.0 {
            bounds.width - insets.horizontal()
        } else {
            f32::INFINITY
        };
        let rows = self.pack(available, probe);

        let width = if bounds.width > 0.0 {
            bounds.width
        } else {
            rows.iter().fold(0.0f32, |acc, row| acc.max(row.width)) + insets.horizontal()
        };
        let height = rows.iter().map(|row| row.height).sum::<f32>()
            + gap_total(rows.len(), self.vgap)
            + insets.vertical();

        Size::new(width, height)
    }
}

impl Layout for Flow {
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
        let content = content_rect(container);
        let rows = self.pack(content.width, |c| c.preferred_size());

        let mut y = content.y;
        for row in rows {
            let mut x = match self.alignment {
                Alignment::Left => content.x,
                Alignment::Center => content.x + (content.width - row.width) / 2.0,
                Alignment::Right => content.x + content.width - row.width,
            };
            for (item, size) in &row.entries {
                item.borrow_mut()
                    .set_bounds(Bounds::new(x, y, size.width, size.height).into());
                x += size.width + self.hgap;
            }
            y += row.height + self.vgap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Block, Panel, component_ref};
    use crate::geometry::Insets;

    fn frame(width: f32, height: f32) -> Panel {
        Panel::new().with_bounds(Bounds::new(0.0, 0.0, width, height))
    }

    #[test]
    fn rows_wrap_when_the_next_item_would_overflow() {
        let items: Vec<ComponentRef> = (0..5)
            .map(|_| component_ref(Block::new(40.0, 10.0)))
            .collect();
        let flow = Flow::new().items(items.clone());

        flow.layout(&frame(100.0, 100.0));

        // Two per row, fifth on its own row.
        assert_eq!(items[0].borrow().bounds(), Bounds::new(0.0, 0.0, 40.0, 10.0));
        assert_eq!(items[1].borrow().bounds(), Bounds::new(40.0, 0.0, 40.0, 10.0));
        assert_eq!(items[2].borrow().bounds(), Bounds::new(0.0, 10.0, 40.0, 10.0));
        assert_eq!(items[3].borrow().bounds(), Bounds::new(40.0, 10.0, 40.0, 10.0));
        assert_eq!(items[4].borrow().bounds(), Bounds::new(0.0, 20.0, 40.0, 10.0));
    }

    #[test]
    fn wrapping_preserves_item_order() {
        let widths = [30.0, 55.0, 20.0, 70.0, 10.0, 45.0, 25.0];
        let items: Vec<ComponentRef> = widths
            .iter()
            .map(|w| component_ref(Block::new(*w, 10.0)))
            .collect();
        let flow = Flow::new().hgap(5.0).items(items.clone());

        flow.layout(&frame(90.0, 200.0));

        // Reading children back in row-major visual order must reproduce
        // the original sequence.
        let mut placed: Vec<(f32, f32)> = items
            .iter()
            .map(|item| {
                let b = item.borrow().bounds();
                (b.y, b.x)
            })
            .collect();
        let mut sorted = placed.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(placed, sorted);

        placed.dedup_by(|a, b| a.0 == b.0);
        assert!(placed.len() > 1, "expected at least two rows");
    }

    #[test]
    fn centered_rows_straddle_the_content_midpoint() {
        let items = vec![
            component_ref(Block::new(30.0, 10.0)),
            component_ref(Block::new(20.0, 10.0)),
        ];
        let flow = Flow::new()
            .alignment(Alignment::Center)
            .hgap(10.0)
            .items(items.clone());
        let container = frame(200.0, 100.0);

        flow.layout(&container);

        let left = items[0].borrow().bounds().x;
        let right = items[1].borrow().bounds();
        let midpoint = (left + right.x + right.width) / 2.0;
        assert!((midpoint - 100.0).abs() < 1e-4);
    }

    #[test]
    fn right_alignment_packs_against_the_content_edge() {
        let items = vec![
            component_ref(Block::new(30.0, 10.0)),
            component_ref(Block::new(20.0, 10.0)),
        ];
        let flow = Flow::new()
            .alignment(Alignment::Right)
            .hgap(10.0)
            .items(items.clone());
        let container = frame(200.0, 100.0).with_insets(Insets::new(0.0, 0.0, 0.0, 8.0));

        flow.layout(&container);

        let last = items[1].borrow().bounds();
        assert_eq!(last.x + last.width, 192.0);
        assert_eq!(items[0].borrow().bounds().x, 132.0);
    }

    #[test]
    fn rows_track_their_tallest_item() {
        let items = vec![
            component_ref(Block::new(40.0, 10.0)),
            component_ref(Block::new(40.0, 30.0)),
            component_ref(Block::new(40.0, 15.0)),
        ];
        let flow = Flow::new().vgap(5.0).items(items.clone());

        flow.layout(&frame(100.0, 100.0));

        // First row is 30 tall, so the third item starts at 35.
        assert_eq!(items[2].borrow().bounds().y, 35.0);
    }

    #[test]
    fn invisible_items_neither_occupy_space_nor_break_rows() {
        let items = vec![
            component_ref(Block::new(40.0, 10.0)),
            component_ref(Block::new(90.0, 10.0).hidden()),
            component_ref(Block::new(40.0, 10.0)),
        ];
        let flow = Flow::new().items(items.clone());

        flow.layout(&frame(100.0, 100.0));

        assert_eq!(items[1].borrow().bounds(), Bounds::default());
        assert_eq!(items[2].borrow().bounds(), Bounds::new(40.0, 0.0, 40.0, 10.0));

        let preferred = flow.preferred(&frame(100.0, 100.0));
        assert_eq!(preferred, Size::new(100.0, 10.0));
    }

    #[test]
    fn preferred_height_follows_the_container_width() {
        let items: Vec<ComponentRef> = (0..4)
            .map(|_| component_ref(Block::new(40.0, 10.0)))
            .collect();
        let flow = Flow::new().items(items);

        // Four abreast, two rows of two, one per row.
        assert_eq!(flow.preferred(&frame(200.0, 0.0)).height, 10.0);
        assert_eq!(flow.preferred(&frame(80.0, 0.0)).height, 20.0);
        assert_eq!(flow.preferred(&frame(50.0, 0.0)).height, 40.0);
    }

    #[test]
    fn unsized_container_reports_the_natural_row() {
        let items: Vec<ComponentRef> = (0..3)
            .map(|_| component_ref(Block::new(40.0, 10.0)))
            .collect();
        let flow = Flow::new().hgap(5.0).items(items);
        let container = Panel::new().with_insets(Insets::uniform(2.0));

        let size = flow.preferred(&container);
        assert_eq!(size, Size::new(130.0 + 4.0, 10.0 + 4.0));
    }

    #[test]
    fn minimum_packs_minimum_sizes() {
        let items: Vec<ComponentRef> = (0..2)
            .map(|_| {
                component_ref(Block::new(60.0, 20.0).with_minimum(Size::new(30.0, 10.0)))
            })
            .collect();
        let flow = Flow::new().items(items);
        let container = frame(100.0, 100.0);

        // Preferred sizes wrap into two rows, minimum sizes fit on one.
        assert_eq!(flow.preferred(&container).height, 40.0);
        assert_eq!(flow.minimum(&container).height, 10.0);
    }
}
