use crate::component::{Component, ComponentRef};
use crate::geometry::{Bounds, Size};

use super::core::{SizeProbe, content_rect, gap_total, infer_dimensions};
use super::grid::Fill;
use super::Layout;

/// Grid with per-row and per-column natural sizing.
///
/// Dimension inference matches [`super::Grid`], but cells are not uniform:
/// a column is as wide as its widest visible item and a row as tall as its
/// tallest. Each item is assigned its cell's bounds exactly; there is no
/// separate stretch or anchor flag.
#[derive(Default)]
pub struct FlexGrid {
    rows: usize,
    columns: usize,
    items: Vec<ComponentRef>,
    fill: Fill,
    hgap: f32,
    vgap: f32,
}

impl FlexGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn items(mut self, items: Vec<ComponentRef>) -> Self {
        self.items = items;
        self
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
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

    /// Row/column counts as resolved for the current item count.
    pub fn dimensions(&self) -> (usize, usize) {
        infer_dimensions(self.items.len(), self.rows, self.columns)
    }

    fn cell_for(&self, index: usize, rows: usize, columns: usize) -> (usize, usize) {
        match self.fill {
            Fill::Horizontal => (index / columns, index % columns),
            Fill::Vertical => (index % rows, index / rows),
        }
    }

    /// Per-column widths and per-row heights in the probed metric.
    /// Invisible items occupy their slot but contribute nothing.
    fn tracks(&self, probe: SizeProbe) -> (Vec<f32>, Vec<f32>) {
        let (rows, columns) = self.dimensions();
        let (rows, columns) = (rows.max(1), columns.max(1));
        let mut column_widths: Vec<f32> = Vec::new();
        let mut row_heights: Vec<f32> = Vec::new();

        for (index, item) in self.items.iter().enumerate() {
            let component = item.borrow();
            if !component.is_visible() {
                continue;
            }
            let size = probe(&*component);
            let (row, column) = self.cell_for(index, rows, columns);
            if column >= column_widths.len() {
                column_widths.resize(column + 1, 0.0);
            }
            if row >= row_heights.len() {
                row_heights.resize(row + 1, 0.0);
            }
            column_widths[column] = column_widths[column].max(size.width);
            row_heights[row] = row_heights[row].max(size.height);
        }

        (column_widths, row_heights)
    }

    fn envelope(&self, container: &dyn Component, probe: SizeProbe) -> Size {
        let insets = container.insets();
        let (column_widths, row_heights) = self.tracks(probe);

        Size::new(
            column_widths.iter().sum::<f32>()
                + gap_total(column_widths.len(), self.hgap)
                + insets.horizontal(),
            row_heights.iter().sum::<f32>()
                + gap_total(row_heights.len(), self.vgap)
                + insets.vertical(),
        )
    }
}

impl Layout for FlexGrid {
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
        if self.items.is_empty() {
            return;
        }
        let content = content_rect(container);
        let (rows, columns) = self.dimensions();
        let (rows, columns) = (rows.max(1), columns.max(1));
        let (column_widths, row_heights) = self.tracks(|c| c.preferred_size());

        // Cumulative offsets for each track.
        let mut x_offsets = Vec::with_capacity(column_widths.len());
        let mut x = content.x;
        for width in &column_widths {
            x_offsets.push(x);
            x += width + self.hgap;
        }
        let mut y_offsets = Vec::with_capacity(row_heights.len());
        let mut y = content.y;
        for height in &row_heights {
            y_offsets.push(y);
            y += height + self.vgap;
        }

        for (index, item) in self.items.iter().enumerate() {
            if !item.borrow().is_visible() {
                continue;
            }
            let (row, column) = self.cell_for(index, rows, columns);
            let bounds = Bounds::new(
                x_offsets[column],
                y_offsets[row],
                column_widths[column],
                row_heights[row],
            );
            item.borrow_mut().set_bounds(bounds.into());
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
    fn rows_and_columns_take_their_largest_member() {
        let items = vec![
            component_ref(Block::new(10.0, 10.0)),
            component_ref(Block::new(40.0, 20.0)),
            component_ref(Block::new(30.0, 15.0)),
            component_ref(Block::new(20.0, 5.0)),
        ];
        let flex = FlexGrid::new().rows(2).items(items.clone());

        flex.layout(&frame(500.0, 500.0));

        // Columns: max(10, 30) = 30, max(40, 20) = 40.
        // Rows: max(10, 20) = 20, max(15, 5) = 15.
        assert_eq!(items[0].borrow().bounds(), Bounds::new(0.0, 0.0, 30.0, 20.0));
        assert_eq!(items[1].borrow().bounds(), Bounds::new(30.0, 0.0, 40.0, 20.0));
        assert_eq!(items[2].borrow().bounds(), Bounds::new(0.0, 20.0, 30.0, 15.0));
        assert_eq!(items[3].borrow().bounds(), Bounds::new(30.0, 20.0, 40.0, 15.0));
    }

    #[test]
    fn same_row_shares_height_same_column_shares_width() {
        let items: Vec<ComponentRef> = (0..6)
            .map(|i| component_ref(Block::new(10.0 + i as f32 * 7.0, 5.0 + i as f32 * 3.0)))
            .collect();
        let flex = FlexGrid::new().columns(3).items(items.clone());

        flex.layout(&frame(500.0, 500.0));

        for row in 0..2 {
            let height = items[row * 3].borrow().bounds().height;
            for column in 0..3 {
                let bounds = items[row * 3 + column].borrow().bounds();
                assert_eq!(bounds.height, height);
                assert_eq!(bounds.width, items[column].borrow().bounds().width);
            }
        }
    }

    #[test]
    fn preferred_sums_tracks_with_gaps_and_insets() {
        let items = vec![
            component_ref(Block::new(10.0, 10.0)),
            component_ref(Block::new(40.0, 20.0)),
            component_ref(Block::new(30.0, 15.0)),
            component_ref(Block::new(20.0, 5.0)),
        ];
        let flex = FlexGrid::new().rows(2).hgap(4.0).vgap(6.0).items(items);
        let container = frame(0.0, 0.0).with_insets(Insets::uniform(1.0));

        let size = flex.preferred(&container);
        assert_eq!(size, Size::new(30.0 + 40.0 + 4.0 + 2.0, 20.0 + 15.0 + 6.0 + 2.0));
    }

    #[test]
    fn minimum_runs_the_same_shape_on_minimum_sizes() {
        let items = vec![
            component_ref(Block::new(40.0, 20.0).with_minimum(Size::new(4.0, 2.0))),
            component_ref(Block::new(30.0, 10.0).with_minimum(Size::new(3.0, 1.0))),
        ];
        let flex = FlexGrid::new().columns(2).items(items);

        assert_eq!(flex.minimum(&frame(0.0, 0.0)), Size::new(7.0, 2.0));
    }

    #[test]
    fn hidden_item_keeps_its_slot_but_adds_no_size() {
        let items = vec![
            component_ref(Block::new(10.0, 10.0)),
            component_ref(Block::new(90.0, 90.0).hidden()),
            component_ref(Block::new(20.0, 20.0)),
            component_ref(Block::new(30.0, 30.0)),
        ];
        let flex = FlexGrid::new().columns(2).items(items.clone());

        flex.layout(&frame(500.0, 500.0));

        // Column 1 is sized by the visible item below the hidden one.
        assert_eq!(items[1].borrow().bounds(), Bounds::default());
        assert_eq!(items[3].borrow().bounds(), Bounds::new(20.0, 10.0, 30.0, 30.0));
        assert_eq!(flex.preferred(&frame(0.0, 0.0)), Size::new(50.0, 40.0));
    }

    #[test]
    fn vertical_fill_transposes_the_mapping() {
        let items = vec![
            component_ref(Block::new(10.0, 10.0)),
            component_ref(Block::new(20.0, 20.0)),
            component_ref(Block::new(30.0, 30.0)),
            component_ref(Block::new(40.0, 40.0)),
        ];
        let flex = FlexGrid::new()
            .rows(2)
            .fill(Fill::Vertical)
            .items(items.clone());

        flex.layout(&frame(500.0, 500.0));

        // Column 0 holds items 0 and 1, column 1 holds items 2 and 3.
        assert_eq!(items[0].borrow().bounds(), Bounds::new(0.0, 0.0, 20.0, 30.0));
        assert_eq!(items[1].borrow().bounds(), Bounds::new(0.0, 30.0, 20.0, 40.0));
        assert_eq!(items[2].borrow().bounds(), Bounds::new(20.0, 0.0, 40.0, 30.0));
        assert_eq!(items[3].borrow().bounds(), Bounds::new(20.0, 30.0, 40.0, 40.0));
    }
}
