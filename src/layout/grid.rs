use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentRef};
use crate::geometry::{Bounds, Size};

use super::Layout;
use super::core::{SizeProbe, content_rect, gap_total, infer_dimensions};

/// Order in which grid cells are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    /// Left-to-right within a row before advancing rows.
    #[default]
    Horizontal,
    /// Top-to-bottom within a column before advancing columns.
    Vertical,
}

/// Fixed grid: every cell is forced to the same size, derived from the
/// content area and the inferred row/column counts.
///
/// `rows`/`columns` left at zero are inferred from the item count at call
/// time. An invisible item keeps its slot (the index still advances) but
/// its bounds are never written and it is ignored by size queries.
#[derive(Default)]
pub struct Grid {
    rows: usize,
    columns: usize,
    items: Vec<ComponentRef>,
    fill: Fill,
    hgap: f32,
    vgap: f32,
}

impl Grid {
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

    fn envelope(&self, container: &dyn Component, probe: SizeProbe) -> Size {
        let insets = container.insets();
        let (rows, columns) = self.dimensions();
        let (rows, columns) = (rows.max(1), columns.max(1));

        // One shared cell size, so only the largest child matters per axis.
        let mut cell = Size::ZERO;
        for item in &self.items {
            let component = item.borrow();
            if !component.is_visible() {
                continue;
            }
            let size = probe(&*component);
            cell.width = cell.width.max(size.width);
            cell.height = cell.height.max(size.height);
        }

        Size::new(
            columns as f32 * cell.width + gap_total(columns, self.hgap) + insets.horizontal(),
            rows as f32 * cell.height + gap_total(rows, self.vgap) + insets.vertical(),
        )
    }
}

impl Layout for Grid {
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

        // Negative cell sizes pass through unclamped.
        let cell_width = (content.width - gap_total(columns, self.hgap)) / columns as f32;
        let cell_height = (content.height - gap_total(rows, self.vgap)) / rows as f32;

        for (index, item) in self.items.iter().enumerate() {
            if !item.borrow().is_visible() {
                continue;
            }
            let (row, column) = self.cell_for(index, rows, columns);
            let bounds = Bounds::new(
                content.x + column as f32 * (cell_width + self.hgap),
                content.y + row as f32 * (cell_height + self.vgap),
                cell_width,
                cell_height,
            );
            item.borrow_mut().set_bounds(bounds.into());
        }
    }
}
