use std::sync::Arc;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;
use crate::tui::grid::{GridMetrics, GridPosition, ItemProvider, LayoutSizer, StreamGrid};
use crate::twitch::Stream;

use super::StreamTileWidget;

/// The scrollable tile grid
///
/// Tiles are sized from the area width through `LayoutSizer` and positioned
/// section by section; sections above `scroll_section` are scrolled away and
/// tiles below the area are clipped.
#[derive(Clone, Debug)]
pub struct GridViewWidget {
    pub streams: Arc<Option<Vec<Stream>>>,
    pub metrics: GridMetrics,
    pub focus: GridPosition,
    pub scroll_section: usize,
    /// True while a modal is open over the grid
    pub dimmed: bool,
}

impl GridViewWidget {
    fn streams(&self) -> &[Stream] {
        self.streams.as_ref().as_deref().unwrap_or(&[])
    }

    /// Screen rectangle of one tile, clipped to `area`; None when off screen
    pub fn tile_rect(&self, area: Rect, position: GridPosition) -> Option<Rect> {
        let grid = StreamGrid::new(self.streams(), self.metrics);
        let size = grid.item_size(area.width as f64);
        let (tile_width, tile_height) = self.metrics.tile_cells(area.width);
        let insets = grid.insets_for_section(position.section);

        let top = self.metrics.section_top(position.section, tile_height as f64)
            - self.metrics.scroll_distance(self.scroll_section, tile_height as f64);
        if position.section < self.scroll_section || top >= area.height as f64 {
            return None;
        }

        let column_width = size.width + insets.left + insets.right;
        let left = insets.left + position.row as f64 * column_width;
        let x = area.x + left.floor() as u16;
        let y = area.y + top.floor() as u16;
        if x >= area.right() {
            return None;
        }

        let width = tile_width.min(area.right() - x);
        let height = tile_height.min(area.bottom() - y);
        Some(Rect::new(x, y, width, height))
    }
}

impl ElementWidget for GridViewWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let grid = StreamGrid::new(self.streams(), self.metrics);
        for section in self.scroll_section..grid.section_count() {
            for row in 0..grid.items_in_section(section) {
                let position = GridPosition::new(section, row);
                let (Some(stream), Some(rect)) =
                    (grid.item_at(position), self.tile_rect(area, position))
                else {
                    continue;
                };
                StreamTileWidget::new(stream.clone(), position == self.focus)
                    .dimmed(self.dimmed)
                    .render(rect, buf, config);
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
