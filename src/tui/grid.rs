//! Grid layout math for the stream browser.
//!
//! The grid has a fixed column count. Every grid row is a *section* and every
//! tile inside a row is addressed by its `row` within that section, so a
//! stream's index is `section * columns + row`.
//!
//! All sizes here are pure functions of the view width. The same formulas
//! run with point metrics ([`GridMetrics::tv`]) or terminal cell metrics
//! ([`GridMetrics::terminal`]).

use crate::layout_constants::{
    CELL_HEIGHT_TO_WIDTH, CELL_ITEMS_INSETS_X, CELL_ITEMS_INSETS_Y, CELL_ITEM_SPACING,
    CELL_LABEL_HEIGHT, CELL_TOP_BAR_HEIGHT, NUM_COLUMNS, PREVIEW_IMG_ASPECT_RATIO,
    TV_ITEMS_INSETS_X, TV_ITEMS_INSETS_Y, TV_ITEM_SPACING, TV_LABEL_HEIGHT, TV_TOP_BAR_HEIGHT,
};
use crate::twitch::Stream;

/// Address of one tile: grid row (`section`) and column within it (`row`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPosition {
    pub section: usize,
    pub row: usize,
}

impl GridPosition {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Flat index into the stream list
    pub fn index(self, columns: usize) -> usize {
        self.section * columns + self.row
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Direction of a focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Fixed constants that drive the layout formulas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub columns: usize,
    pub inset_x: f64,
    pub inset_y: f64,
    pub top_bar_height: f64,
    pub aspect_ratio: f64,
    pub label_height: f64,
    pub item_spacing: f64,
}

impl GridMetrics {
    /// Point metrics of the television layout
    pub const fn tv() -> Self {
        Self {
            columns: NUM_COLUMNS,
            inset_x: TV_ITEMS_INSETS_X,
            inset_y: TV_ITEMS_INSETS_Y,
            top_bar_height: TV_TOP_BAR_HEIGHT,
            aspect_ratio: PREVIEW_IMG_ASPECT_RATIO,
            label_height: TV_LABEL_HEIGHT,
            item_spacing: TV_ITEM_SPACING,
        }
    }

    /// Cell metrics; the aspect ratio is stretched because cells are tall
    pub const fn terminal() -> Self {
        Self {
            columns: NUM_COLUMNS,
            inset_x: CELL_ITEMS_INSETS_X,
            inset_y: CELL_ITEMS_INSETS_Y,
            top_bar_height: CELL_TOP_BAR_HEIGHT,
            aspect_ratio: PREVIEW_IMG_ASPECT_RATIO * CELL_HEIGHT_TO_WIDTH,
            label_height: CELL_LABEL_HEIGHT,
            item_spacing: CELL_ITEM_SPACING,
        }
    }

    /// `width = view / columns - 2*insetX`, `height = width / ratio + 2*label`
    pub fn tile_size(&self, view_width: f64) -> Size {
        let width = view_width / self.columns as f64 - self.inset_x * 2.0;
        let height = width / self.aspect_ratio + self.label_height * 2.0;
        Size { width, height }
    }

    /// Tile size floored to whole cells, never smaller than one cell
    pub fn tile_cells(&self, view_width: u16) -> (u16, u16) {
        let size = self.tile_size(view_width as f64);
        let width = size.width.floor().max(1.0) as u16;
        let height = size.height.floor().max(1.0) as u16;
        (width, height)
    }

    /// Section 0 reserves the title bar; later sections use the X inset on top
    pub fn section_insets(&self, section: usize) -> EdgeInsets {
        let top = if section == 0 {
            self.top_bar_height
        } else {
            self.inset_x
        };
        EdgeInsets {
            top,
            left: self.inset_x,
            bottom: self.inset_y,
            right: self.inset_x,
        }
    }

    /// Outer insets of the scrollable content
    pub fn content_insets(&self) -> EdgeInsets {
        EdgeInsets {
            top: self.inset_y + self.item_spacing,
            left: self.inset_x,
            bottom: self.inset_y,
            right: self.inset_x,
        }
    }

    /// `ceil(n / columns)`
    pub fn section_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.columns)
    }

    /// Full sections hold `columns` items; the last holds the remainder
    pub fn items_in_section(&self, item_count: usize, section: usize) -> usize {
        if (section + 1) * self.columns <= item_count {
            self.columns
        } else {
            item_count.saturating_sub(section * self.columns)
        }
    }

    pub fn is_valid(&self, item_count: usize, position: GridPosition) -> bool {
        position.row < self.items_in_section(item_count, position.section)
    }

    /// Y of a section's tiles in content coordinates
    pub fn section_top(&self, section: usize, tile_height: f64) -> f64 {
        let before: f64 = (0..section)
            .map(|s| {
                let insets = self.section_insets(s);
                insets.top + tile_height + insets.bottom
            })
            .sum();
        self.content_insets().top + before + self.section_insets(section).top
    }

    /// Content scroll distance that brings `scroll_section` to section 0's place
    pub fn scroll_distance(&self, scroll_section: usize, tile_height: f64) -> f64 {
        self.section_top(scroll_section, tile_height) - self.section_top(0, tile_height)
    }

    /// Whether a section's tiles are fully inside a viewport scrolled to `scroll_section`
    pub fn section_fits(
        &self,
        section: usize,
        scroll_section: usize,
        tile_height: f64,
        view_height: f64,
    ) -> bool {
        if section < scroll_section {
            return false;
        }
        let y = self.section_top(section, tile_height)
            - self.scroll_distance(scroll_section, tile_height);
        y + tile_height <= view_height
    }

    /// Smallest scroll change that keeps `focused` visible
    pub fn scroll_to_reveal(
        &self,
        focused: usize,
        scroll_section: usize,
        tile_height: f64,
        view_height: f64,
    ) -> usize {
        if focused < scroll_section {
            return focused;
        }
        let mut scroll = scroll_section;
        while scroll < focused && !self.section_fits(focused, scroll, tile_height, view_height) {
            scroll += 1;
        }
        scroll
    }

    /// Move focus one step, clamping to positions that hold a stream
    pub fn move_focus(
        &self,
        item_count: usize,
        from: GridPosition,
        direction: Direction,
    ) -> GridPosition {
        let sections = self.section_count(item_count);
        if sections == 0 {
            return GridPosition::default();
        }

        let target = match direction {
            Direction::Left => GridPosition::new(from.section, from.row.saturating_sub(1)),
            Direction::Right => GridPosition::new(from.section, from.row + 1),
            Direction::Up => GridPosition::new(from.section.saturating_sub(1), from.row),
            Direction::Down => GridPosition::new((from.section + 1).min(sections - 1), from.row),
        };

        self.clamp(item_count, target)
    }

    /// Nearest valid position, or the origin when the grid is empty
    pub fn clamp(&self, item_count: usize, position: GridPosition) -> GridPosition {
        let sections = self.section_count(item_count);
        if sections == 0 {
            return GridPosition::default();
        }
        let section = position.section.min(sections - 1);
        let last_row = self.items_in_section(item_count, section).saturating_sub(1);
        GridPosition::new(section, position.row.min(last_row))
    }
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self::terminal()
    }
}

/// Supplies the grid's items per section
pub trait ItemProvider {
    type Item;

    fn section_count(&self) -> usize;
    fn items_in_section(&self, section: usize) -> usize;
    fn item_at(&self, position: GridPosition) -> Option<&Self::Item>;
}

/// Turns a grid position into what the host should navigate to
pub trait SelectionHandler {
    type Selection;

    fn select(&self, position: GridPosition) -> Option<Self::Selection>;
}

/// Sizes tiles and sections for a given view width
pub trait LayoutSizer {
    fn item_size(&self, view_width: f64) -> Size;
    fn insets_for_section(&self, section: usize) -> EdgeInsets;
}

/// The stream list seen through the grid: data source, selection target and sizer in one
#[derive(Debug, Clone, Copy)]
pub struct StreamGrid<'a> {
    streams: &'a [Stream],
    metrics: GridMetrics,
}

impl<'a> StreamGrid<'a> {
    pub fn new(streams: &'a [Stream], metrics: GridMetrics) -> Self {
        Self { streams, metrics }
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

impl ItemProvider for StreamGrid<'_> {
    type Item = Stream;

    fn section_count(&self) -> usize {
        self.metrics.section_count(self.streams.len())
    }

    fn items_in_section(&self, section: usize) -> usize {
        self.metrics.items_in_section(self.streams.len(), section)
    }

    fn item_at(&self, position: GridPosition) -> Option<&Stream> {
        if !self.metrics.is_valid(self.streams.len(), position) {
            return None;
        }
        self.streams.get(position.index(self.metrics.columns))
    }
}

impl SelectionHandler for StreamGrid<'_> {
    type Selection = Stream;

    fn select(&self, position: GridPosition) -> Option<Stream> {
        self.item_at(position).cloned()
    }
}

impl LayoutSizer for StreamGrid<'_> {
    fn item_size(&self, view_width: f64) -> Size {
        self.metrics.tile_size(view_width)
    }

    fn insets_for_section(&self, section: usize) -> EdgeInsets {
        self.metrics.section_insets(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_streams;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_tile_size_tv_1920() {
        let size = GridMetrics::tv().tile_size(1920.0);
        assert!((size.width - (640.0 - 90.0)).abs() < EPSILON);
        assert!((size.height - (550.0 / 1.777777777 + 100.0)).abs() < EPSILON);
    }

    #[test]
    fn test_tile_size_positive_for_realistic_widths() {
        for width in [1280.0, 1920.0, 3840.0] {
            let size = GridMetrics::tv().tile_size(width);
            assert!(size.width > 0.0 && size.height > 0.0, "width {}", width);
        }
        for width in [60.0, 80.0, 120.0, 200.0] {
            let size = GridMetrics::terminal().tile_size(width);
            assert!(size.width > 0.0 && size.height > 0.0, "cells {}", width);
        }
    }

    #[test]
    fn test_tile_size_terminal_80_columns() {
        let size = GridMetrics::terminal().tile_size(80.0);
        assert_eq!(size.width.floor(), 24.0);
        // 24.67 / 3.5556 + 2
        assert_eq!(size.height.floor(), 8.0);
    }

    #[test]
    fn test_tile_cells_floors_and_clamps() {
        let metrics = GridMetrics::terminal();
        assert_eq!(metrics.tile_cells(80), (24, 8));
        assert_eq!(metrics.tile_cells(3), (1, 1));
    }

    #[test]
    fn test_section_insets() {
        let metrics = GridMetrics::tv();
        let first = metrics.section_insets(0);
        assert_eq!(first.top, 100.0);
        assert_eq!(first.left, 45.0);
        assert_eq!(first.bottom, 30.0);
        assert_eq!(first.right, 45.0);

        let later = metrics.section_insets(3);
        assert_eq!(later.top, 45.0);
        assert_eq!(later.bottom, 30.0);
    }

    #[test]
    fn test_content_insets() {
        let insets = GridMetrics::tv().content_insets();
        assert_eq!(insets.top, 40.0);
        assert_eq!(insets.left, 45.0);
        assert_eq!(insets.bottom, 30.0);
    }

    #[test]
    fn test_section_count() {
        let metrics = GridMetrics::tv();
        assert_eq!(metrics.section_count(0), 0);
        assert_eq!(metrics.section_count(1), 1);
        assert_eq!(metrics.section_count(3), 1);
        assert_eq!(metrics.section_count(4), 2);
        assert_eq!(metrics.section_count(20), 7);
    }

    #[test]
    fn test_twenty_streams_layout() {
        let metrics = GridMetrics::tv();
        for section in 0..6 {
            assert_eq!(metrics.items_in_section(20, section), 3);
        }
        assert_eq!(metrics.items_in_section(20, 6), 2);
    }

    #[test]
    fn test_items_in_section_sum_to_count() {
        let metrics = GridMetrics::terminal();
        for n in 0..40 {
            let total: usize = (0..metrics.section_count(n))
                .map(|s| metrics.items_in_section(n, s))
                .sum();
            assert_eq!(total, n);
        }
    }

    #[test]
    fn test_position_index_is_bijection() {
        let metrics = GridMetrics::terminal();
        for n in 0..25 {
            let mut seen = vec![false; n];
            for section in 0..metrics.section_count(n) {
                for row in 0..metrics.items_in_section(n, section) {
                    let index = GridPosition::new(section, row).index(metrics.columns);
                    assert!(index < n);
                    assert!(!seen[index], "index {} produced twice", index);
                    seen[index] = true;
                }
            }
            assert!(seen.iter().all(|s| *s));
        }
    }

    #[test]
    fn test_section_2_row_1_is_index_7() {
        assert_eq!(GridPosition::new(2, 1).index(3), 7);
    }

    #[test]
    fn test_select_section_2_row_1_is_stream_7() {
        let streams = create_mock_streams("1", 20);
        let grid = StreamGrid::new(&streams, GridMetrics::tv());
        let selected = grid.select(GridPosition::new(2, 1)).unwrap();
        assert_eq!(selected.user_login, streams[7].user_login);
    }

    #[test]
    fn test_item_at_rejects_positions_past_last_section() {
        let streams = create_mock_streams("1", 20);
        let grid = StreamGrid::new(&streams, GridMetrics::tv());
        assert!(grid.item_at(GridPosition::new(6, 1)).is_some());
        assert!(grid.item_at(GridPosition::new(6, 2)).is_none());
        assert!(grid.item_at(GridPosition::new(7, 0)).is_none());
        assert!(grid.item_at(GridPosition::new(0, 3)).is_none());
    }

    #[test]
    fn test_empty_grid_has_no_sections() {
        let grid = StreamGrid::new(&[], GridMetrics::tv());
        assert_eq!(grid.section_count(), 0);
        assert!(grid.select(GridPosition::default()).is_none());
    }

    #[test]
    fn test_layout_sizer_delegates_to_metrics() {
        let grid = StreamGrid::new(&[], GridMetrics::tv());
        assert_eq!(grid.item_size(1920.0), GridMetrics::tv().tile_size(1920.0));
        assert_eq!(grid.insets_for_section(0).top, 100.0);
    }

    #[test]
    fn test_move_focus_clamps_to_partial_last_section() {
        let metrics = GridMetrics::terminal();
        // 20 streams: last section has rows 0 and 1
        let from = GridPosition::new(5, 2);
        assert_eq!(metrics.move_focus(20, from, Direction::Down), GridPosition::new(6, 1));
        assert_eq!(
            metrics.move_focus(20, GridPosition::new(6, 1), Direction::Right),
            GridPosition::new(6, 1)
        );
    }

    #[test]
    fn test_move_focus_edges() {
        let metrics = GridMetrics::terminal();
        let origin = GridPosition::new(0, 0);
        assert_eq!(metrics.move_focus(20, origin, Direction::Up), origin);
        assert_eq!(metrics.move_focus(20, origin, Direction::Left), origin);
        assert_eq!(
            metrics.move_focus(20, origin, Direction::Right),
            GridPosition::new(0, 1)
        );
        assert_eq!(metrics.move_focus(0, origin, Direction::Down), origin);
    }

    #[test]
    fn test_section_top_accumulates_insets() {
        let metrics = GridMetrics::terminal();
        let tile_height = 8.0;
        // content top (1 + 1) + top bar (3)
        assert_eq!(metrics.section_top(0, tile_height), 5.0);
        // content top (2) + section 0 (3 + 8 + 1) + section 1 top inset (1)
        assert_eq!(metrics.section_top(1, tile_height), 15.0);
        assert_eq!(metrics.section_top(2, tile_height), 25.0);
    }

    #[test]
    fn test_scroll_to_reveal() {
        let metrics = GridMetrics::terminal();
        let tile_height = 8.0;
        let view_height = 22.0;

        // Sections 0 and 1 fit (5..13, 15..23 does not fit in 22)
        assert!(metrics.section_fits(0, 0, tile_height, view_height));
        assert!(!metrics.section_fits(1, 0, tile_height, view_height));

        assert_eq!(metrics.scroll_to_reveal(0, 0, tile_height, view_height), 0);
        assert_eq!(metrics.scroll_to_reveal(1, 0, tile_height, view_height), 1);
        assert_eq!(metrics.scroll_to_reveal(4, 1, tile_height, view_height), 4);
        assert_eq!(metrics.scroll_to_reveal(2, 5, tile_height, view_height), 2);
    }
}
