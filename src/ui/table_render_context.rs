// Everything the table renderer needs, collected in one place so the
// renderer is independent of the TUI's internals

use crate::data::data_provider::SortOrder;
use crate::data::employee_view::SortState;
use std::ops::Range;

#[derive(Debug, Clone)]
pub struct TableRenderContext {
    // ========== Data Source ==========
    /// Rows in the filtered view
    pub row_count: usize,

    /// Rows in the store, before filtering
    pub total_count: usize,

    /// Formatted cells for the viewport; rows × visible columns
    pub data_rows: Vec<Vec<String>>,

    // ========== Column Information ==========
    /// Headers of the visible columns
    pub column_headers: Vec<String>,

    /// Widths of the visible columns (matching column_headers)
    pub column_widths: Vec<u16>,

    /// Absolute index of the first visible column
    pub column_offset: usize,

    // ========== Selection & Navigation ==========
    /// Selected row (absolute index, not viewport-relative)
    pub selected_row: usize,

    /// Selected column (absolute index)
    pub selected_column: usize,

    /// Row viewport range (start..end absolute indices)
    pub row_viewport: Range<usize>,

    /// Whether the table has keyboard focus
    pub focused: bool,

    // ========== Visual Indicators ==========
    pub sort_state: Option<SortState>,

    pub show_row_numbers: bool,

    pub use_glyphs: bool,

    /// Lower-cased search text, for highlighting matching cells
    pub search_needle: Option<String>,
}

impl TableRenderContext {
    /// Check if a given viewport row is the selected row
    pub fn is_selected_row(&self, viewport_row_index: usize) -> bool {
        self.row_viewport.start + viewport_row_index == self.selected_row
    }

    /// Check if a visible column is the selected column
    pub fn is_selected_column(&self, visible_column_index: usize) -> bool {
        self.column_offset + visible_column_index == self.selected_column
    }

    /// Sort arrow for a visible column header, or empty
    pub fn get_sort_indicator(&self, visible_column_index: usize) -> &'static str {
        match self.sort_state {
            Some(SortState { column, order })
                if column == self.column_offset + visible_column_index =>
            {
                if self.use_glyphs {
                    order.indicator()
                } else {
                    match order {
                        SortOrder::Ascending => " ^",
                        SortOrder::Descending => " v",
                    }
                }
            }
            _ => "",
        }
    }

    pub fn cell_matches_search(&self, value: &str) -> bool {
        self.search_needle
            .as_deref()
            .is_some_and(|needle| value.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> TableRenderContext {
        TableRenderContext {
            row_count: 10,
            total_count: 20,
            data_rows: vec![],
            column_headers: vec!["Department".into(), "Position".into()],
            column_widths: vec![10, 10],
            column_offset: 4,
            selected_row: 6,
            selected_column: 5,
            row_viewport: 5..10,
            focused: true,
            sort_state: Some(SortState {
                column: 4,
                order: SortOrder::Descending,
            }),
            show_row_numbers: false,
            use_glyphs: false,
            search_needle: Some("eng".into()),
        }
    }

    #[test]
    fn test_selection_is_viewport_relative() {
        let ctx = context();
        assert!(ctx.is_selected_row(1));
        assert!(!ctx.is_selected_row(0));
        assert!(ctx.is_selected_column(1));
        assert!(!ctx.is_selected_column(0));
    }

    #[test]
    fn test_sort_indicator() {
        let ctx = context();
        assert_eq!(ctx.get_sort_indicator(0), " v");
        assert_eq!(ctx.get_sort_indicator(1), "");
    }

    #[test]
    fn test_cell_matches_search() {
        let ctx = context();
        assert!(ctx.cell_matches_search("Engineering"));
        assert!(!ctx.cell_matches_search("Sales"));
    }
}
