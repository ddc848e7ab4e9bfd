/// ViewportManager - the visible window into the EmployeeView
///
/// Tracks the first visible row and column and slides the window so the
/// selected cell is always on screen.
///
/// Architecture:
/// EmployeeStore (immutable records)
///     → EmployeeView (filtered/sorted rows)
///         → ViewportManager (visible window)
///             → Renderer (cells on screen)
use std::ops::Range;

#[derive(Debug, Clone, Default)]
pub struct ViewportManager {
    row_offset: usize,
    column_offset: usize,
}

impl ViewportManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Rows to render for `height` lines, scrolled so `selected` is inside
    pub fn row_window(&mut self, selected: usize, height: usize, total: usize) -> Range<usize> {
        if total == 0 || height == 0 {
            self.row_offset = 0;
            return 0..0;
        }

        let selected = selected.min(total - 1);
        if selected < self.row_offset {
            self.row_offset = selected;
        } else if selected >= self.row_offset + height {
            self.row_offset = selected + 1 - height;
        }

        // Don't leave blank lines at the bottom after the row count shrinks
        self.row_offset = self.row_offset.min(total.saturating_sub(height));

        self.row_offset..(self.row_offset + height).min(total)
    }

    /// Columns that fit in `available` cells, scrolled so `selected` is inside.
    /// At least one column is always returned.
    pub fn column_window(
        &mut self,
        selected: usize,
        widths: &[u16],
        available: u16,
        spacing: u16,
    ) -> Range<usize> {
        if widths.is_empty() {
            self.column_offset = 0;
            return 0..0;
        }

        let selected = selected.min(widths.len() - 1);
        if selected < self.column_offset {
            self.column_offset = selected;
        }

        loop {
            let end = Self::fit_from(self.column_offset, widths, available, spacing);
            if selected < end || self.column_offset == selected {
                return self.column_offset..end.max(self.column_offset + 1);
            }
            self.column_offset += 1;
        }
    }

    /// Exclusive end of the columns that fit starting at `start`
    fn fit_from(start: usize, widths: &[u16], available: u16, spacing: u16) -> usize {
        let mut used: u32 = 0;
        let mut end = start;
        for &width in &widths[start..] {
            let needed = u32::from(width) + if end > start { u32::from(spacing) } else { 0 };
            if used + needed > u32::from(available) {
                break;
            }
            used += needed;
            end += 1;
        }
        end
    }
}
