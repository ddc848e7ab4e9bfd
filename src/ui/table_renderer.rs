// Pure table rendering function that depends only on TableRenderContext

use crate::ui::table_render_context::TableRenderContext;
use ratatui::{
    layout::Constraint,
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

/// Shown instead of an empty grid
pub const EMPTY_MESSAGE: &str = "No employees found matching your criteria";

const ROW_NUMBER_WIDTH: u16 = 5;

pub fn render_table(f: &mut Frame, area: Rect, ctx: &TableRenderContext) {
    let border_style = if ctx.focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(
            "Employees ({} of {})",
            ctx.row_count, ctx.total_count
        ));

    if ctx.row_count == 0 {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(EMPTY_MESSAGE),
            Line::from(""),
            Line::styled(
                "Ctrl+R clears all filters",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
        .style(Style::default().fg(Color::Yellow));
        f.render_widget(empty, area);
        return;
    }

    let table = Table::new(build_data_rows(ctx), calculate_column_widths(ctx))
        .header(build_header_row(ctx))
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

/// Build the header row with sort indicators and column selection
fn build_header_row(ctx: &TableRenderContext) -> Row<'static> {
    let mut header_cells: Vec<Cell> = Vec::new();

    if ctx.show_row_numbers {
        header_cells.push(
            Cell::from("#").style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }

    for (visual_pos, header) in ctx.column_headers.iter().enumerate() {
        let mut style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        if ctx.is_selected_column(visual_pos) {
            style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
        }

        header_cells.push(
            Cell::from(format!("{}{}", header, ctx.get_sort_indicator(visual_pos))).style(style),
        );
    }

    Row::new(header_cells)
}

/// Build the data rows with selection and search highlighting
fn build_data_rows(ctx: &TableRenderContext) -> Vec<Row<'static>> {
    ctx.data_rows
        .iter()
        .enumerate()
        .map(|(row_idx, row_data)| {
            let mut cells: Vec<Cell> = Vec::new();

            if ctx.show_row_numbers {
                let row_num = ctx.row_viewport.start + row_idx + 1;
                cells.push(
                    Cell::from(row_num.to_string()).style(Style::default().fg(Color::DarkGray)),
                );
            }

            let is_current_row = ctx.is_selected_row(row_idx);

            for (col_idx, val) in row_data.iter().enumerate() {
                let is_selected_column = ctx.is_selected_column(col_idx);
                let mut cell = Cell::from(val.clone());

                if !is_current_row && ctx.cell_matches_search(val) {
                    cell = cell.style(Style::default().fg(Color::Magenta));
                }

                cell = if is_current_row && is_selected_column && ctx.focused {
                    cell.style(
                        Style::default()
                            .bg(Color::Yellow)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if is_selected_column && !is_current_row {
                    cell.style(Style::default().bg(Color::Rgb(50, 50, 50)))
                } else {
                    cell
                };

                cells.push(cell);
            }

            let row_style = if is_current_row {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(cells).style(row_style)
        })
        .collect()
}

fn calculate_column_widths(ctx: &TableRenderContext) -> Vec<Constraint> {
    let mut widths: Vec<Constraint> = Vec::new();

    if ctx.show_row_numbers {
        widths.push(Constraint::Length(ROW_NUMBER_WIDTH));
    }

    widths.extend(ctx.column_widths.iter().map(|&w| Constraint::Length(w)));
    widths
}

/// Width taken by the row-number column, including its spacing
pub fn row_number_overhead(show_row_numbers: bool) -> u16 {
    if show_row_numbers {
        ROW_NUMBER_WIDTH + 1
    } else {
        0
    }
}
