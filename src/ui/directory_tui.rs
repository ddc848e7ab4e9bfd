use anyhow::{anyhow, Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Write};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::config::config::Config;
use crate::data::columns::COLUMNS;
use crate::data::data_exporter::DataExporter;
use crate::data::data_provider::{DataProvider, SortOrder};
use crate::directory_state::DirectoryState;
use crate::help_text::HelpText;
use crate::ui::table_render_context::TableRenderContext;
use crate::ui::table_renderer::{render_table, row_number_overhead};
use crate::ui::viewport_manager::ViewportManager;
use crate::utils::logging::LogRingBuffer;

const COLUMN_SPACING: u16 = 1;
const LOG_PANEL_HEIGHT: u16 = 10;

/// Which widget receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Department,
    Status,
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Department,
            Focus::Department => Focus::Status,
            Focus::Status => Focus::Table,
            Focus::Table => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Table,
            Focus::Department => Focus::Search,
            Focus::Status => Focus::Department,
            Focus::Table => Focus::Status,
        }
    }
}

pub struct DirectoryTui {
    state: DirectoryState,
    config: Config,
    focus: Focus,
    search_input: Input,
    selected_row: usize,
    selected_column: usize,
    viewport: ViewportManager,
    show_help: bool,
    show_logs: bool,
    status_message: String,
    log_buffer: Option<LogRingBuffer>,
}

impl DirectoryTui {
    pub fn new(state: DirectoryState, config: Config, log_buffer: Option<LogRingBuffer>) -> Self {
        let search_input = Input::from(state.filter().search_text.clone());
        Self {
            state,
            config,
            focus: Focus::Search,
            search_input,
            selected_row: 0,
            selected_column: 0,
            viewport: ViewportManager::new(),
            show_help: false,
            show_logs: false,
            status_message: "Ready - type to search, Tab to switch focus, F1 for help"
                .to_string(),
            log_buffer,
        }
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if self.handle_key(key)? {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Process one key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Ok(true),
            KeyCode::Char('e') if ctrl => {
                self.export();
                return Ok(false);
            }
            KeyCode::Char('r') if ctrl => {
                self.reset_filters();
                return Ok(false);
            }
            KeyCode::F(1) => {
                self.show_help = !self.show_help;
                return Ok(false);
            }
            KeyCode::F(5) => {
                self.show_logs = !self.show_logs;
                return Ok(false);
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Ok(false);
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Ok(false);
            }
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                    return Ok(false);
                }
                return Ok(true);
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => {
                self.handle_search_key(key);
                Ok(false)
            }
            Focus::Department => {
                if let Some(forward) = Self::selector_direction(key.code) {
                    self.state.cycle_department(forward);
                    self.after_filter_change();
                }
                Ok(key.code == KeyCode::Char('q'))
            }
            Focus::Status => {
                if let Some(forward) = Self::selector_direction(key.code) {
                    self.state.cycle_status(forward);
                    self.after_filter_change();
                }
                Ok(key.code == KeyCode::Char('q'))
            }
            Focus::Table => self.handle_table_key(key),
        }
    }

    fn selector_direction(code: KeyCode) -> Option<bool> {
        match code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => Some(false),
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                Some(true)
            }
            _ => None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        if let Some(change) = self.search_input.handle_event(&Event::Key(key)) {
            if change.value {
                self.state.set_search_text(self.search_input.value());
                self.after_filter_change();
            }
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> Result<bool> {
        let row_count = self.state.view().row_count();
        let last_row = row_count.saturating_sub(1);
        let page = self.config.behavior.page_size.max(1);

        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_row = (self.selected_row + 1).min(last_row);
            }
            KeyCode::PageUp => {
                self.selected_row = self.selected_row.saturating_sub(page);
            }
            KeyCode::PageDown => {
                self.selected_row = (self.selected_row + page).min(last_row);
            }
            KeyCode::Home | KeyCode::Char('g') => self.selected_row = 0,
            KeyCode::End | KeyCode::Char('G') => self.selected_row = last_row,
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_column = (self.selected_column + 1).min(COLUMNS.len() - 1);
            }
            KeyCode::Char('s') => self.toggle_sort()?,
            _ => {}
        }
        Ok(false)
    }

    fn toggle_sort(&mut self) -> Result<()> {
        let column = &COLUMNS[self.selected_column];
        self.status_message = match self.state.toggle_sort(self.selected_column)? {
            Some(sort) => format!(
                "Sorted by {} {}",
                column.display_name,
                match sort.order {
                    SortOrder::Ascending => "ascending",
                    SortOrder::Descending => "descending",
                }
            ),
            None => "Sort cleared".to_string(),
        };
        tracing::debug!(target: "tui", "{}", self.status_message);
        Ok(())
    }

    fn reset_filters(&mut self) {
        self.search_input.reset();
        self.state.reset_filters();
        self.after_filter_change();
        self.status_message = "Filters reset".to_string();
    }

    /// Keep the selection inside the new row set
    fn after_filter_change(&mut self) {
        let row_count = self.state.view().row_count();
        self.selected_row = self.selected_row.min(row_count.saturating_sub(1));
    }

    fn export(&mut self) {
        let dir = self.config.export.resolved_directory();
        match DataExporter::export_csv(self.state.view(), &dir, &self.config.export.file_name) {
            Ok(summary) => self.status_message = summary.status_message(),
            Err(e) => {
                tracing::error!(target: "export", "Export failed: {:#}", e);
                self.status_message = format!("Export failed: {}", e);
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter bar
                Constraint::Min(5),    // Results (+ log panel)
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        self.render_filter_bar(f, chunks[0]);

        if self.show_logs {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(LOG_PANEL_HEIGHT)])
                .split(chunks[1]);
            self.render_results(f, parts[0]);
            self.render_logs(f, parts[1]);
        } else {
            self.render_results(f, chunks[1]);
        }

        self.render_status_bar(f, chunks[2]);

        if self.show_help {
            self.render_help(f);
        }
    }

    fn focused_block(&self, title: &'static str, focus: Focus) -> Block<'static> {
        let style = if self.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(title)
    }

    fn render_filter_bar(&self, f: &mut Frame, area: Rect) {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(30),
                Constraint::Percentage(20),
            ])
            .split(area);

        // Search field, scrolled horizontally to keep the cursor visible
        let width = parts[0].width.saturating_sub(2) as usize;
        let scroll = self.search_input.visual_scroll(width);
        let search = Paragraph::new(self.search_input.value())
            .scroll((0, scroll as u16))
            .block(self.focused_block("Search", Focus::Search));
        f.render_widget(search, parts[0]);

        if self.focus == Focus::Search {
            let cursor = self.search_input.visual_cursor().max(scroll) - scroll;
            f.set_cursor_position((parts[0].x + cursor as u16 + 1, parts[0].y + 1));
        }

        let department = self.selector_text(self.state.filter().department.as_str());
        f.render_widget(
            Paragraph::new(department).block(self.focused_block("Department", Focus::Department)),
            parts[1],
        );

        let status = self.selector_text(self.state.filter().status.as_str());
        f.render_widget(
            Paragraph::new(status).block(self.focused_block("Status", Focus::Status)),
            parts[2],
        );
    }

    fn selector_text(&self, value: &str) -> String {
        if self.config.display.use_glyphs {
            format!("◀ {} ▶", value)
        } else {
            format!("< {} >", value)
        }
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect) {
        let view = self.state.view();
        let row_count = view.row_count();

        // Borders take two lines and two columns, the header one more line
        let inner_width = area
            .width
            .saturating_sub(2)
            .saturating_sub(row_number_overhead(self.config.display.show_row_numbers));
        let body_height = area.height.saturating_sub(3) as usize;

        let widths: Vec<u16> = COLUMNS.iter().map(|c| c.width).collect();
        let columns = self.viewport.column_window(
            self.selected_column,
            &widths,
            inner_width,
            COLUMN_SPACING,
        );
        let rows = self
            .viewport
            .row_window(self.selected_row, body_height, row_count);

        let data_rows: Vec<Vec<String>> = view
            .get_visible_rows(rows.start, rows.len())
            .into_iter()
            .map(|row| row[columns.clone()].to_vec())
            .collect();

        let ctx = TableRenderContext {
            row_count,
            total_count: view.total_count(),
            data_rows,
            column_headers: COLUMNS[columns.clone()]
                .iter()
                .map(|c| c.display_name.to_string())
                .collect(),
            column_widths: widths[columns.clone()].to_vec(),
            column_offset: columns.start,
            selected_row: self.selected_row,
            selected_column: self.selected_column,
            row_viewport: rows,
            focused: self.focus == Focus::Table,
            sort_state: view.sort_state(),
            show_row_numbers: self.config.display.show_row_numbers,
            use_glyphs: self.config.display.use_glyphs,
            search_needle: self.state.filter().search_needle(),
        };

        render_table(f, area, &ctx);
    }

    fn render_logs(&self, f: &mut Frame, area: Rect) {
        let count = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .log_buffer
            .as_ref()
            .map(|buffer| buffer.get_recent(count))
            .unwrap_or_default()
            .into_iter()
            .map(|entry| Line::from(entry.format_for_display()))
            .collect();

        let logs = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Log (F5)"))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(logs, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.state.summary(),
            Style::default().fg(Color::Green),
        )];

        if let Some(sort) = self.state.view().sort_state() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!(
                    "Sort: {}{}",
                    COLUMNS[sort.column].display_name,
                    sort.order.indicator()
                ),
                Style::default().fg(Color::Cyan),
            ));
        }

        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{:?}", self.focus),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" | "));
        spans.push(Span::raw(self.status_message.clone()));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help(&self, f: &mut Frame) {
        let area = centered_rect(70, 80, f.area());
        let help = Paragraph::new(HelpText::lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - F1/Esc to close"),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(Clear, area);
        f.render_widget(help, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Enter the alternate screen on `out` and build the terminal.
///
/// Raw mode is already on when this runs; `restore_raw_mode` is called on
/// every failure so the shell is never left in raw mode.
fn setup_terminal<W: Write>(
    mut out: W,
    restore_raw_mode: impl FnOnce(),
) -> Result<Terminal<CrosstermBackend<W>>> {
    if let Err(e) = execute!(out, EnterAlternateScreen) {
        restore_raw_mode();
        return Err(anyhow!("Failed to enter alternate screen: {}", e));
    }

    match Terminal::new(CrosstermBackend::new(out)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            restore_raw_mode();
            Err(anyhow!("Failed to create terminal: {}", e))
        }
    }
}

/// Set up the terminal, run the event loop and always restore the terminal
pub fn run_directory_tui(
    state: DirectoryState,
    config: Config,
    log_buffer: Option<LogRingBuffer>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = setup_terminal(io::stdout(), || {
        let _ = disable_raw_mode();
    })?;

    tracing::info!(target: "tui", "Starting directory view");
    let mut app = DirectoryTui::new(state, config, log_buffer);
    let result = app.run(&mut terminal);

    // Always restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}
