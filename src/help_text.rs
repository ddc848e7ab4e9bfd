use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// Help text content for the TUI
pub struct HelpText;

impl HelpText {
    fn heading(text: &'static str) -> Line<'static> {
        Line::from(text).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn lines() -> Vec<Line<'static>> {
        vec![
            Line::from("Employee Directory Help").style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Self::heading("FOCUS"),
            Line::from("  Tab / Shift+Tab - Cycle search, department, status, table"),
            Line::from(""),
            Self::heading("FILTERS"),
            Line::from("  Type           - Search names, email, department, position,"),
            Line::from("                   location, manager and skills"),
            Line::from("  ←/→ or ↑/↓     - Change department or status selector"),
            Line::from("  Ctrl+R         - Reset all filters"),
            Line::from(""),
            Self::heading("TABLE"),
            Line::from("  ↑/↓ j/k        - Move row selection"),
            Line::from("  PgUp/PgDn      - Move one page"),
            Line::from("  Home/End g/G   - First/last row"),
            Line::from("  ←/→ h/l        - Move column selection"),
            Line::from("  s              - Sort by selected column (asc, desc, off)"),
            Line::from(""),
            Self::heading("OTHER"),
            Line::from("  Ctrl+E         - Export visible rows to CSV"),
            Line::from("  F1             - Toggle this help"),
            Line::from("  F5             - Toggle log panel"),
            Line::from("  Esc / q        - Quit (q only outside the search field)"),
            Line::from("  Ctrl+C         - Quit"),
        ]
    }
}
