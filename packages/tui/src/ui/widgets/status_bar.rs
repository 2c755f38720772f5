use crate::state::{AppState, DashboardPane, FocusArea};
use crate::ui::theme::Palette;
use keyscope_core::View;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

/// Status bar widget that displays context-aware information
pub struct StatusBarWidget<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    /// Focus indicator text and style
    fn get_mode_info(&self) -> (String, Style) {
        match self.state.focus {
            FocusArea::Input => ("INPUT".to_string(), Style::default().fg(self.palette.text)),
            FocusArea::Rows => (
                "LIST".to_string(),
                Style::default().fg(self.palette.accent).add_modifier(Modifier::BOLD),
            ),
        }
    }

    /// Get navigation breadcrumb text
    fn get_navigation_breadcrumb(&self) -> String {
        let view = self.state.view.active_view;
        match view {
            View::Dashboard => {
                let pane = match self.state.dashboard_pane {
                    DashboardPane::Results => self.state.view.active_result_type.label(),
                    DashboardPane::Related => "Related",
                };
                match self.state.current_keyword() {
                    Some(keyword) => format!(" {} › {} › {}", view.title(), keyword, pane),
                    None => format!(" {}", view.title()),
                }
            }
            _ => {
                let rows = self.state.row_count();
                if rows == 0 {
                    format!(" {}", view.title())
                } else {
                    format!(" {} ({}/{})", view.title(), self.state.selection().min(rows - 1) + 1, rows)
                }
            }
        }
    }

    /// Get context-aware keyboard shortcuts
    fn get_shortcuts(&self) -> String {
        let shortcuts = match (self.state.focus, self.state.view.active_view) {
            (FocusArea::Input, _) => "Enter: Analyze • ↓: List • Esc: Clear • Tab: View • Ctrl+C: Quit ",
            (FocusArea::Rows, View::Dashboard) => "↑↓: Move • Enter: Open • ←/→: Filter • p: Pane • q: Quit ",
            (FocusArea::Rows, View::Shopping) => "↑↓: Move • Enter: Analyze • ←/→: Category • r: Refresh ",
            (FocusArea::Rows, _) => "↑↓: Move • Enter: Analyze • r: Refresh • t: Theme • q: Quit ",
        };
        shortcuts.to_string()
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (mode_text, mode_style) = self.get_mode_info();
        let breadcrumb = self.get_navigation_breadcrumb();
        let shortcuts = self.get_shortcuts();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(mode_text.len() as u16 + 2), // Mode indicator
                Constraint::Min(20),                            // Breadcrumb (flexible)
                Constraint::Length(shortcuts.chars().count() as u16), // Shortcuts (right-aligned)
            ])
            .split(area);

        Paragraph::new(format!(" {} ", mode_text))
            .style(mode_style)
            .block(Block::default())
            .render(chunks[0], buf);

        Paragraph::new(breadcrumb)
            .style(self.palette.muted())
            .block(Block::default())
            .render(chunks[1], buf);

        Paragraph::new(shortcuts)
            .style(Style::default().fg(self.palette.border))
            .block(Block::default())
            .render(chunks[2], buf);
    }
}
