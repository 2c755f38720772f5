use super::theme::Palette;
use super::{placeholder, view_block};
use crate::state::{AppState, FocusArea};
use keyscope_core::{format_count, format_ratio, ShoppingCategory};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

/// Render the shopping category trends
pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let focused = state.focus == FocusArea::Rows;
    let block = view_block(" Shopping Trends  ←/→ category • r refresh ", palette, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let category = ShoppingCategory::find(&state.shopping_category)
        .map(|c| format!("{} ({})", c.name, c.id))
        .unwrap_or_else(|| state.shopping_category.clone());
    let header = Line::from(vec![
        Span::styled("Category ", palette.muted()),
        Span::styled(category, palette.title()),
    ]);
    frame.render_widget(Paragraph::new(header), parts[0]);

    if let Some(message) = placeholder(&state.shopping, palette) {
        frame.render_widget(message, parts[1]);
        return;
    }

    let rows = state.shopping.rows().iter().map(|trend| {
        Row::new(vec![
            Cell::from(trend.rank.to_string()),
            Cell::from(trend.keyword.clone()).style(palette.base().add_modifier(Modifier::BOLD)),
            Cell::from(format_count(trend.volume)),
            Cell::from(format_count(trend.docs)),
            Cell::from(format_ratio(trend.ratio, 4)),
            Cell::from(trend.insight.clone()).style(palette.insight(trend.insight_tone())),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(16),
        ],
    )
    .header(Row::new(vec!["Rank", "Keyword", "Volume", "Docs", "Ratio", "Insight"]).style(palette.muted()))
    .highlight_style(palette.selected());
    let mut table_state = TableState::default().with_selected(focused.then_some(state.selections.shopping));
    frame.render_stateful_widget(table, parts[1], &mut table_state);
}
