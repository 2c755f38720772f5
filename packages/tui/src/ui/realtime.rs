use super::theme::Palette;
use super::{placeholder, view_block};
use crate::state::{AppState, FocusArea};
use keyscope_core::ChangeDirection;
use ratatui::layout::Constraint;
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row, Table, TableState};

/// Render the realtime trending keywords
pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let focused = state.focus == FocusArea::Rows;
    let block = view_block(" Realtime Trends  r refresh • Enter analyze ", palette, focused);

    if let Some(message) = placeholder(&state.realtime, palette) {
        frame.render_widget(message.block(block), area);
        return;
    }

    let rows = state.realtime.rows().iter().map(|k| {
        let direction_style = match k.change_direction {
            ChangeDirection::Up => Style::default().fg(palette.danger),
            ChangeDirection::Down => Style::default().fg(palette.primary),
            ChangeDirection::Flat => palette.muted(),
        };
        Row::new(vec![
            Cell::from(k.rank.to_string()).style(Style::default().fg(palette.accent)),
            Cell::from(k.keyword.clone()).style(palette.base().add_modifier(Modifier::BOLD)),
            Cell::from(k.change_direction.glyph()).style(direction_style),
        ])
    });

    let table = Table::new(rows, [Constraint::Length(4), Constraint::Min(10), Constraint::Length(4)])
        .highlight_style(palette.selected())
        .block(block);
    let mut table_state = TableState::default().with_selected(focused.then_some(state.selections.realtime));
    frame.render_stateful_widget(table, area, &mut table_state);
}
