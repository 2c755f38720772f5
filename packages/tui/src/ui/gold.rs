use super::theme::Palette;
use super::{placeholder, view_block};
use crate::state::{AppState, ControlState, FocusArea};
use keyscope_core::{format_count, format_ratio, CompetitionLevel, GoldenKeyword};
use ratatui::layout::Constraint;
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row, Table, TableState};

/// Render golden keyword discovery, best score first
pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let focused = state.focus == FocusArea::Rows;
    let title = match state.gold_control {
        ControlState::Ready => " Golden Keywords  r discover • Enter analyze ",
        ControlState::Busy => " Golden Keywords  analyzing... ",
    };
    let block = view_block(title, palette, focused);

    if let Some(message) = placeholder(&state.gold, palette) {
        frame.render_widget(message.block(block), area);
        return;
    }

    let rows = state.gold.rows().iter().map(|keyword| golden_row(keyword, palette));
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(10),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Rank", "Keyword", "Trend", "PC / Mobile", "Docs", "Score", "Comp", "Status"])
            .style(palette.muted()),
    )
    .highlight_style(palette.selected())
    .block(block);

    let mut table_state = TableState::default().with_selected(focused.then_some(state.selections.gold));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn golden_row(keyword: &GoldenKeyword, palette: &Palette) -> Row<'static> {
    let trend_style = if keyword.is_trending() {
        Style::default().fg(palette.danger).add_modifier(Modifier::BOLD)
    } else {
        palette.muted()
    };
    let competition_style = Style::default().fg(match keyword.competition_level() {
        CompetitionLevel::High => palette.danger,
        CompetitionLevel::Mid => palette.warning,
        CompetitionLevel::Low => palette.success,
    });
    let tier_style = Style::default().fg(match keyword.tier_class() {
        "ultra" => palette.secondary,
        "golden" => palette.warning,
        "good" => palette.success,
        _ => palette.info,
    });

    let volumes = Line::from(vec![
        Span::styled(format_count(keyword.pc_volume), Style::default().fg(palette.primary)),
        Span::raw(" / "),
        Span::styled(format_count(keyword.mobile_volume), Style::default().fg(palette.secondary)),
    ]);

    Row::new(vec![
        Cell::from(keyword.rank_label().to_string()),
        Cell::from(keyword.keyword.clone()).style(palette.base().add_modifier(Modifier::BOLD)),
        Cell::from(keyword.trend_label().to_string()).style(trend_style),
        Cell::from(volumes),
        Cell::from(format_count(keyword.doc_count)),
        Cell::from(format_ratio(keyword.score, 2)),
        Cell::from(keyword.competition_label().to_string()).style(competition_style),
        Cell::from(keyword.tier_label().to_string()).style(tier_style),
    ])
}
