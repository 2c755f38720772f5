use super::theme::Palette;
use super::{placeholder, view_block};
use crate::state::{AnalysisSession, AppState, DashboardPane, FocusArea};
use keyscope_core::{format_count, format_ratio, ResultItem, ResultType};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Gauge, List, ListItem, ListState, Paragraph, Row, Table, TableState, Tabs, Wrap};
use strum::IntoEnumIterator;

const ONBOARDING: &str = "Type a keyword above and press Enter to analyze it.\n\n\
    • Search volume per channel and the document-to-volume ratio\n\
    • Section order on PC and mobile result pages\n\
    • Ranking difficulty, related keywords and live result listings\n\n\
    Tab/F1-F4 switch views • ↓ moves into the lists • Ctrl+T toggles the theme";

/// Render the keyword analysis view
pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let Some(session) = state.session.as_ref() else {
        let text = if state.onboarding_visible {
            ONBOARDING
        } else {
            "No analysis yet."
        };
        let welcome = Paragraph::new(text)
            .style(palette.base())
            .wrap(Wrap { trim: false })
            .block(view_block(" Welcome ", palette, false));
        frame.render_widget(welcome, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    render_summary(frame, session, palette, top[0]);
    render_sections(frame, session, palette, top[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    render_results(frame, state, session, palette, bottom[0]);
    render_related(frame, state, session, palette, bottom[1]);
}

fn render_summary(frame: &mut Frame, session: &AnalysisSession, palette: &Palette, area: Rect) {
    let block = view_block(format!(" {} ", session.keyword), palette, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    let summary = &session.summary;
    let band = summary.ratio_band();
    let difficulty = match &session.difficulty {
        Some(result) => Span::styled(
            format!("{} ({})", result.label, result.score),
            palette.difficulty_band(result.band()),
        ),
        None => Span::styled("-", palette.muted()),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("PC ", palette.muted()),
            Span::styled(format_count(summary.pc), Style::default().fg(palette.primary)),
            Span::styled("  Mobile ", palette.muted()),
            Span::styled(format_count(summary.mobile), Style::default().fg(palette.secondary)),
        ]),
        Line::from(vec![
            Span::styled("Documents ", palette.muted()),
            Span::raw(format_count(summary.doc_count)),
            Span::styled("  Ratio ", palette.muted()),
            Span::raw(format_ratio(summary.ratio, 4)),
            Span::raw(" "),
            Span::styled(band.label(), palette.ratio_band(band)),
        ]),
        Line::from(vec![Span::styled("Difficulty ", palette.muted()), difficulty]),
    ];
    frame.render_widget(Paragraph::new(lines).style(palette.base()), parts[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.primary))
        .percent(summary.volume_gauge_percent())
        .label(format!("Total {}", format_count(summary.total_volume)));
    frame.render_widget(gauge, parts[1]);
}

fn render_sections(frame: &mut Frame, session: &AnalysisSession, palette: &Palette, area: Rect) {
    let block = view_block(" Section order ", palette, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (title, entries, column) in [
        ("PC", &session.sections.pc, columns[0]),
        ("Mobile", &session.sections.mobile, columns[1]),
    ] {
        let mut lines = vec![Line::from(Span::styled(title, palette.title()))];
        lines.extend(entries.iter().map(|e| Line::from(e.as_str())));
        frame.render_widget(Paragraph::new(lines).style(palette.base()), column);
    }
}

fn render_results(
    frame: &mut Frame,
    state: &AppState,
    session: &AnalysisSession,
    palette: &Palette,
    area: Rect,
) {
    let focused = state.focus == FocusArea::Rows && state.dashboard_pane == DashboardPane::Results;
    let block = view_block(" Results  ←/→ filter • o open ", palette, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let active = state.view.active_result_type;
    let filters = Tabs::new(ResultType::iter().map(|t| t.label()).collect::<Vec<_>>())
        .select(ResultType::iter().position(|t| t == active).unwrap_or(0))
        .style(palette.muted())
        .highlight_style(palette.title());
    frame.render_widget(filters, parts[0]);

    if let Some(message) = placeholder(&session.results, palette) {
        frame.render_widget(message, parts[1]);
        return;
    }

    let items: Vec<ListItem> = session.results.rows().iter().map(|item| result_entry(item, palette)).collect();
    let mut list_state = ListState::default().with_selected(focused.then_some(state.selections.results));
    let list = List::new(items).highlight_style(palette.selected());
    frame.render_stateful_widget(list, parts[1], &mut list_state);
}

fn result_entry(item: &ResultItem, palette: &Palette) -> ListItem<'static> {
    let detail_style = match item {
        ResultItem::Commerce { .. } => Style::default().fg(palette.danger).add_modifier(Modifier::BOLD),
        ResultItem::Document { .. } => palette.base(),
    };
    ListItem::new(vec![
        Line::from(Span::styled(item.title().to_string(), palette.title())),
        Line::from(Span::styled(item.detail(), detail_style)),
        Line::from(Span::styled(item.attribution(), palette.muted())),
    ])
}

fn render_related(
    frame: &mut Frame,
    state: &AppState,
    session: &AnalysisSession,
    palette: &Palette,
    area: Rect,
) {
    let focused = state.focus == FocusArea::Rows && state.dashboard_pane == DashboardPane::Related;
    let block = view_block(" Related keywords  p switch ", palette, focused);

    if let Some(message) = placeholder(&session.related, palette) {
        frame.render_widget(message.block(block), area);
        return;
    }

    let rows = session.related.rows().iter().map(|k| {
        Row::new(vec![
            Cell::from(k.keyword.clone()),
            Cell::from(format_count(k.total_volume)),
            Cell::from(format_count(k.doc_count)),
            Cell::from(format_ratio(k.ratio, 2)),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(6),
        ],
    )
    .header(Row::new(vec!["Keyword", "Volume", "Docs", "Ratio"]).style(palette.muted()))
    .highlight_style(palette.selected())
    .block(block);

    let mut table_state = TableState::default().with_selected(focused.then_some(state.selections.related));
    frame.render_stateful_widget(table, area, &mut table_state);
}
