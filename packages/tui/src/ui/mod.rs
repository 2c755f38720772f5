pub mod dashboard;
pub mod gold;
pub mod realtime;
pub mod shopping;
pub mod theme;
pub mod widgets;

use crate::notifications::Notification;
use crate::state::{AppState, ControlState, FocusArea, Panel};
use keyscope_core::View;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use strum::IntoEnumIterator;
use theme::Palette;
use widgets::{StatusBarWidget, ToastsWidget};

/// Main UI rendering function
pub fn render(frame: &mut Frame, state: &AppState, toasts: &[Notification]) {
    let palette = Palette::for_mode(state.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let sponsored_height = if state.sponsored_visible() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Keyword input
            Constraint::Length(1), // Navigation
            Constraint::Min(5),    // Active view
            Constraint::Length(sponsored_height),
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search(frame, state, &palette, chunks[0]);
    render_navigation(frame, state, &palette, chunks[1]);

    match state.view.active_view {
        View::Dashboard => dashboard::render(frame, state, &palette, chunks[2]),
        View::Realtime => realtime::render(frame, state, &palette, chunks[2]),
        View::Shopping => shopping::render(frame, state, &palette, chunks[2]),
        View::Gold => gold::render(frame, state, &palette, chunks[2]),
    }

    if state.sponsored_visible() {
        let sponsored = Paragraph::new(" Sponsored · Find more keyword tools at keyscope").style(palette.muted());
        frame.render_widget(sponsored, chunks[3]);
    }

    frame.render_widget(StatusBarWidget::new(state, &palette), chunks[4]);
    frame.render_widget(ToastsWidget::new(toasts, &palette), frame.area());
}

fn render_search(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let (label, label_style) = match state.search_control {
        ControlState::Ready => (" Analyze ", palette.title()),
        ControlState::Busy => (" Analyzing... ", Style::default().fg(palette.warning)),
    };
    let focused = state.focus == FocusArea::Input;
    let border = if focused { palette.accent } else { palette.border };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Keyword ")
        .title_style(palette.title())
        .title_bottom(Line::from(Span::styled(label, label_style)).right_aligned());

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = state.keyword_input.visual_scroll(inner_width);
    let input = Paragraph::new(state.keyword_input.value())
        .style(palette.base())
        .scroll((0, scroll as u16))
        .block(block);
    frame.render_widget(input, area);

    if focused {
        let cursor = state.keyword_input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((area.x + 1 + cursor, area.y + 1));
    }
}

fn render_navigation(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let titles: Vec<Line> = View::iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("F{} {}", i + 1, view.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.view.active_view.index())
        .style(palette.muted())
        .highlight_style(palette.title().add_modifier(Modifier::UNDERLINED))
        .divider("|");
    frame.render_widget(tabs, area);
}

/// Placeholder text for a panel without rows to show
pub(crate) fn placeholder<T>(panel: &Panel<T>, palette: &Palette) -> Option<Paragraph<'static>> {
    let (text, style) = match panel {
        Panel::Ready(_) => return None,
        Panel::Idle => (String::new(), palette.muted()),
        Panel::Loading(label) => (label.clone(), Style::default().fg(palette.info)),
        Panel::Empty(label) => (label.clone(), palette.muted()),
        Panel::Failed(label) => (label.clone(), Style::default().fg(palette.danger)),
    };
    Some(Paragraph::new(text).style(style).alignment(Alignment::Center))
}

/// Bordered block with the view's title
pub(crate) fn view_block<'a>(title: impl Into<Line<'a>>, palette: &Palette, focused: bool) -> Block<'a> {
    let border = if focused { palette.accent } else { palette.border };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(palette.title())
}
