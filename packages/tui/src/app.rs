use crate::api::AnalyticsApi;
use crate::controllers::{
    AnalysisPipeline, ResultFilterController, TrendDiscoveryController, ViewController,
};
use crate::events::{AppEvent, EventHandler, DEFAULT_TICK_RATE_MS};
use crate::notifications::NotificationQueue;
use crate::preferences::{PreferenceBackend, PreferenceStore};
use crate::state::{AppState, ControlState, DashboardPane, FocusArea, SharedState};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keyscope_config::DashboardConfig;
use keyscope_core::{ThemeMode, View};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use tui_input::InputRequest;

/// Main TUI application struct
pub struct App {
    state: SharedState,
    notifications: NotificationQueue,
    api: Arc<dyn AnalyticsApi>,
    pipeline: AnalysisPipeline,
    filter: ResultFilterController,
    views: ViewController,
    preferences: PreferenceStore,
    tick_rate: u64,
    theme_override: Option<ThemeMode>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: &DashboardConfig,
        api: Arc<dyn AnalyticsApi>,
        preferences: Arc<dyn PreferenceBackend>,
    ) -> Self {
        Self::with_notifications(config, api, preferences, NotificationQueue::new())
    }

    pub fn with_notifications(
        config: &DashboardConfig,
        api: Arc<dyn AnalyticsApi>,
        preferences: Arc<dyn PreferenceBackend>,
        notifications: NotificationQueue,
    ) -> Self {
        let state = AppState::new(config.shopping_category.clone()).into_shared();
        let pipeline = AnalysisPipeline::new(state.clone(), api.clone(), notifications.clone());
        let filter = ResultFilterController::new(state.clone(), pipeline.clone());
        let discovery = TrendDiscoveryController::new(
            state.clone(),
            api.clone(),
            notifications.clone(),
            pipeline.clone(),
            config.gold_seed.clone(),
        );
        let views = ViewController::new(state.clone(), discovery);
        let preferences = PreferenceStore::new(preferences, state.clone(), notifications.clone());

        Self {
            state,
            notifications,
            api,
            pipeline,
            filter,
            views,
            preferences,
            tick_rate: DEFAULT_TICK_RATE_MS,
            theme_override: None,
            should_quit: false,
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: u64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Use `theme` for this session instead of the saved preference
    pub fn with_theme_override(mut self, theme: Option<ThemeMode>) -> Self {
        self.theme_override = theme;
        self
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn views(&self) -> &ViewController {
        &self.views
    }

    pub fn filter(&self) -> &ResultFilterController {
        &self.filter
    }

    pub fn pipeline(&self) -> &AnalysisPipeline {
        &self.pipeline
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Apply the theme, then check the service and preload realtime trends in the background
    pub async fn start(&self) {
        match self.theme_override {
            Some(theme) => self.preferences.apply(theme).await,
            None => {
                self.preferences.load().await;
            }
        }

        let api = self.api.clone();
        let notifications = self.notifications.clone();
        tokio::spawn(async move {
            match api.health().await {
                Ok(true) => debug!("Analytics service is healthy"),
                Ok(false) => {
                    warn!("Analytics service reported unhealthy");
                    notifications.error("Analytics service is not ready.");
                }
                Err(e) => {
                    warn!(error = %e, "Analytics service unreachable");
                    notifications.error(format!("Analytics service unreachable: {e}"));
                }
            }
        });

        let discovery = self.views.discovery().clone();
        tokio::spawn(async move { discovery.load_realtime().await });
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut event_handler = EventHandler::new(self.tick_rate);
        self.start().await;
        info!("Dashboard started");

        while !self.should_quit {
            {
                let state = self.state.read().await;
                let toasts = self.notifications.snapshot();
                terminal.draw(|frame| ui::render(frame, &state, &toasts))?;
            }

            match event_handler.next().await {
                Some(AppEvent::Key(key)) => self.handle_key_event(key).await?,
                Some(AppEvent::Tick) | Some(AppEvent::Resize) => {}
                Some(AppEvent::Quit) | None => self.quit(),
            }
        }

        info!("Dashboard stopped");
        Ok(())
    }

    /// Handle keyboard input
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.quit(),
                KeyCode::Char('t') => {
                    self.preferences.toggle().await;
                }
                KeyCode::Char('r') => self.refresh().await,
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => {
                self.views.cycle(true).await;
                return Ok(());
            }
            KeyCode::BackTab => {
                self.views.cycle(false).await;
                return Ok(());
            }
            KeyCode::F(n @ 1..=4) => {
                if let Some(view) = View::from_index(usize::from(n - 1)) {
                    self.views.activate(view).await;
                }
                return Ok(());
            }
            _ => {}
        }

        let focus = self.state.read().await.focus;
        match focus {
            FocusArea::Input => self.handle_input_key(key).await,
            FocusArea::Rows => self.handle_rows_key(key).await,
        }
        Ok(())
    }

    async fn handle_input_key(&mut self, key: KeyEvent) {
        let request = match key.code {
            KeyCode::Enter => {
                self.submit_input().await;
                return;
            }
            KeyCode::Esc => {
                self.state.write().await.set_keyword_input("");
                return;
            }
            KeyCode::Down => {
                self.state.write().await.focus = FocusArea::Rows;
                return;
            }
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return,
        };
        self.state.write().await.keyword_input.handle(request);
    }

    async fn handle_rows_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') | KeyCode::Esc => self.state.write().await.focus = FocusArea::Input,
            KeyCode::Up => {
                let mut state = self.state.write().await;
                if state.selection() == 0 {
                    state.focus = FocusArea::Input;
                } else {
                    state.move_selection(-1);
                }
            }
            KeyCode::Down => self.state.write().await.move_selection(1),
            KeyCode::Left => self.step_filter(false).await,
            KeyCode::Right => self.step_filter(true).await,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(view) = View::from_index(index) {
                    self.views.activate(view).await;
                }
            }
            KeyCode::Char('p') => self.state.write().await.toggle_dashboard_pane(),
            KeyCode::Char('r') => self.refresh().await,
            KeyCode::Char('t') => {
                self.preferences.toggle().await;
            }
            KeyCode::Char('o') => self.open_selected_link().await,
            KeyCode::Enter => self.open_selection().await,
            _ => {}
        }
    }

    /// Analyze the typed keyword; blank input is ignored
    async fn submit_input(&mut self) {
        let Some(keyword) = self.state.read().await.typed_keyword() else {
            debug!("Ignoring blank keyword");
            return;
        };

        let pipeline = self.pipeline.clone();
        tokio::spawn(async move { pipeline.analyze(&keyword).await });
        self.views.activate(View::Dashboard).await;
    }

    async fn step_filter(&mut self, forward: bool) {
        let view = self.state.read().await.view.active_view;
        match view {
            View::Dashboard => {
                self.filter.cycle(forward).await;
            }
            View::Shopping => {
                let category = self.views.discovery().cycle_category(forward).await;
                debug!(category = category.id, "Shopping category changed");
            }
            View::Realtime | View::Gold => {}
        }
    }

    /// Re-run the load behind the active view
    async fn refresh(&mut self) {
        let (view, keyword, gold_control) = {
            let state = self.state.read().await;
            (
                state.view.active_view,
                state.current_keyword().map(str::to_string),
                state.gold_control,
            )
        };

        let discovery = self.views.discovery().clone();
        match view {
            View::Dashboard => {
                if let Some(keyword) = keyword {
                    let pipeline = self.pipeline.clone();
                    tokio::spawn(async move { pipeline.analyze(&keyword).await });
                }
            }
            View::Realtime => {
                tokio::spawn(async move { discovery.load_realtime().await });
            }
            View::Shopping => {
                tokio::spawn(async move { discovery.load_shopping().await });
            }
            View::Gold => {
                if gold_control == ControlState::Ready {
                    tokio::spawn(async move { discovery.discover_gold().await });
                }
            }
        }
    }

    /// Act on the selected row: open a result link, or analyze the row's keyword
    async fn open_selection(&mut self) {
        let keyword = {
            let state = self.state.read().await;
            let index = state.selection();
            match state.view.active_view {
                View::Dashboard => match state.dashboard_pane {
                    DashboardPane::Results => None,
                    DashboardPane::Related => state
                        .session
                        .as_ref()
                        .and_then(|s| s.related.rows().get(index))
                        .map(|k| k.keyword.clone()),
                },
                View::Realtime => state.realtime.rows().get(index).map(|k| k.keyword.clone()),
                View::Shopping => state.shopping.rows().get(index).map(|k| k.keyword.clone()),
                View::Gold => state.gold.rows().get(index).map(|k| k.keyword.clone()),
            }
        };

        match keyword {
            Some(keyword) => {
                self.views
                    .discovery()
                    .analyze_row_keyword(&keyword, &self.views)
                    .await;
            }
            None => self.open_selected_link().await,
        }
    }

    async fn open_selected_link(&mut self) {
        let link = {
            let state = self.state.read().await;
            if state.view.active_view != View::Dashboard || state.dashboard_pane != DashboardPane::Results {
                return;
            }
            state
                .session
                .as_ref()
                .and_then(|s| s.results.rows().get(state.selections.results))
                .map(|item| item.link().to_string())
        };

        let Some(link) = link else {
            return;
        };
        if link.is_empty() {
            self.notifications.error("This result has no link.");
            return;
        }
        launch_link(link, self.notifications.clone(), |link| open::that(link));
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Hand `link` to the system opener on the blocking pool so the key handler never waits on it
fn launch_link(
    link: String,
    notifications: NotificationQueue,
    opener: fn(&str) -> io::Result<()>,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = opener(&link) {
            warn!(%link, error = %e, "Failed to open result link");
            notifications.error(format!("Could not open link: {e}"));
        }
    })
}
