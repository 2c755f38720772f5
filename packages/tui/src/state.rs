use keyscope_core::{
    DifficultyResult, GoldenKeyword, RelatedKeyword, ResultItem, ResultType, SectionPreview,
    ShoppingTrend, Summary, ThemeMode, TrendingKeyword, View,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tui_input::Input;

/// Application state shared between the controllers and the renderer
pub type SharedState = Arc<RwLock<AppState>>;

/// Which view is visible and which result category the dashboard lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_view: View,
    /// Only meaningful while the dashboard is active
    pub active_result_type: ResultType,
}

/// Loading/empty/error state of one render region
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Panel<T> {
    #[default]
    Idle,
    Loading(String),
    Ready(T),
    Empty(String),
    Failed(String),
}

impl<T> Panel<T> {
    pub fn loading(label: impl Into<String>) -> Self {
        Panel::Loading(label.into())
    }

    pub fn failed(label: impl Into<String>) -> Self {
        Panel::Failed(label.into())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Panel<Vec<T>> {
    /// `Ready` for a non-empty list, `Empty` otherwise
    pub fn from_rows(rows: Vec<T>, empty_label: impl Into<String>) -> Self {
        if rows.is_empty() {
            Panel::Empty(empty_label.into())
        } else {
            Panel::Ready(rows)
        }
    }

    pub fn rows(&self) -> &[T] {
        self.ready().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Whether a trigger control accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Ready,
    Busy,
}

/// Identity of an analysis request, captured when it is issued and re-validated on arrival
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub epoch: u64,
    pub keyword: String,
}

/// Identity of one result-listing fetch within an analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTicket {
    pub analysis: RequestTicket,
    pub epoch: u64,
    pub result_type: ResultType,
}

/// Everything shown for the current keyword. Replaced wholesale by each new analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSession {
    pub keyword: String,
    /// Analysis epoch that produced this session
    pub epoch: u64,
    pub summary: Summary,
    pub sections: SectionPreview,
    pub difficulty: Option<DifficultyResult>,
    pub related: Panel<Vec<RelatedKeyword>>,
    pub results: Panel<Vec<ResultItem>>,
}

impl AnalysisSession {
    pub fn new(ticket: &RequestTicket, summary: Summary, sections: SectionPreview) -> Self {
        Self {
            keyword: ticket.keyword.clone(),
            epoch: ticket.epoch,
            summary,
            sections,
            difficulty: None,
            related: Panel::Idle,
            results: Panel::Idle,
        }
    }
}

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    /// Typing into the keyword input
    #[default]
    Input,
    /// Moving through the rows of the active view
    Rows,
}

/// Which list the dashboard row cursor moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPane {
    #[default]
    Results,
    Related,
}

/// Row cursor per list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selections {
    pub results: usize,
    pub related: usize,
    pub realtime: usize,
    pub shopping: usize,
    pub gold: usize,
}

/// Application state management
#[derive(Debug)]
pub struct AppState {
    pub view: ViewState,
    pub keyword_input: Input,
    current_keyword: Option<String>,
    analysis_epoch: u64,
    listing_epoch: u64,
    analyses_in_flight: usize,
    gold_epoch: u64,
    gold_in_flight: usize,
    pub session: Option<AnalysisSession>,
    pub onboarding_visible: bool,
    sponsored_visible: bool,
    pub search_control: ControlState,
    pub realtime: Panel<Vec<TrendingKeyword>>,
    pub shopping: Panel<Vec<ShoppingTrend>>,
    pub shopping_category: String,
    pub shopping_armed: bool,
    pub gold: Panel<Vec<GoldenKeyword>>,
    pub gold_control: ControlState,
    pub theme: ThemeMode,
    pub focus: FocusArea,
    pub dashboard_pane: DashboardPane,
    pub selections: Selections,
}

impl AppState {
    pub fn new(shopping_category: impl Into<String>) -> Self {
        Self {
            view: ViewState::default(),
            keyword_input: Input::default(),
            current_keyword: None,
            analysis_epoch: 0,
            listing_epoch: 0,
            analyses_in_flight: 0,
            gold_epoch: 0,
            gold_in_flight: 0,
            session: None,
            onboarding_visible: true,
            sponsored_visible: false,
            search_control: ControlState::Ready,
            realtime: Panel::Idle,
            shopping: Panel::Idle,
            shopping_category: shopping_category.into(),
            shopping_armed: false,
            gold: Panel::Idle,
            gold_control: ControlState::Ready,
            theme: ThemeMode::default(),
            focus: FocusArea::default(),
            dashboard_pane: DashboardPane::default(),
            selections: Selections::default(),
        }
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    pub fn current_keyword(&self) -> Option<&str> {
        self.current_keyword.as_deref()
    }

    /// Make `keyword` current and hand out the ticket its responses must present
    pub fn begin_analysis(&mut self, keyword: &str) -> RequestTicket {
        self.analysis_epoch += 1;
        self.current_keyword = Some(keyword.to_string());
        self.analyses_in_flight += 1;
        self.search_control = ControlState::Busy;
        RequestTicket {
            epoch: self.analysis_epoch,
            keyword: keyword.to_string(),
        }
    }

    /// Release the search control once no analysis is in flight
    pub fn finish_analysis(&mut self) {
        self.analyses_in_flight = self.analyses_in_flight.saturating_sub(1);
        if self.analyses_in_flight == 0 {
            self.search_control = ControlState::Ready;
        }
    }

    /// Start a golden discovery. Only the newest one may render its response.
    pub fn begin_gold_discovery(&mut self) -> u64 {
        self.gold_epoch += 1;
        self.gold_in_flight += 1;
        self.gold_control = ControlState::Busy;
        self.gold_epoch
    }

    /// Release the gold control once no discovery is in flight.
    /// Returns whether the discovery started under `epoch` is still the newest.
    pub fn finish_gold_discovery(&mut self, epoch: u64) -> bool {
        self.gold_in_flight = self.gold_in_flight.saturating_sub(1);
        if self.gold_in_flight == 0 {
            self.gold_control = ControlState::Ready;
        }
        epoch == self.gold_epoch
    }

    /// Ticket of the analysis whose session is on screen. After a rejected or still
    /// pending analysis this is not the current keyword's ticket.
    pub fn shown_ticket(&self) -> Option<RequestTicket> {
        self.session.as_ref().map(|session| RequestTicket {
            epoch: session.epoch,
            keyword: session.keyword.clone(),
        })
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.epoch == self.analysis_epoch
            && self.current_keyword.as_deref() == Some(ticket.keyword.as_str())
    }

    /// Session belonging to `ticket`, if it is still the current one
    pub fn session_for_mut(&mut self, ticket: &RequestTicket) -> Option<&mut AnalysisSession> {
        if !self.is_current(ticket) {
            return None;
        }
        self.session
            .as_mut()
            .filter(|session| session.keyword == ticket.keyword)
    }

    /// Start a result-listing fetch; any older listing fetch becomes stale
    pub fn begin_listing(&mut self, analysis: RequestTicket, result_type: ResultType) -> ListingTicket {
        self.listing_epoch += 1;
        ListingTicket {
            analysis,
            epoch: self.listing_epoch,
            result_type,
        }
    }

    /// Session a listing belongs to, if that session is still on screen and the listing is
    /// the latest one for the active result type
    pub fn listing_session_mut(&mut self, ticket: &ListingTicket) -> Option<&mut AnalysisSession> {
        if ticket.epoch != self.listing_epoch || ticket.result_type != self.view.active_result_type {
            return None;
        }
        self.session.as_mut().filter(|session| {
            session.epoch == ticket.analysis.epoch && session.keyword == ticket.analysis.keyword
        })
    }

    pub fn sponsored_visible(&self) -> bool {
        self.sponsored_visible
    }

    /// Show the sponsored region. Returns true only the first time.
    pub fn reveal_sponsored(&mut self) -> bool {
        if self.sponsored_visible {
            return false;
        }
        self.sponsored_visible = true;
        true
    }

    /// Keyword typed into the input, trimmed; `None` if blank
    pub fn typed_keyword(&self) -> Option<String> {
        let value = self.keyword_input.value().trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn set_keyword_input(&mut self, keyword: &str) {
        self.keyword_input = Input::new(keyword.to_string());
    }

    /// Number of selectable rows in the active view
    pub fn row_count(&self) -> usize {
        match self.view.active_view {
            View::Dashboard => match (&self.session, self.dashboard_pane) {
                (Some(session), DashboardPane::Results) => session.results.rows().len(),
                (Some(session), DashboardPane::Related) => session.related.rows().len(),
                (None, _) => 0,
            },
            View::Realtime => self.realtime.rows().len(),
            View::Shopping => self.shopping.rows().len(),
            View::Gold => self.gold.rows().len(),
        }
    }

    /// Cursor of the list shown in the active view
    pub fn selection(&self) -> usize {
        match self.view.active_view {
            View::Dashboard => match self.dashboard_pane {
                DashboardPane::Results => self.selections.results,
                DashboardPane::Related => self.selections.related,
            },
            View::Realtime => self.selections.realtime,
            View::Shopping => self.selections.shopping,
            View::Gold => self.selections.gold,
        }
    }

    fn selection_mut(&mut self) -> &mut usize {
        match self.view.active_view {
            View::Dashboard => match self.dashboard_pane {
                DashboardPane::Results => &mut self.selections.results,
                DashboardPane::Related => &mut self.selections.related,
            },
            View::Realtime => &mut self.selections.realtime,
            View::Shopping => &mut self.selections.shopping,
            View::Gold => &mut self.selections.gold,
        }
    }

    /// Move the row cursor, wrapping around
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.row_count();
        if count == 0 {
            *self.selection_mut() = 0;
            return;
        }
        let current = self.selection().min(count - 1) as isize;
        let next = (current + delta).rem_euclid(count as isize) as usize;
        *self.selection_mut() = next;
    }

    pub fn toggle_dashboard_pane(&mut self) {
        self.dashboard_pane = match self.dashboard_pane {
            DashboardPane::Results => DashboardPane::Related,
            DashboardPane::Related => DashboardPane::Results,
        };
    }
}
