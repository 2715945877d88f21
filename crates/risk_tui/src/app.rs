//! TUI application state and event handling.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tracing::error;

use risk_client::RiskApiClient;
use risk_core::dashboard::DashboardModel;
use risk_core::types::{Risk, RiskMetrics};

use crate::fetch::{FetchMessage, Fetcher};
use crate::screens;

/// Message shown when the metrics read fails.
pub const METRICS_LOAD_ERROR: &str = "Failed to load risk metrics. Please try again later.";

/// Message shown when a single-risk read fails.
pub const RISK_LOAD_ERROR: &str = "Failed to load risk details. Please try again later.";

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Dashboard with aggregate risk metrics
    Dashboard,
    /// Single risk opened from the recent-risks list
    RiskDetail,
}

impl Screen {
    /// Get screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::RiskDetail => "Risk Detail",
        }
    }
}

/// Per-mount fetch lifecycle of a screen.
///
/// Entered fresh at `Loading` on every mount; exactly one resolution moves
/// it to `Ready` or `Failed`. A failed screen offers no retry; leaving and
/// re-entering the screen is the recovery path.
#[derive(Debug, Clone)]
pub enum FetchState<T> {
    /// Fetch in flight.
    Loading,
    /// Fetch succeeded; the decoded payload is held for rendering.
    Ready(T),
    /// Fetch failed; only the fixed user-facing message is kept.
    Failed(&'static str),
}

/// Pure application state, kept separate from the terminal so the
/// transitions can be exercised directly.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,
    /// Dashboard fetch lifecycle
    pub dashboard: FetchState<RiskMetrics>,
    /// Detail fetch lifecycle
    pub detail: FetchState<Risk>,
    /// Selected index in the recent-risks list
    pub selected_recent: usize,
    /// Generation of the current mount's in-flight fetch
    generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state: dashboard mounted and loading.
    pub fn new() -> Self {
        Self {
            screen: Screen::Dashboard,
            dashboard: FetchState::Loading,
            detail: FetchState::Loading,
            selected_recent: 0,
            generation: 0,
        }
    }

    /// Generation of the current mount.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter the dashboard screen with a fresh fetch in flight.
    pub fn mount_dashboard(&mut self, generation: u64) {
        self.screen = Screen::Dashboard;
        self.dashboard = FetchState::Loading;
        self.selected_recent = 0;
        self.generation = generation;
    }

    /// Enter the detail screen with a fresh fetch in flight.
    pub fn mount_detail(&mut self, generation: u64) {
        self.screen = Screen::RiskDetail;
        self.detail = FetchState::Loading;
        self.generation = generation;
    }

    /// Apply a fetch resolution.
    ///
    /// A resolution stamped with a generation other than the current
    /// mount's belongs to a screen that has been left and is discarded
    /// without touching state.
    pub fn on_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Metrics { generation, result } => {
                if generation != self.generation {
                    return;
                }
                match result {
                    Ok(metrics) => self.dashboard = FetchState::Ready(metrics),
                    Err(err) => {
                        error!(error = %err, "Failed to fetch risk metrics");
                        self.dashboard = FetchState::Failed(METRICS_LOAD_ERROR);
                    }
                }
            }
            FetchMessage::RiskDetail { generation, result } => {
                if generation != self.generation {
                    return;
                }
                match result {
                    Ok(risk) => self.detail = FetchState::Ready(risk),
                    Err(err) => {
                        error!(error = %err, "Failed to fetch risk");
                        self.detail = FetchState::Failed(RISK_LOAD_ERROR);
                    }
                }
            }
        }
    }

    /// Display model of the dashboard, available once the fetch succeeded.
    pub fn resolved_dashboard(&self) -> Option<DashboardModel> {
        match &self.dashboard {
            FetchState::Ready(metrics) => Some(DashboardModel::resolve(metrics)),
            _ => None,
        }
    }

    /// Id of the currently selected recent risk, if any.
    pub fn selected_risk_id(&self) -> Option<u64> {
        let model = self.resolved_dashboard()?;
        model.recent_risks.get(self.selected_recent).map(|r| r.id)
    }

    /// Move the recent-risks selection up.
    pub fn select_previous(&mut self) {
        if self.selected_recent > 0 {
            self.selected_recent -= 1;
        }
    }

    /// Move the recent-risks selection down.
    pub fn select_next(&mut self) {
        let len = self
            .resolved_dashboard()
            .map(|m| m.recent_risks.len())
            .unwrap_or(0);
        if self.selected_recent < len.saturating_sub(1) {
            self.selected_recent += 1;
        }
    }
}

/// TUI application
pub struct TuiApp {
    /// Pure application state
    state: AppState,
    /// Fetch task spawner
    fetcher: Fetcher,
    /// Fetch resolutions from background tasks
    rx: mpsc::UnboundedReceiver<FetchMessage>,
    /// Exit flag
    should_quit: bool,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Create a new TUI application talking to `api_url` and start the
    /// dashboard fetch.
    pub fn new(api_url: String) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let client = Arc::new(RiskApiClient::new(api_url));
        let (mut fetcher, rx) = Fetcher::new(client);

        let mut state = AppState::new();
        let generation = fetcher.spawn_metrics();
        state.mount_dashboard(generation);

        Ok(Self {
            state,
            fetcher,
            rx,
            should_quit: false,
            terminal,
        })
    }

    /// Run the TUI event loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Apply any fetch resolutions that arrived since the last frame
            while let Ok(message) = self.rx.try_recv() {
                self.state.on_message(message);
            }

            // Take a snapshot of the state for rendering
            let state = self.state.clone();

            // Draw the current screen
            self.terminal.draw(|frame| {
                Self::draw(frame, &state);
            })?;

            // Handle events with timeout for async refresh
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match (self.state.screen, key) {
            (_, KeyCode::Char('q')) => self.should_quit = true,
            (Screen::Dashboard, KeyCode::Esc) => self.should_quit = true,
            (Screen::Dashboard, KeyCode::Up | KeyCode::Char('k')) => {
                self.state.select_previous();
            }
            (Screen::Dashboard, KeyCode::Down | KeyCode::Char('j')) => {
                self.state.select_next();
            }
            (Screen::Dashboard, KeyCode::Enter) => self.open_selected_risk(),
            (Screen::RiskDetail, KeyCode::Esc | KeyCode::Backspace) => {
                // Leaving the detail screen remounts the dashboard, which
                // issues a fresh metrics fetch.
                let generation = self.fetcher.spawn_metrics();
                self.state.mount_dashboard(generation);
            }
            _ => {}
        }
    }

    /// Open the detail screen for the selected recent risk.
    fn open_selected_risk(&mut self) {
        if let Some(id) = self.state.selected_risk_id() {
            let generation = self.fetcher.spawn_risk_detail(id);
            self.state.mount_detail(generation);
        }
    }

    /// Draw the current screen
    fn draw(frame: &mut Frame, state: &AppState) {
        let area = frame.size();

        // Create main layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer
            ])
            .split(area);

        // Draw header
        Self::draw_header(frame, chunks[0], state.screen);

        // Draw content based on current screen
        match state.screen {
            Screen::Dashboard => {
                screens::draw_dashboard(frame, chunks[1], &state.dashboard, state.selected_recent)
            }
            Screen::RiskDetail => screens::draw_risk_detail(frame, chunks[1], &state.detail),
        }

        // Draw footer
        Self::draw_footer(frame, chunks[2], state.screen);
    }

    /// Draw header
    fn draw_header(frame: &mut Frame, area: Rect, screen: Screen) {
        let title = format!(" Riskboard - {} ", screen.title());
        let header = Paragraph::new(title)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    /// Draw footer with keybindings
    fn draw_footer(frame: &mut Frame, area: Rect, screen: Screen) {
        let footer_text = match screen {
            Screen::Dashboard => " [Up/Down]Select recent risk | [Enter]Open | [q]Quit ",
            Screen::RiskDetail => " [Esc]Back to dashboard | [q]Quit ",
        };
        let footer = Paragraph::new(footer_text)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
