//! Main application state and TUI event loop for the rewards dashboard.
//!
//! [`App`] owns the theme, the source transactions, the derived snapshot and
//! the local control state (amount input, focus, status line). All mutation
//! happens in response to key presses on the current task.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame, Terminal,
};

use rewards_core::calculations::CashbackCalculator;
use rewards_core::cashout::review_cashout;
use rewards_core::formatting::format_currency;
use rewards_core::models::{RewardsSnapshot, Transaction, TrendSeries};
use rewards_data::analysis::AnalysisResult;

use crate::components::cashout_panel::{CashoutPanel, Focus, PANEL_HEIGHT};
use crate::components::header::Header;
use crate::components::summary_card::{SummaryCard, CARD_HEIGHT};
use crate::history_table;
use crate::themes::{StatusKind, Theme};
use crate::trend_chart;

const HELP_TEXT: &str = "Tab: next control · Enter: activate · r: recalculate · q/Esc: quit";
const NO_HISTORY_HEIGHT: u16 = 6;
const MIN_CHART_HEIGHT: u16 = 8;

// ── StatusMessage ─────────────────────────────────────────────────────────────

/// One-line feedback shown under the cashout panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the rewards dashboard.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Account whose rewards are shown.
    pub account: String,
    /// Name of the source the transactions came from.
    pub source_name: String,
    /// Currency prefix for every amount.
    pub currency: String,
    /// Derived history and card figures.
    pub snapshot: RewardsSnapshot,
    /// Chart input derived from `snapshot`.
    pub series: TrendSeries,
    /// Raw text of the cashout amount input.
    pub cashout_input: String,
    /// Control that receives key presses.
    pub focus: Focus,
    /// Latest feedback message, if any.
    pub status: Option<StatusMessage>,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    transactions: Vec<Transaction>,
}

impl App {
    /// Construct the dashboard from a completed analysis run.
    pub fn new(theme_name: &str, currency: String, analysis: AnalysisResult) -> Self {
        let series = CashbackCalculator::trend_series(&analysis.snapshot.history);
        Self {
            theme: Theme::from_name(theme_name),
            account: analysis.metadata.account,
            source_name: analysis.metadata.source,
            currency,
            snapshot: analysis.snapshot,
            series,
            cashout_input: String::new(),
            focus: Focus::default(),
            status: None,
            should_quit: false,
            transactions: analysis.transactions,
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the dashboard until the user quits.
    ///
    /// Polls `crossterm` events with a 250 ms timeout and yields to the
    /// runtime every tick so an outer `ctrl_c` watcher can fire. The terminal
    /// is restored when this future finishes, fails, or is dropped.
    pub async fn run(mut self) -> io::Result<()> {
        let _guard = TerminalGuard::enter(io::stdout())?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        self.event_loop(&mut terminal).await
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            tokio::task::yield_now().await;
        }

        Ok(())
    }

    // ── Input handling ────────────────────────────────────────────────────────

    /// Apply a single key press to the application state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Enter => match self.focus {
                Focus::AmountInput | Focus::CashOutButton => self.submit_cashout(),
                Focus::PromoButton => self.generate_promo_code(),
            },
            // Everything else typed into the input goes in verbatim.
            code if self.focus == Focus::AmountInput => self.edit_input(code),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.refresh(),
            _ => {}
        }
    }

    fn edit_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.cashout_input.push(c),
            KeyCode::Backspace => {
                self.cashout_input.pop();
            }
            _ => {}
        }
    }

    // ── Actions ───────────────────────────────────────────────────────────────

    /// Cash out the typed amount.
    ///
    /// Payouts are not processed: the input is reviewed for the status line,
    /// then cleared. History, total and balance are left untouched.
    pub fn submit_cashout(&mut self) {
        let raw = std::mem::take(&mut self.cashout_input);
        let balance = self.snapshot.summary.current_balance;

        let status = match review_cashout(&raw, balance) {
            Ok(amount) => {
                tracing::info!(
                    account = %self.account,
                    amount = %amount,
                    "cashout requested; payouts are not processed"
                );
                StatusMessage::new(
                    StatusKind::Info,
                    format!(
                        "Cashout request for {} noted. Payouts are not processed yet.",
                        format_currency(amount, &self.currency)
                    ),
                )
            }
            Err(rejection) => {
                tracing::warn!(
                    account = %self.account,
                    input = %raw,
                    reason = %rejection,
                    "cashout input rejected"
                );
                StatusMessage::new(StatusKind::Warning, rejection.to_string())
            }
        };
        self.status = Some(status);
    }

    /// Promo codes are not available yet; only reports that fact.
    pub fn generate_promo_code(&mut self) {
        tracing::info!(account = %self.account, "promo code generation requested");
        self.status = Some(StatusMessage::new(
            StatusKind::Info,
            "Promo code generation is not available yet.",
        ));
    }

    /// Re-run the derivation pass over the source list.
    ///
    /// On failure the previous snapshot stays on screen.
    pub fn refresh(&mut self) {
        match CashbackCalculator::derive_snapshot(&self.transactions) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.series = CashbackCalculator::trend_series(&self.snapshot.history);
                tracing::debug!(
                    total_cashback = %self.snapshot.summary.total_cashback,
                    "cashback recalculated"
                );
                self.status = Some(StatusMessage::new(
                    StatusKind::Success,
                    "Cashback recalculated.",
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "cashback recalculation failed");
                self.status = Some(StatusMessage::new(StatusKind::Warning, e.to_string()));
            }
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the full dashboard into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let empty = self.snapshot.is_empty();
        let layout = DashboardLayout::split(frame.area(), empty, self.snapshot.history.len());

        frame.render_widget(
            Paragraph::new(Text::from(
                Header::new(&self.account, &self.source_name, &self.theme).to_lines(),
            )),
            layout.header,
        );

        self.render_cards(frame, layout.cards);

        if empty {
            history_table::render_no_history(frame, layout.history, &self.theme);
        } else {
            let rows = history_table::build_rows(&self.snapshot.history, &self.currency);
            history_table::render_history_table(frame, layout.history, &rows, &self.theme);
        }

        if let Some(chart_area) = layout.chart {
            let points = trend_chart::chart_points(&self.series, &self.currency);
            trend_chart::render_trend_chart(frame, chart_area, &points, &self.theme);
        }

        CashoutPanel::new(&self.cashout_input, self.focus, &self.theme).render(frame, layout.panel);

        let status_line = match &self.status {
            Some(msg) => Line::from(Span::styled(
                msg.text.as_str(),
                self.theme.status_style(msg.kind),
            )),
            None => Line::from(""),
        };
        frame.render_widget(Paragraph::new(status_line), layout.status);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(HELP_TEXT, self.theme.dim))),
            layout.help,
        );
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let summary = self.snapshot.summary;
        SummaryCard::new(
            "Total Cashback Earned",
            summary.total_cashback,
            &self.currency,
            &self.theme,
        )
        .render(frame, halves[0]);
        SummaryCard::new(
            "Current Balance",
            summary.current_balance,
            &self.currency,
            &self.theme,
        )
        .render(frame, halves[1]);
    }
}

// ── TerminalGuard ─────────────────────────────────────────────────────────────

/// Holds raw mode and the alternate screen; undoes both on drop.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, drop restores raw mode even if the next step fails.
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Screen regions, top to bottom.
struct DashboardLayout {
    header: Rect,
    cards: Rect,
    history: Rect,
    chart: Option<Rect>,
    panel: Rect,
    status: Rect,
    help: Rect,
}

impl DashboardLayout {
    fn split(area: Rect, empty: bool, row_count: usize) -> Self {
        if empty {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(Header::HEIGHT),
                    Constraint::Length(CARD_HEIGHT),
                    Constraint::Min(NO_HISTORY_HEIGHT),
                    Constraint::Length(PANEL_HEIGHT),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);
            return Self {
                header: chunks[0],
                cards: chunks[1],
                history: chunks[2],
                chart: None,
                panel: chunks[3],
                status: chunks[4],
                help: chunks[5],
            };
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Header::HEIGHT),
                Constraint::Length(CARD_HEIGHT),
                Constraint::Length(history_table::required_height(row_count)),
                Constraint::Min(MIN_CHART_HEIGHT),
                Constraint::Length(PANEL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);
        Self {
            header: chunks[0],
            cards: chunks[1],
            history: chunks[2],
            chart: Some(chunks[3]),
            panel: chunks[4],
            status: chunks[5],
            help: chunks[6],
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
