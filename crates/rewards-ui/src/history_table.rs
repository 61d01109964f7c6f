//! Cashback history table.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per cashback
//! record, in the order the source supplied them.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use rewards_core::formatting;
use rewards_core::models::CashbackRecord;

use crate::themes::Theme;

pub const HEADERS: [&str; 3] = ["DATE", "AMOUNT", "BOOKING DETAILS"];

/// Display values for a single history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// Transaction id the row is keyed by.
    pub id: u32,
    /// Booking date, `YYYY-MM-DD`.
    pub date: String,
    /// Formatted cashback amount, e.g. `"$25.50"`.
    pub amount: String,
    pub booking_details: String,
}

impl HistoryRow {
    pub fn from_record(record: &CashbackRecord, currency: &str) -> Self {
        Self {
            id: record.id(),
            date: record.date().to_string(),
            amount: formatting::format_currency(record.cashback_amount, currency),
            booking_details: record.booking_details().to_string(),
        }
    }
}

/// Convert records to rows without reordering.
pub fn build_rows(history: &[CashbackRecord], currency: &str) -> Vec<HistoryRow> {
    history
        .iter()
        .map(|r| HistoryRow::from_record(r, currency))
        .collect()
}

/// Height needed to show every row: borders, header, and one line per row.
pub fn required_height(row_count: usize) -> u16 {
    u16::try_from(row_count)
        .unwrap_or(u16::MAX)
        .saturating_add(3)
}

/// Render the history table into `area`.
pub fn render_history_table(frame: &mut Frame, area: Rect, rows: &[HistoryRow], theme: &Theme) {
    let header = Row::new(
        HEADERS
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header)),
    )
    .height(1);

    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(row.date.clone()),
                Cell::from(row.amount.clone()),
                Cell::from(row.booking_details.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Min(20),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.card_border)
                .title(Span::styled(" Cashback History ", theme.card_title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render a placeholder when the account has no cashback history.
pub fn render_no_history(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No cashback history", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Cashback appears here once bookings are recorded.",
            theme.dim,
        )),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.card_border)
                .title(Span::styled(" Cashback History ", theme.card_title)),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
