use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use rewards_core::formatting::format_currency;

use crate::themes::Theme;

/// Rows a card needs: border, title, blank, value, border.
pub const CARD_HEIGHT: u16 = 5;

/// A bordered card showing one headline money figure.
pub struct SummaryCard<'a> {
    pub title: &'a str,
    pub amount: Decimal,
    pub currency: &'a str,
    pub theme: &'a Theme,
}

impl<'a> SummaryCard<'a> {
    pub fn new(title: &'a str, amount: Decimal, currency: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            amount,
            currency,
            theme,
        }
    }

    /// Formatted amount, e.g. `"$71.25"`.
    pub fn value_text(&self) -> String {
        format_currency(self.amount, self.currency)
    }

    pub fn to_text(&self) -> Text<'a> {
        Text::from(vec![
            Line::from(Span::styled(self.title, self.theme.card_title)),
            Line::from(""),
            Line::from(Span::styled(self.value_text(), self.theme.card_value)),
        ])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.card_border);
        frame.render_widget(
            Paragraph::new(self.to_text())
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}
