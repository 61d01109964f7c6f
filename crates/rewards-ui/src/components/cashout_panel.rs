use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::themes::Theme;

/// Rows the panel needs: border, section title, input box (3), border.
pub const PANEL_HEIGHT: u16 = 6;

pub const CASH_OUT_LABEL: &str = " Cash Out ";
pub const PROMO_LABEL: &str = " Generate Promo Code ";

/// Which control receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The cashout amount text input.
    #[default]
    AmountInput,
    /// The "Cash Out" button.
    CashOutButton,
    /// The "Generate Promo Code" button.
    PromoButton,
}

impl Focus {
    /// Next control in tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Focus::AmountInput => Focus::CashOutButton,
            Focus::CashOutButton => Focus::PromoButton,
            Focus::PromoButton => Focus::AmountInput,
        }
    }

    /// Previous control in tab order, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Focus::AmountInput => Focus::PromoButton,
            Focus::CashOutButton => Focus::AmountInput,
            Focus::PromoButton => Focus::CashOutButton,
        }
    }
}

/// "Cashout Options" card: direct cashout on the left, promo code on the right.
pub struct CashoutPanel<'a> {
    /// Raw text typed into the amount input.
    pub input: &'a str,
    pub focus: Focus,
    pub theme: &'a Theme,
}

impl<'a> CashoutPanel<'a> {
    pub fn new(input: &'a str, focus: Focus, theme: &'a Theme) -> Self {
        Self {
            input,
            focus,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.card_border)
            .title(Span::styled(" Cashout Options ", self.theme.card_title));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        self.render_direct_cashout(frame, halves[0]);
        self.render_promo(frame, halves[1]);
    }

    fn render_direct_cashout(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3)])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Direct Cashout", self.theme.label))),
            rows[0],
        );

        let button_width = CASH_OUT_LABEL.width() as u16 + 2;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(button_width)])
            .split(rows[1]);

        let input_focused = self.focus == Focus::AmountInput;
        let input_style = if input_focused {
            self.theme.input_focused
        } else {
            self.theme.input
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused(self.theme.card_border, input_focused));
        let input_line = if self.input.is_empty() {
            Line::from(Span::styled("Enter amount", self.theme.dim))
        } else {
            Line::from(Span::styled(self.input, input_style))
        };
        let input_inner = input_block.inner(cols[0]);
        frame.render_widget(Paragraph::new(input_line).block(input_block), cols[0]);

        if input_focused && input_inner.width > 0 && input_inner.height > 0 {
            let offset = (self.input.width() as u16).min(input_inner.width.saturating_sub(1));
            frame.set_cursor_position((input_inner.x + offset, input_inner.y));
        }

        let button = button_line(
            CASH_OUT_LABEL,
            self.theme
                .focused(self.theme.button_primary, self.focus == Focus::CashOutButton),
        );
        frame.render_widget(Paragraph::new(button), pad_top(cols[1]));
    }

    fn render_promo(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Generate Promo Code",
                self.theme.label,
            ))),
            rows[0],
        );
        let button = button_line(
            PROMO_LABEL,
            self.theme
                .focused(self.theme.button_secondary, self.focus == Focus::PromoButton),
        );
        frame.render_widget(Paragraph::new(button), rows[2]);
    }
}

fn button_line(label: &'static str, style: ratatui::style::Style) -> Line<'static> {
    Line::from(Span::styled(label, style))
}

/// Drop the first row so a one-line button lines up with a bordered input.
fn pad_top(area: Rect) -> Rect {
    if area.height <= 1 {
        return area;
    }
    Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_focus_cycles_forward() {
        let f = Focus::default();
        assert_eq!(f, Focus::AmountInput);
        assert_eq!(f.next(), Focus::CashOutButton);
        assert_eq!(f.next().next(), Focus::PromoButton);
        assert_eq!(f.next().next().next(), Focus::AmountInput);
    }

    #[test]
    fn test_focus_cycles_backward() {
        assert_eq!(Focus::AmountInput.previous(), Focus::PromoButton);
        assert_eq!(Focus::PromoButton.previous(), Focus::CashOutButton);
        assert_eq!(Focus::CashOutButton.previous(), Focus::AmountInput);
    }

    #[test]
    fn test_pad_top() {
        let area = Rect::new(0, 0, 10, 3);
        assert_eq!(pad_top(area), Rect::new(0, 1, 10, 2));
        let flat = Rect::new(0, 0, 10, 1);
        assert_eq!(pad_top(flat), flat);
    }

    #[test]
    fn test_render_shows_placeholder_and_buttons() {
        let mut terminal = Terminal::new(TestBackend::new(100, PANEL_HEIGHT)).unwrap();
        let theme = Theme::dark();
        terminal
            .draw(|frame| {
                CashoutPanel::new("", Focus::AmountInput, &theme).render(frame, frame.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Enter amount"));
        assert!(text.contains("Cash Out"));
        assert!(text.contains("Generate Promo Code"));
    }

    #[test]
    fn test_render_shows_typed_input() {
        let mut terminal = Terminal::new(TestBackend::new(100, PANEL_HEIGHT)).unwrap();
        let theme = Theme::classic();
        terminal
            .draw(|frame| {
                CashoutPanel::new("42.5", Focus::CashOutButton, &theme)
                    .render(frame, frame.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("42.5"));
        assert!(!text.contains("Enter amount"));
    }
}
