//! "Cashback Trend" bar chart.
//!
//! One bar per history record, labelled with its date. Bars are never merged,
//! so two bookings on the same day show up as two bars.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use rewards_core::formatting;
use rewards_core::models::TrendSeries;

use crate::themes::Theme;

const MAX_BAR_WIDTH: u16 = 12;
const MIN_BAR_WIDTH: u16 = 3;
const BAR_GAP: u16 = 2;

/// Legend text naming what the bars measure.
pub const LEGEND_LABEL: &str = "Cashback Amount";

/// A single bar ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    /// Category label (the booking date).
    pub label: String,
    /// Bar height in minor units (cents); negative values clamp to zero.
    pub height: u64,
    /// Text drawn on the bar, e.g. `"$25.50"`.
    pub value_text: String,
}

/// Map the series to bars, preserving order one-to-one.
pub fn chart_points(series: &TrendSeries, currency: &str) -> Vec<ChartPoint> {
    series
        .points()
        .map(|(label, value)| ChartPoint {
            label: label.to_string(),
            height: to_minor_units(value),
            value_text: formatting::format_currency(value, currency),
        })
        .collect()
}

/// Negative values clamp to zero, values too large for `u64` to `u64::MAX`.
fn to_minor_units(value: Decimal) -> u64 {
    if value.is_sign_negative() {
        return 0;
    }
    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.round().to_u64())
        .unwrap_or(u64::MAX)
}

/// Widest bar that still fits `count` bars (plus gaps) inside `inner_width`.
pub fn bar_width_for(inner_width: u16, count: usize) -> u16 {
    if count == 0 {
        return MAX_BAR_WIDTH;
    }
    let count = count as u16;
    let gaps = BAR_GAP.saturating_mul(count.saturating_sub(1));
    (inner_width.saturating_sub(gaps) / count).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

/// Render the chart into `area`.
pub fn render_trend_chart(frame: &mut Frame, area: Rect, points: &[ChartPoint], theme: &Theme) {
    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.height)
                .label(Line::from(p.label.clone()))
                .text_value(p.value_text.clone())
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.card_border)
                .title(Span::styled(" Cashback Trend ", theme.card_title))
                .title_bottom(legend(theme)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width_for(inner_width, bars.len()))
        .bar_gap(BAR_GAP)
        .bar_style(theme.chart_bar)
        .value_style(theme.chart_value)
        .label_style(theme.chart_label);

    frame.render_widget(chart, area);
}

fn legend(theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(" ■ ", theme.chart_bar),
        Span::styled(LEGEND_LABEL, theme.chart_label),
        Span::raw(" "),
    ])
    .right_aligned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn series() -> TrendSeries {
        TrendSeries {
            categories: vec![
                "2024-09-01".to_string(),
                "2024-08-15".to_string(),
                "2024-07-30".to_string(),
            ],
            values: vec![Decimal::new(2550, 2), Decimal::new(1575, 2), Decimal::new(30, 0)],
        }
    }

    #[test]
    fn test_chart_points_follow_series_order() {
        let points = chart_points(&series(), "$");
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2024-09-01", "2024-08-15", "2024-07-30"]);
        let heights: Vec<u64> = points.iter().map(|p| p.height).collect();
        assert_eq!(heights, vec![2550, 1575, 3000]);
        assert_eq!(points[0].value_text, "$25.50");
    }

    #[test]
    fn test_chart_points_keep_duplicate_dates() {
        let s = TrendSeries {
            categories: vec!["2024-09-01".to_string(), "2024-09-01".to_string()],
            values: vec![Decimal::ONE, Decimal::new(2, 0)],
        };
        assert_eq!(chart_points(&s, "$").len(), 2);
    }

    #[test]
    fn test_negative_value_clamps_to_zero_height() {
        assert_eq!(to_minor_units(Decimal::new(-5, 0)), 0);
        assert_eq!(to_minor_units(Decimal::new(15, 1)), 150);
    }

    #[test]
    fn test_huge_value_saturates_height() {
        assert_eq!(to_minor_units(Decimal::MAX), u64::MAX);
        assert_eq!(to_minor_units(Decimal::new(i64::MAX, 0)), u64::MAX);
    }

    #[test]
    fn test_bar_width_for() {
        assert_eq!(bar_width_for(100, 3), MAX_BAR_WIDTH);
        assert_eq!(bar_width_for(20, 3), 5);
        assert_eq!(bar_width_for(4, 10), MIN_BAR_WIDTH);
        assert_eq!(bar_width_for(50, 0), MAX_BAR_WIDTH);
    }

    #[test]
    fn test_render_trend_chart_draws_labels() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let theme = Theme::dark();
        let points = chart_points(&series(), "$");
        terminal
            .draw(|frame| render_trend_chart(frame, frame.area(), &points, &theme))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Cashback Trend"));
        assert!(text.contains("2024-09-01"));
        assert!(text.contains("2024-07-30"));
        assert!(text.contains(LEGEND_LABEL));
    }

    #[test]
    fn test_render_empty_chart_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let theme = Theme::classic();
        terminal
            .draw(|frame| render_trend_chart(frame, frame.area(), &[], &theme))
            .unwrap();
    }
}
