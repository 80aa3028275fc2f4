use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::chart::view::{CandleColor, RenderBar};
use crate::model::timeframe::Timeframe;

/// Tab row of the eight timeframe labels; the active one is highlighted.
pub struct TimeframeTabs {
    pub active: Timeframe,
}

impl Widget for TimeframeTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, tf) in Timeframe::ALL.iter().enumerate() {
            let style = if *tf == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {}:{} ", i + 1, tf.label()), style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Hover-style readout for the newest visible bar.
pub struct StatusBar<'a> {
    pub bar: Option<&'a RenderBar>,
    pub window_end: usize,
    pub series_len: usize,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.bar {
            Some(bar) => {
                let close_color = match bar.color {
                    CandleColor::Bullish => Color::Green,
                    CandleColor::Bearish => Color::Red,
                };
                Line::from(vec![
                    Span::styled("bar ", Style::default().fg(Color::DarkGray)),
                    Span::styled(bar.bar_index.to_string(), Style::default().fg(Color::White)),
                    Span::styled("  ", Style::default()),
                    Span::styled(format_time(bar.open_time), Style::default().fg(Color::White)),
                    Span::styled("  O ", Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{:.4}", bar.open), Style::default().fg(Color::White)),
                    Span::styled("  H ", Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{:.4}", bar.high), Style::default().fg(Color::White)),
                    Span::styled("  L ", Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{:.4}", bar.low), Style::default().fg(Color::White)),
                    Span::styled("  C ", Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{:.4}", bar.close), Style::default().fg(close_color)),
                    Span::styled(
                        format!("  [{} / {}]", self.window_end, self.series_len),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            }
            None => Line::from(Span::styled(
                "no data in view",
                Style::default().fg(Color::DarkGray),
            )),
        };
        Paragraph::new(line).render(area, buf);
    }
}

fn format_time(open_time_ms: u64) -> String {
    chrono::DateTime::from_timestamp_millis(open_time_ms as i64)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| open_time_ms.to_string())
}

pub struct KeybindBar;

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = "1-8 timeframe | ←/→ scroll | PgUp/PgDn page | Home/End jump | q quit";
        Paragraph::new(Span::styled(line, Style::default().fg(Color::DarkGray))).render(area, buf);
    }
}
